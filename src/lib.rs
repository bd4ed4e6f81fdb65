pub mod auth;
pub mod config;
pub mod db;
pub mod index;
pub mod profiles;
pub mod res;
pub mod session;
pub mod store;
pub mod threads;

use axum::{extract::{FromRef, FromRequestParts, Path}, http::{request::Parts, StatusCode}, response::{IntoResponse, Response}, routing::get, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::{Key, SameSite}, Expiry, MemoryStore, SessionManagerLayer};

use store::{ForumStore, StoreError, UserStore};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub users: UserStore,
    pub forum: ForumStore,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            users: UserStore::new(db_pool.clone()),
            forum: ForumStore::new(db_pool),
        }
    }
}

/// Builds the whole application with its session layer.
pub fn app(app_state: AppState, key: Key, session_ttl: time::Duration) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(session_ttl))
        .with_signed(key);

    Router::new()
        .route("/", get(index::index))
        .route("/search", get(index::search))

        .merge(auth::router())
        .merge(threads::router())
        .merge(profiles::router())

        .with_state(app_state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

/// A numeric `{id}` path segment. Anything else is a 404.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NOT_FOUND)?;
        Ok(IdPath(id))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Ends the request with a bare status, e.g. 403 or 404.
    Status(StatusCode),
    Internal(anyhow::Error),
}

impl AppError {
    pub const FORBIDDEN: AppError = AppError::Status(StatusCode::FORBIDDEN);
    pub const NOT_FOUND: AppError = AppError::Status(StatusCode::NOT_FOUND);
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Status(status) => status.into_response(),
            AppError::Internal(err) => {
                tracing::error!("{err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{}\n\n{}", err, err.backtrace()),
                )
                    .into_response()
            }
        }
    }
}

impl From<StatusCode> for AppError {
    fn from(status: StatusCode) -> Self {
        Self::Status(status)
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        Self::Internal(anyhow::Error::msg(err))
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        Self::Internal(anyhow::Error::msg(err.to_owned()))
    }
}

macro_rules! apperr_impl {
    ($E:ty) => {
        impl From<$E> for AppError {
            fn from(err: $E) -> Self {
                Self::Internal(anyhow::Error::from(err))
            }
        }
    };
}

apperr_impl!(StoreError);
apperr_impl!(tower_sessions::session::Error);

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::Status(err.status())
    }
}
