use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::Session;
use tracing::debug;

use crate::{AppError, AppResult};

pub const USER_ID: &str = "user_id";

/// Per-request view of who is asking, resolved from the session cookie.
pub struct RequestContext {
    session: Session,
    pub user_id: Option<i64>,
}

impl RequestContext {
    /// The logged-in user's id, or 403.
    pub fn require_login(&self) -> AppResult<i64> {
        self.user_id.ok_or_else(|| {
            debug!("login required");
            AppError::FORBIDDEN
        })
    }

    pub async fn log_in(&mut self, user_id: i64) -> AppResult<()> {
        self.session.cycle_id().await?;
        self.session.insert(USER_ID, user_id).await?;
        self.user_id = Some(user_id);
        Ok(())
    }

    pub async fn log_out(&mut self) -> AppResult<()> {
        self.session.flush().await?;
        self.user_id = None;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::from(msg))?;
        let user_id = session.get::<i64>(USER_ID).await?;

        Ok(RequestContext { session, user_id })
    }
}

/// Route layer turning away anonymous requests before any body is read.
pub async fn require_login(ctx: RequestContext, req: Request, next: Next) -> AppResult<Response> {
    ctx.require_login()?;
    Ok(next.run(req).await)
}
