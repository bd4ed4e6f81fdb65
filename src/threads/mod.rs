mod edit;
mod new;
mod remove;
mod thread;

use axum::{middleware, routing::{get, post}, Router};
use tracing::warn;

use crate::{db::Message, session::{self, RequestContext}, store::ForumStore, AppError, AppResult, AppState};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_CONTENT_LEN: usize = 5000;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new_thread", post(new::new_thread))
        .route("/new_message", post(new::new_message))
        .route("/edit/{id}", get(edit::edit_page).post(edit::edit_message))
        .route("/remove/{id}", get(remove::remove_page).post(remove::remove_message))
        .route_layer(middleware::from_fn(session::require_login))

        .route("/thread/{id}", get(thread::thread))
}

fn too_long(text: &str, max: usize) -> bool {
    text.chars().count() > max
}

/// Loads a message the logged-in user wrote. Anything else is a 403.
async fn own_message(forum: &ForumStore, ctx: &RequestContext, message_id: i64) -> AppResult<Message> {
    let user_id = ctx.require_login()?;

    match forum.get_message(message_id).await? {
        Some(message) if message.user_id == user_id => Ok(message),
        Some(_) => {
            warn!("#{user_id} tried to touch message #{message_id} of someone else");
            Err(AppError::FORBIDDEN)
        }
        None => Err(AppError::FORBIDDEN),
    }
}
