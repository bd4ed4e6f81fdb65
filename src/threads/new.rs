use axum::{debug_handler, extract::State, response::Redirect, Form};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{session::RequestContext, store::{ForumStore, StoreError}, AppError, AppResult, AppState};

use super::{too_long, MAX_CONTENT_LEN, MAX_TITLE_LEN};

#[derive(Deserialize)]
pub(crate) struct NewThreadForm {
    title: String,
    content: String,
}

#[derive(Deserialize)]
pub(crate) struct NewMessageForm {
    content: String,
    thread_id: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_thread(
    State(forum): State<ForumStore>,
    ctx: RequestContext,
    Form(NewThreadForm { title, content }): Form<NewThreadForm>,
) -> AppResult<Redirect> {
    let user_id = ctx.require_login()?;

    if too_long(&title, MAX_TITLE_LEN) || too_long(&content, MAX_CONTENT_LEN) {
        debug!("new thread from #{user_id} exceeds length limits");
        return Err(AppError::FORBIDDEN);
    }

    let thread_id = forum.add_thread(&title, &content, user_id).await?;
    Ok(Redirect::to(&format!("/thread/{thread_id}")))
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_message(
    State(forum): State<ForumStore>,
    ctx: RequestContext,
    Form(NewMessageForm { content, thread_id }): Form<NewMessageForm>,
) -> AppResult<Redirect> {
    let user_id = ctx.require_login()?;

    if too_long(&content, MAX_CONTENT_LEN) {
        debug!("message from #{user_id} exceeds length limit");
        return Err(AppError::FORBIDDEN);
    }

    let Ok(thread_id) = thread_id.trim().parse::<i64>() else {
        return Err(AppError::FORBIDDEN);
    };

    match forum.add_message(&content, user_id, thread_id).await {
        Ok(_) => Ok(Redirect::to(&format!("/thread/{thread_id}"))),
        Err(StoreError::NoSuchThread(_)) => {
            warn!("#{user_id} posted to missing thread #{thread_id}");
            Err(AppError::FORBIDDEN)
        }
        Err(e) => Err(e.into()),
    }
}
