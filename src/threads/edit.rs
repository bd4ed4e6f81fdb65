use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;

use crate::{include_res, res::{self, escape}, session::RequestContext, store::ForumStore, AppError, AppResult, AppState, IdPath};

use super::{own_message, too_long, MAX_CONTENT_LEN};

#[derive(Deserialize)]
pub(crate) struct EditForm {
    content: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn edit_page(
    State(forum): State<ForumStore>,
    IdPath(message_id): IdPath,
    ctx: RequestContext,
) -> AppResult<Response> {
    let message = own_message(&forum, &ctx, message_id).await?;

    let body = include_res!(str, "/pages/threads/edit.html")
        .replace("{id}", &message.id.to_string())
        .replace("{thread_id}", &message.thread_id.to_string())
        .replace("{content}", &escape(&message.content));

    Ok(res::page("Muokkaa viestiä", &ctx, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn edit_message(
    State(forum): State<ForumStore>,
    IdPath(message_id): IdPath,
    ctx: RequestContext,
    Form(EditForm { content }): Form<EditForm>,
) -> AppResult<Redirect> {
    let message = own_message(&forum, &ctx, message_id).await?;

    if too_long(&content, MAX_CONTENT_LEN) {
        return Err(AppError::FORBIDDEN);
    }

    forum.update_message(message.id, &content).await?;
    Ok(Redirect::to(&format!("/thread/{}", message.thread_id)))
}
