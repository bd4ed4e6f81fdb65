use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use tracing::info;

use crate::{include_res, res::{self, escape}, session::RequestContext, store::ForumStore, AppResult, AppState, IdPath};

use super::own_message;

#[derive(Deserialize)]
pub(crate) struct RemoveForm {
    #[serde(rename = "continue")]
    confirm: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn remove_page(
    State(forum): State<ForumStore>,
    IdPath(message_id): IdPath,
    ctx: RequestContext,
) -> AppResult<Response> {
    let message = own_message(&forum, &ctx, message_id).await?;

    let body = include_res!(str, "/pages/threads/remove.html")
        .replace("{id}", &message.id.to_string())
        .replace("{thread_id}", &message.thread_id.to_string())
        .replace("{content}", &escape(&message.content));

    Ok(res::page("Poista viesti", &ctx, &body).into_response())
}

/// Only removes when the form carries the confirmation button.
#[debug_handler(state = AppState)]
pub(crate) async fn remove_message(
    State(forum): State<ForumStore>,
    IdPath(message_id): IdPath,
    ctx: RequestContext,
    Form(RemoveForm { confirm }): Form<RemoveForm>,
) -> AppResult<Redirect> {
    let message = own_message(&forum, &ctx, message_id).await?;

    if confirm.is_some() {
        forum.remove_message(message.id).await?;
        info!("message #{} removed", message.id);
    }

    Ok(Redirect::to(&format!("/thread/{}", message.thread_id)))
}
