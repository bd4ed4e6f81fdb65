use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};

use crate::{include_res, res::{self, escape}, session::RequestContext, store::ForumStore, AppError, AppResult, AppState, IdPath};

#[debug_handler(state = AppState)]
pub(crate) async fn thread(
    State(forum): State<ForumStore>,
    IdPath(thread_id): IdPath,
    ctx: RequestContext,
) -> AppResult<Response> {
    let Some(thread) = forum.get_thread(thread_id).await? else {
        return Err(AppError::NOT_FOUND);
    };

    let mut messages = String::new();
    for message in forum.get_messages(thread_id).await? {
        let actions = if ctx.user_id == Some(message.user_id) {
            include_res!(str, "/pages/threads/message_actions.html")
                .replace("{id}", &message.id.to_string())
        } else {
            String::new()
        };

        messages += &include_res!(str, "/pages/threads/message.html")
            .replace("{actions}", &actions)
            .replace("{id}", &message.id.to_string())
            .replace("{user_id}", &message.user_id.to_string())
            .replace("{sent_at}", &escape(&message.sent_at))
            .replace("{username}", &escape(&message.username))
            .replace("{content}", &escape(&message.content));
    }

    let reply = if ctx.user_id.is_some() {
        include_res!(str, "/pages/threads/reply.html")
            .replace("{thread_id}", &thread.id.to_string())
    } else {
        String::new()
    };

    let body = include_res!(str, "/pages/threads/thread.html")
        .replace("{messages}", &messages)
        .replace("{reply}", &reply)
        .replace("{created_at}", &escape(&thread.created_at))
        .replace("{title}", &escape(&thread.title));

    Ok(res::page(&thread.title, &ctx, &body).into_response())
}
