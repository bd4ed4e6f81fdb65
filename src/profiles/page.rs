use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};

use crate::{include_res, res::{self, escape}, session::RequestContext, store::{ForumStore, UserStore}, AppError, AppResult, AppState, IdPath};

#[debug_handler(state = AppState)]
pub(crate) async fn profile(
    IdPath(user_id): IdPath,
    State(users): State<UserStore>,
    State(forum): State<ForumStore>,
    ctx: RequestContext,
) -> AppResult<Response> {
    let Some(user) = users.get_user(user_id).await? else {
        return Err(AppError::NOT_FOUND);
    };

    let image = if user.has_image {
        include_res!(str, "/pages/profiles/image.html")
            .replace("{id}", &user.id.to_string())
    } else {
        String::new()
    };

    let mut message_items = String::new();
    for message in forum.get_user_messages(user.id).await? {
        message_items += &include_res!(str, "/pages/profiles/message_item.html")
            .replace("{thread_id}", &message.thread_id.to_string())
            .replace("{sent_at}", &escape(&message.sent_at))
            .replace("{thread_title}", &escape(&message.thread_title))
            .replace("{content}", &escape(&message.content));
    }

    let body = include_res!(str, "/pages/profiles/profile.html")
        .replace("{image}", &image)
        .replace("{message_items}", &message_items)
        .replace("{username}", &escape(&user.username));

    Ok(res::page(&user.username, &ctx, &body).into_response())
}
