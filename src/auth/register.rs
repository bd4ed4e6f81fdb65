use axum::{debug_handler, extract::State, response::{IntoResponse, Response}, Form};
use serde::Deserialize;
use tracing::warn;

use crate::{include_res, res, session::RequestContext, store::{StoreError, UserStore}, AppError, AppResult, AppState};

use super::MAX_USERNAME_LEN;

#[derive(Deserialize)]
pub(crate) struct NewUserForm {
    username: String,
    password1: String,
    password2: String,
}

#[debug_handler]
pub(crate) async fn register_page(ctx: RequestContext) -> Response {
    res::page("Rekisteröidy", &ctx, include_res!(str, "/pages/register.html")).into_response()
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_user(
    State(users): State<UserStore>,
    Form(NewUserForm { username, password1, password2 }): Form<NewUserForm>,
) -> AppResult<Response> {
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::FORBIDDEN);
    }

    if password1 != password2 {
        return Ok("VIRHE: salasanat eivät ole samat".into_response());
    }

    match users.create_user(&username, &password1).await {
        Ok(_) => Ok("Tunnus luotu".into_response()),
        Err(StoreError::UsernameTaken) => {
            warn!("username {username} already taken");
            Ok("VIRHE: tunnus on jo varattu".into_response())
        }
        Err(e) => Err(e.into()),
    }
}
