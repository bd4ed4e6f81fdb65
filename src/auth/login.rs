use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{include_res, res, session::RequestContext, store::UserStore, AppResult, AppState};

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    username: String,
    password: String,
}

#[debug_handler]
pub(crate) async fn login_page(ctx: RequestContext) -> Response {
    res::page("Kirjaudu", &ctx, include_res!(str, "/pages/login.html")).into_response()
}

#[debug_handler(state = AppState)]
pub(crate) async fn login(
    State(users): State<UserStore>,
    mut ctx: RequestContext,
    Form(LoginForm { username, password }): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user_id) = users.check_login(&username, &password).await? else {
        warn!("failed login for {username}");
        return Ok("VIRHE: väärä tunnus tai salasana".into_response());
    };

    ctx.log_in(user_id).await?;
    info!("welcome @{username}#{user_id}");

    Ok(Redirect::to("/").into_response())
}
