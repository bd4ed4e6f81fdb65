mod login;
mod logout;
mod register;

use axum::{middleware, routing::{get, post}, Router};

use crate::{session, AppState};

pub const MAX_USERNAME_LEN: usize = 16;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logout", get(logout::logout))
        .route_layer(middleware::from_fn(session::require_login))

        .route("/register", get(register::register_page))
        .route("/new_user", post(register::new_user))
        .route("/login", get(login::login_page).post(login::login))
}
