mod image;
mod page;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};

use crate::{session, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        // the handler stops reading past the image size limit itself
        .route(
            "/add_image",
            get(image::add_image_page).post(image::add_image).layer(DefaultBodyLimit::disable()),
        )
        .route_layer(middleware::from_fn(session::require_login))

        .route("/user/{id}", get(page::profile))
        .route("/image/{id}", get(image::show_image))
}
