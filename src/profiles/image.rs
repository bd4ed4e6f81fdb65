use axum::{
    debug_handler,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, info};

use crate::{include_res, res, session::RequestContext, store::UserStore, AppError, AppResult, AppState, IdPath};

pub const MAX_IMAGE_SIZE: usize = 100 * 1024;

#[debug_handler]
pub(crate) async fn add_image_page(ctx: RequestContext) -> Response {
    res::page("Profiilikuva", &ctx, include_res!(str, "/pages/profiles/add_image.html")).into_response()
}

#[debug_handler(state = AppState)]
pub(crate) async fn add_image(
    State(users): State<UserStore>,
    ctx: RequestContext,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let user_id = ctx.require_login()?;

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        if !field.file_name().is_some_and(|name| name.ends_with(".jpg")) {
            return Ok("Väärä tiedostomuoto".into_response());
        }

        // read in chunks so an oversized upload is dropped early
        let mut image = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if image.len() + chunk.len() > MAX_IMAGE_SIZE {
                debug!("image from #{user_id} over {MAX_IMAGE_SIZE} bytes");
                return Ok("Liian suuri kuva".into_response());
            }
            image.extend_from_slice(&chunk);
        }

        users.update_image(user_id, &image).await?;
        info!("#{user_id} set a {} byte profile image", image.len());
        return Ok(Redirect::to(&format!("/user/{user_id}")).into_response());
    }

    Ok("Väärä tiedostomuoto".into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn show_image(
    IdPath(user_id): IdPath,
    State(users): State<UserStore>,
) -> AppResult<Response> {
    let Some(image) = users.get_image(user_id).await? else {
        return Err(AppError::NOT_FOUND);
    };

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], image).into_response())
}
