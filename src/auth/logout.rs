use axum::{debug_handler, response::Redirect};

use crate::{session::RequestContext, AppResult};

#[debug_handler]
pub(crate) async fn logout(mut ctx: RequestContext) -> AppResult<Redirect> {
    ctx.require_login()?;

    ctx.log_out().await?;
    Ok(Redirect::to("/"))
}
