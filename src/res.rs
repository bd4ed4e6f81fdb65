use axum::response::Html;

use crate::session::RequestContext;

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Escapes text for use inside HTML elements and quoted attributes.
pub fn escape(text: &str) -> String {
    // braces too, so user text never reaches a later `{placeholder}` replacement
    html_escape::encode_safe(text)
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Wraps a page body in the shared layout.
pub fn page(title: &str, ctx: &RequestContext, body: &str) -> Html<String> {
    let nav = match ctx.user_id {
        Some(user_id) => include_res!(str, "/pages/nav_user.html")
            .replace("{user_id}", &user_id.to_string()),
        None => include_res!(str, "/pages/nav_guest.html").to_owned(),
    };

    Html(
        include_res!(str, "/pages/layout.html")
            .replace("{title}", &escape(title))
            .replace("{nav}", &nav)
            .replace("{body}", body)
    )
}
