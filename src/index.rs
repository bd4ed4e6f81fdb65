use axum::{debug_handler, extract::{Query, State}, response::{IntoResponse, Response}};
use serde::Deserialize;

use crate::{include_res, res::{self, escape}, session::RequestContext, store::ForumStore, AppResult, AppState};

#[derive(Deserialize)]
pub(crate) struct SearchQuery {
    query: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn index(
    State(forum): State<ForumStore>,
    ctx: RequestContext,
) -> AppResult<Response> {
    let mut thread_items = String::new();
    for thread in forum.get_threads().await? {
        thread_items += &include_res!(str, "/pages/thread_item.html")
            .replace("{id}", &thread.id.to_string())
            .replace("{count}", &thread.message_count.to_string())
            .replace("{last}", &escape(thread.last_message_at.as_deref().unwrap_or("-")))
            .replace("{title}", &escape(&thread.title));
    }

    let new_thread = if ctx.user_id.is_some() {
        include_res!(str, "/pages/new_thread.html")
    } else {
        ""
    };

    let body = include_res!(str, "/pages/index.html")
        .replace("{new_thread}", new_thread)
        .replace("{thread_items}", &thread_items);

    Ok(res::page("Keskustelualue", &ctx, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn search(
    State(forum): State<ForumStore>,
    Query(SearchQuery { query }): Query<SearchQuery>,
    ctx: RequestContext,
) -> AppResult<Response> {
    let query = query.unwrap_or_default();
    let results = if query.is_empty() {
        Vec::new()
    } else {
        forum.search(&query).await?
    };

    let mut result_items = String::new();
    for result in &results {
        result_items += &include_res!(str, "/pages/search_item.html")
            .replace("{thread_id}", &result.thread_id.to_string())
            .replace("{id}", &result.id.to_string())
            .replace("{sent_at}", &escape(&result.sent_at))
            .replace("{username}", &escape(&result.username))
            .replace("{thread_title}", &escape(&result.thread_title))
            .replace("{content}", &escape(&result.content));
    }

    let summary = if query.is_empty() {
        String::new()
    } else {
        format!("<p>Hakutuloksia: {}</p>", results.len())
    };

    let body = include_res!(str, "/pages/search.html")
        .replace("{summary}", &summary)
        .replace("{result_items}", &result_items)
        .replace("{query}", &escape(&query));

    Ok(res::page("Haku", &ctx, &body).into_response())
}
