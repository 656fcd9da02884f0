use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use event_adder_parser::{Encoding, Error, EventData, LinkBuilder, Page};
use log::{debug, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::cache::PageCache;

pub struct AppState {
    pub cache: Arc<PageCache>,
    pub encoding: Encoding,
    /// Lowercase hosts pages may be fetched from.
    pub upstreams: Vec<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/event", get(handle_event))
        .route("/events", get(handle_events))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
        .with_state(state)
}

#[derive(Deserialize)]
struct EventQuery {
    url: String,
    #[serde(default)]
    event: usize,
    encode: Option<bool>,
    #[serde(default)]
    json: bool,
}

#[derive(Deserialize)]
struct EventsQuery {
    url: String,
    encode: Option<bool>,
}

#[derive(Serialize)]
struct EventLink {
    index: usize,
    event: EventData,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl EventLink {
    fn new(index: usize, event: EventData, link: Result<String, Error>) -> Self {
        let (link, error) = match link {
            Ok(link) => (Some(link), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            index,
            event,
            link,
            error,
        }
    }
}

async fn handle_event(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventQuery>,
) -> Response {
    let body = match fetch_page(&state, &query.url).await {
        Ok(body) => body,
        Err(response) => return response,
    };

    // A Location header has to carry a URI, so redirects encode unless told not to.
    let encode = query.encode.or((!query.json).then_some(true));
    let links = link_builder(&state, encode);
    let Some((event, link)) = Page::parse(&*body).click(query.event, &links) else {
        return (StatusCode::NOT_FOUND, "No add-event trigger at this index").into_response();
    };

    match link {
        Ok(link) if query.json => {
            Json(EventLink::new(query.event, event, Ok(link))).into_response()
        }
        Ok(link) => redirect(link),
        Err(err) => {
            warn!("event {} of {}: {err}", query.event, query.url);
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
    }
}

// Raw links may contain characters a Location header cannot carry.
fn redirect(link: String) -> Response {
    match HeaderValue::try_from(link) {
        Ok(location) => (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response(),
        Err(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Link is not a valid Location header, retry with encode=true",
        )
            .into_response(),
    }
}

async fn handle_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let body = match fetch_page(&state, &query.url).await {
        Ok(body) => body,
        Err(response) => return response,
    };

    let links = link_builder(&state, query.encode);
    let events = Page::parse(&*body)
        .click_all(&links)
        .into_iter()
        .enumerate()
        .map(|(index, (event, link))| EventLink::new(index, event, link))
        .collect::<Vec<_>>();

    Json(events).into_response()
}

fn link_builder(state: &AppState, encode: Option<bool>) -> LinkBuilder {
    let encoding = match encode {
        Some(true) => Encoding::Percent,
        Some(false) => Encoding::Raw,
        None => state.encoding,
    };

    LinkBuilder::new().encoding(encoding)
}

async fn fetch_page(state: &AppState, url: &str) -> Result<Arc<str>, Response> {
    check_upstream(state, url)
        .map_err(|reason| (StatusCode::BAD_REQUEST, reason).into_response())?;

    if let Some(body) = state.cache.get(url).await {
        debug!("page cache hit for {url}");
        return Ok(body);
    }

    let body = match fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            warn!("failed to fetch {url}: {err}");
            return Err((StatusCode::BAD_GATEWAY, "Failed to fetch page").into_response());
        }
    };

    Ok(Arc::clone(&state.cache).insert(url.to_owned(), body).await)
}

fn check_upstream(state: &AppState, url: &str) -> Result<(), String> {
    let url = Url::parse(url).map_err(|err| format!("Invalid page URL: {err}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Unsupported scheme `{}`", url.scheme()));
    }

    match url.host_str() {
        Some(host) if state.upstreams.iter().any(|upstream| upstream == host) => Ok(()),
        _ => Err("Host is not an allowed upstream".to_owned()),
    }
}

async fn fetch(url: &str) -> reqwest::Result<String> {
    reqwest::get(url).await?.error_for_status()?.text().await
}
