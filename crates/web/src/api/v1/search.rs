use std::time::Instant;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on},
    Router,
};
use model::search::SearchResult;
use serde::Serialize;

use crate::{
    common::{route_not_found, HateoasResult, RouteErrorResponse, METHOD_FILTER_ALL},
    hateoas, WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/search{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/:query", get(search))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBenchmark {
    resolve_secs: f64,
}

async fn search(
    OriginalUri(original_uri): OriginalUri,
    Path(query): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
) -> HateoasResult<SearchResult> {
    let started = Instant::now();
    let result = directory_client.search(&query).await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    })?;
    let benchmark = SearchBenchmark {
        resolve_secs: started.elapsed().as_secs_f64(),
    };

    match result {
        Some(result) => Ok(search_hateoas(result, benchmark).json()),
        None => Err(RouteErrorResponse::new(StatusCode::NOT_FOUND)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
            .with_message("No location or mosque matched the search.")),
    }
}

fn search_hateoas(
    result: SearchResult,
    benchmark: SearchBenchmark,
) -> hateoas::Response<SearchResult> {
    let location_id = result.location.id.raw();
    let matched_mosque = result
        .matched_mosque
        .as_ref()
        .map(|mosque| super::mosques::resource!("/{}", mosque.id.raw()));
    hateoas::Response::builder(result)
        .link("location", super::locations::resource!("/{}", location_id))
        .link(
            "mosques",
            super::mosques::resource!("?location={}", location_id),
        )
        .link_option("matchedMosque", matched_mosque)
        .debug_info("benchmark", benchmark)
        .build()
}
