use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    middleware::from_fn_with_state,
    routing::{get, on, post, put},
    Json, Router,
};
use model::{location::Location, WithId};
use utility::id::Id;

use crate::{
    common::{
        route_not_found, schema, HateoasResult, RouteErrorResponse, RouteResult,
        VecResponse, METHOD_FILTER_ALL,
    },
    hateoas,
    middleware::admin_auth::admin_auth_middleware,
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/locations{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    let admin = Router::new()
        .route("/", post(create_location))
        .route("/:id", put(update_location).delete(delete_location))
        .route_layer(from_fn_with_state(
            state.admin_token.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/schema", get(schema::<Location>))
        .route("/", get(get_locations))
        .route("/:id", get(get_location))
        .merge(admin)
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_locations(
    OriginalUri(original_uri): OriginalUri,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
) -> HateoasResult<VecResponse<hateoas::Response<Location>>> {
    directory_client
        .get_locations()
        .await
        .map(|locations| {
            let data = locations
                .into_iter()
                .map(location_hateoas)
                .collect::<Vec<_>>();
            VecResponse::new(data).hateoas().json()
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_location(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
) -> HateoasResult<Location> {
    directory_client
        .get_location(Id::new(id))
        .await
        .map(|location| location_hateoas(location).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create_location(
    OriginalUri(original_uri): OriginalUri,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
    Json(location): Json<Location>,
) -> HateoasResult<Location> {
    directory_client
        .create_location(location)
        .await
        .map(|location| location_hateoas(location).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn update_location(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
    Json(location): Json<Location>,
) -> HateoasResult<Location> {
    directory_client
        .update_location(WithId::new(Id::new(id), location))
        .await
        .map(|location| location_hateoas(location).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_location(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
) -> RouteResult<StatusCode> {
    directory_client
        .delete_location(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}

fn location_hateoas(location: WithId<Location>) -> hateoas::Response<Location> {
    let id = location.id.raw();
    let zip_code = location.content.zip_code.clone();
    hateoas::Response::builder(location.content)
        .link("self", resource!("/{}", id))
        .link("mosques", super::mosques::resource!("?location={}", id))
        .link("search", super::search::resource!("/{}", zip_code))
        .build()
}
