use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{Method, StatusCode},
    middleware::from_fn_with_state,
    routing::{get, on, post, put},
    Json, Router,
};
use model::{mosque::Mosque, WithId};
use serde::Deserialize;
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
        crate::api::v1::resource!("/mosques{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    let admin = Router::new()
        .route("/", post(create_mosque))
        .route("/:id", put(update_mosque).delete(delete_mosque))
        .route_layer(from_fn_with_state(
            state.admin_token.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/schema", get(schema::<Mosque>))
        .route("/", get(get_mosques))
        .route("/:id", get(get_mosque))
        .merge(admin)
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Deserialize)]
struct MosquesQuery {
    location: Option<String>,
}

async fn get_mosques(
    OriginalUri(original_uri): OriginalUri,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
    Query(params): Query<MosquesQuery>,
) -> HateoasResult<VecResponse<hateoas::Response<Mosque>>> {
    let mosques = match params.location {
        Some(location) => {
            directory_client
                .get_mosques_at(&Id::new(location))
                .await
        }
        None => directory_client.get_mosques().await,
    };
    mosques
        .map(|mosques| {
            let data = mosques.into_iter().map(mosque_hateoas).collect::<Vec<_>>();
            VecResponse::new(data).hateoas().json()
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_mosque(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
) -> HateoasResult<Mosque> {
    directory_client
        .get_mosque(Id::new(id))
        .await
        .map(|mosque| mosque_hateoas(mosque).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create_mosque(
    OriginalUri(original_uri): OriginalUri,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
    Json(mosque): Json<Mosque>,
) -> HateoasResult<Mosque> {
    directory_client
        .create_mosque(mosque)
        .await
        .map(|mosque| mosque_hateoas(mosque).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn update_mosque(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
    Json(mosque): Json<Mosque>,
) -> HateoasResult<Mosque> {
    directory_client
        .update_mosque(WithId::new(Id::new(id), mosque))
        .await
        .map(|mosque| mosque_hateoas(mosque).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_mosque(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState {
        directory_client, ..
    }): State<WebState>,
) -> RouteResult<StatusCode> {
    directory_client
        .delete_mosque(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}

fn mosque_hateoas(mosque: WithId<Mosque>) -> hateoas::Response<Mosque> {
    let id = mosque.id.raw();
    let location_id = mosque.content.location_id.raw();
    hateoas::Response::builder(mosque.content)
        .link("self", resource!("/{}", id))
        .link("location", super::locations::resource!("/{}", location_id))
        .link("siblings", resource!("?location={}", location_id))
        .build()
}
