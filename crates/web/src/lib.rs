pub use crate::common::RouteResult;

use axum::{extract::FromRef, Router};
use database::PgDatabase;
use directory::client::Client;
use tokio::net::TcpListener;

use crate::middleware::admin_auth::AdminToken;

pub mod api;
pub mod common;
pub mod hateoas;
pub mod middleware;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub directory_client: Client<PgDatabase>,
    pub admin_token: AdminToken,
}

pub async fn start_web_server(
    state: WebState,
    bind_address: &str,
) -> std::io::Result<()> {
    let routes = Router::new().nest_service("/api", api::routes(state));

    let listener = TcpListener::bind(bind_address).await?;
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
