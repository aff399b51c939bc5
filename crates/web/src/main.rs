use database::{DatabaseConnectionInfo, PgDatabase};
use directory::client::Client;
use web::{middleware::admin_auth::AdminToken, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let database = PgDatabase::connect(database_connection_info)
        .await
        .expect("could not connect to database.");

    // admin gate
    let admin_token =
        std::env::var("ADMIN_TOKEN").expect("expected ADMIN_TOKEN in env.");

    let bind_address = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    log::info!("starting web server on {}", bind_address);

    // web server
    let web_future = start_web_server(
        WebState {
            directory_client: Client::new(database),
            admin_token: AdminToken::new(admin_token),
        },
        &bind_address,
    );

    let _ = web_future.await;
}
