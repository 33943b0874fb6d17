use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clinic_booking_backend::store::MongoStore;
use clinic_booking_backend::{AppState, Config, routes};
use dotenv::dotenv;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env();

    let store = MongoStore::connect(&config.mongo_uri, &config.database).await?;
    info!("record store connected (database {})", config.database);

    let state = web::Data::new(AppState::new(Arc::new(store), config.windows_cache_ttl));

    info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    Ok(())
}
