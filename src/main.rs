#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

mod api;
mod config;
mod database;
mod error;
mod ledger;
mod models;
mod protocol;
mod registry;
mod schema;
mod utils;

use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use tracing_subscriber::EnvFilter;

use crate::{
    api::Services,
    config::Config,
    database::{get_db_conn, MysqlStore},
    ledger::Ledger,
    registry::Registry,
};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

embed_migrations!("migrations");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let manager = ConnectionManager::<MysqlConnection>::new(config.database_url.as_str());
    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .context("Failed to create pool")?;

    let conn = get_db_conn(&pool)?;
    embedded_migrations::run(&conn).context("Failed to run migrations")?;
    drop(conn);
    tracing::info!("database ready");

    let store = Arc::new(MysqlStore::new(pool));
    let services = Services {
        accounts: Registry::new(store.clone(), config.admin.clone()),
        appointments: Ledger::new(store),
    };

    let bind = config.bind_addr();
    let static_dir = config.static_dir.clone();
    tracing::info!("backend running on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .data(services.clone())
            .app_data(api::json_config())
            .app_data(api::query_config())
            .service(web::scope("/api").configure(api::config))
            // frontend
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}", bind))?
    .run()
    .await
    .context("Server error")
}
