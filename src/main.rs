mod handlers;
mod models;
mod db;
mod errors;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool().await;
    db::ensure_schema(&pool)
        .await
        .expect("Failed to initialize the employees table");

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(handlers::employee::routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
