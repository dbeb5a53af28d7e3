mod config;
mod db;
mod envelope;
mod error;
mod input;
mod security;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.host.clone(), config.port);

    info!("Server running at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .service(services::configure_routes())
    })
    .bind(bind)?
    .run()
    .await
}
