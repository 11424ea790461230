// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{start_purge_task, PinRequestLimiter, SmsClient};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting contact-verification service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. SMS delivery and per-user throttling
    let sms = match SmsClient::from_config(&config) {
        Ok(client) => web::Data::new(client),
        Err(e) => {
            log::error!("Failed to initialize SMS client: {:#}", e);
            std::process::exit(1);
        }
    };
    if sms.is_dry_run() {
        log::warn!("SMS gateway not configured, running in dry-run mode");
    }

    let limiter = Arc::new(PinRequestLimiter::per_minute(config.pin_requests_per_minute));
    log::info!(
        "Code requests limited to {} per user per minute",
        config.pin_requests_per_minute
    );

    start_purge_task(
        pool.clone(),
        limiter.clone(),
        config.pin_lifetime_secs,
        config.purge_interval_secs,
    );
    log::info!(
        "Started verification purge task (interval: {}s)",
        config.purge_interval_secs
    );

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let limiter = web::Data::from(limiter);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .app_data(sms.clone())
            .app_data(limiter.clone())
            .app_data(handlers::json_config())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .configure(handlers::health_config)
            .configure(handlers::countries_config)
            .configure(handlers::verification_config)
            .configure(handlers::contacts_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
