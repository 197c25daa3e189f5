//! # Car Registry Backend Service
//!
//! This is the main entry point for the backend service that manages
//! the car registry. It provides:
//!
//! - REST API for vehicle CRUD (create, list, filter, update, delete)
//! - Signup and login for user accounts with bcrypt-hashed passwords
//! - In-memory storage only; nothing survives a restart
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      BACKEND SERVICE                      │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │                   REST API (Actix)                  │  │
//! │  │  /cars  /cars/{brand}  /cars/{id}  /signup  /login  │  │
//! │  └──────────────────────────┬──────────────────────────┘  │
//! │                             │                             │
//! │  ┌──────────────────────────┴──────────────────────────┐  │
//! │  │                    SERVICE LAYER                    │  │
//! │  │     ┌──────────────┐        ┌──────────────┐        │  │
//! │  │     │ VehicleStore │        │ AccountStore │        │  │
//! │  │     └──────────────┘        └──────────────┘        │  │
//! │  └──────────────────────────┬──────────────────────────┘  │
//! │                             │                             │
//! │                  ┌──────────┴──────────┐                  │
//! │                  │  In-memory state    │                  │
//! │                  │  (process-owned)    │                  │
//! │                  └─────────────────────┘                  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! 1. Optionally copy `.env.example` to `.env` and adjust
//! 2. Start the server: `cargo run`
//!
//! ## Environment Variables
//!
//! `SERVER_HOST`, `SERVER_PORT`, `BCRYPT_COST`; see `config/mod.rs`.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;
mod config;
mod models;
mod services;

use config::AppConfig;
use services::{AccountStore, VehicleStore};

/// Application state shared across all handlers.
///
/// This struct contains the two stores every handler needs. Both are
/// constructed exactly once, here, and handed to the dispatcher by
/// reference; there are no ambient singletons.
pub struct AppState {
    /// In-memory vehicle collection.
    pub vehicle_store: VehicleStore,

    /// In-memory account collection.
    pub account_store: AccountStore,
}

/// Main entry point for the backend service.
///
/// This function:
/// 1. Initializes structured logging
/// 2. Loads configuration from environment
/// 3. Constructs the stores and shared state
/// 4. Launches the HTTP server
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // =========================================
    // STEP 1: Initialize Logging
    // =========================================
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Car Registry Backend Service");

    // =========================================
    // STEP 2: Load Configuration
    // =========================================
    dotenvy::dotenv().ok(); // It's okay if .env doesn't exist

    let config = AppConfig::from_env().expect("Failed to load configuration");

    info!("📋 Configuration loaded");
    info!("   bcrypt cost: {}", config.bcrypt_cost);

    // =========================================
    // STEP 3: Initialize Stores
    // =========================================
    let vehicle_store = VehicleStore::new();
    let account_store = AccountStore::new(config.clone());

    info!("🔧 Stores initialized");

    // =========================================
    // STEP 4: Create Application State
    // =========================================
    let app_state = Arc::new(AppState {
        vehicle_store,
        account_store,
    });

    // =========================================
    // STEP 5: Start HTTP Server
    // =========================================
    let server_host = config.server_host.clone();
    let server_port = config.server_port;

    info!("🌐 Starting HTTP server on {}:{}", server_host, server_port);

    HttpServer::new(move || {
        App::new()
            // Attach shared application state
            .app_data(web::Data::new(app_state.clone()))
            // Add logging middleware
            .wrap(middleware::Logger::default())
            // Allow any origin
            .wrap(Cors::permissive())
            // Configure API routes
            .configure(api::configure_routes)
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await
}
