//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;

/// Configure all API routes.
///
/// This function is called from main.rs to set up
/// all the endpoint routes.
///
/// ## Route Structure
///
/// ```text
/// /
/// ├── /                GET - Liveness acknowledgment
/// ├── /health          GET - Health check
/// ├── /cars
/// │   ├── ""           POST - Register vehicle
/// │   ├── ""           GET - List vehicles
/// │   ├── /{brand}     GET - Filter by brand
/// │   ├── /{id}        PUT - Update color and price
/// │   └── /{id}        DELETE - Remove vehicle
/// ├── /signup          POST - Register account
/// └── /login           POST - Check credentials
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - liveness acknowledgment
        .route("/", web::get().to(handlers::index))
        // Health check endpoint
        .route("/health", web::get().to(handlers::health_check))
        // Vehicle endpoints
        .service(
            web::scope("/cars")
                // Register a new vehicle
                .route("", web::post().to(handlers::create_car))
                // List all registered vehicles
                .route("", web::get().to(handlers::list_cars))
                // Filter vehicles by brand (exact match)
                .route("/{brand}", web::get().to(handlers::filter_by_brand))
                // Update a vehicle's color and price
                .route("/{id}", web::put().to(handlers::update_car))
                // Remove a vehicle
                .route("/{id}", web::delete().to(handlers::delete_car)),
        )
        // Account endpoints
        .route("/signup", web::post().to(handlers::signup))
        .route("/login", web::post().to(handlers::login));
}
