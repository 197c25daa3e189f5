//! # REST API Module
//!
//! This module defines all HTTP endpoints for the car registry API.
//!
//! ## Endpoint Overview
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness acknowledgment |
//! | GET | `/health` | Health check |
//! | POST | `/cars` | Register a vehicle |
//! | GET | `/cars` | List all vehicles |
//! | GET | `/cars/{brand}` | Filter vehicles by brand |
//! | PUT | `/cars/{id}` | Update a vehicle's color and price |
//! | DELETE | `/cars/{id}` | Remove a vehicle |
//! | POST | `/signup` | Register a user account |
//! | POST | `/login` | Check user credentials |
//!
//! ## Request/Response Format
//!
//! All bodies are JSON. Successes pair a `message` with an
//! endpoint-specific key; failures carry a `message` alone:
//!
//! ```json
//! // Success (POST /cars)
//! {
//!     "message": "Vehicle created successfully.",
//!     "car": { "id": 1, ... }
//! }
//!
//! // Failure
//! {
//!     "message": "all fields required"
//! }
//! ```
//!
//! No route requires authentication; login yields no token usable
//! elsewhere.

pub mod handlers;
pub mod routes;

pub use routes::configure_routes;
