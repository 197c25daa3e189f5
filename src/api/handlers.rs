//! # API Request Handlers
//!
//! This module contains the handler functions for each API endpoint.
//! Each handler:
//! 1. Extracts request data
//! 2. Invokes the corresponding store operation
//! 3. Maps the result to a response body and status code
//!
//! ## Error Handling
//!
//! Store errors are translated once, here, into `{ "message": ... }`
//! bodies: validation failures and conflicts map to 400, missing records
//! and the empty collection to 404, unexpected hashing/lock failures
//! to 500. Nothing propagates past the handler.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use tracing::{error, info, warn};

use crate::models::{
    CreateVehicleRequest, FilteredVehiclesResponse, LoginRequest, MessageResponse, SignupRequest,
    SignupResponse, UpdateVehicleRequest, VehicleCreatedResponse, VehicleDeletedResponse,
    VehicleUpdatedResponse,
};
use crate::services::{AccountError, VehicleError};
use crate::AppState;

/// Map a vehicle store error to its response.
fn vehicle_error_response(error: &VehicleError) -> HttpResponse {
    let status = match error {
        VehicleError::MissingFields | VehicleError::MissingColorOrPrice => StatusCode::BAD_REQUEST,
        VehicleError::NoVehicles | VehicleError::NotFound(_) => StatusCode::NOT_FOUND,
        VehicleError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
    };

    HttpResponse::build(status).json(MessageResponse {
        message: error.to_string(),
    })
}

/// Map an account store error to its response.
fn account_error_response(error: &AccountError) -> HttpResponse {
    let status = match error {
        AccountError::MissingFields
        | AccountError::AlreadyExists
        | AccountError::IncorrectPassword => StatusCode::BAD_REQUEST,
        AccountError::NotFound(_) => StatusCode::NOT_FOUND,
        AccountError::Hashing(_) | AccountError::LockPoisoned => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    HttpResponse::build(status).json(MessageResponse {
        message: error.to_string(),
    })
}

/// Root endpoint.
///
/// ## Endpoint
///
/// `GET /`
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json("OK")
}

/// Health check endpoint.
///
/// The service holds no external connections, so being able to answer at
/// all is the whole check.
///
/// ## Endpoint
///
/// `GET /health`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:5050/health
/// ```
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json("OK")
}

/// Register a new vehicle.
///
/// ## Endpoint
///
/// `POST /cars`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:5050/cars \
///   -H "Content-Type: application/json" \
///   -d '{
///     "model": "Civic",
///     "brand": "Honda",
///     "year": "2014/2015",
///     "color": "Azul",
///     "price": 40000
///   }'
/// ```
///
/// **Response (201):**
/// ```json
/// {
///     "message": "Vehicle created successfully.",
///     "car": { "id": 1, "model": "Civic", ... }
/// }
/// ```
///
/// ## Errors
///
/// - 400 `"all fields required"` - A field is missing, empty, or a zero price
pub async fn create_car(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreateVehicleRequest>,
) -> HttpResponse {
    info!("Create vehicle request: {:?} {:?}", body.brand, body.model);

    match state.vehicle_store.create(body.into_inner()) {
        Ok(car) => HttpResponse::Created().json(VehicleCreatedResponse {
            message: "Vehicle created successfully.".to_string(),
            car,
        }),
        Err(e) => {
            warn!("Create vehicle failed: {}", e);
            vehicle_error_response(&e)
        }
    }
}

/// List all registered vehicles.
///
/// Answers with a bare JSON array. An empty collection is a 404, not an
/// empty success.
///
/// ## Endpoint
///
/// `GET /cars`
pub async fn list_cars(state: web::Data<Arc<AppState>>) -> HttpResponse {
    match state.vehicle_store.list() {
        Ok(cars) => HttpResponse::Ok().json(cars),
        Err(e) => vehicle_error_response(&e),
    }
}

/// Filter vehicles by brand.
///
/// Exact, case-sensitive match. Zero matches is a 200 with an empty list;
/// there is no existence check on the brand.
///
/// ## Endpoint
///
/// `GET /cars/{brand}`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:5050/cars/Honda
/// ```
pub async fn filter_by_brand(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> HttpResponse {
    let brand = path.into_inner();
    info!("Filter vehicles by brand: {}", brand);

    match state.vehicle_store.filter_by_brand(&brand) {
        Ok(vehicles) => HttpResponse::Ok().json(FilteredVehiclesResponse {
            message: "Vehicles filtered successfully".to_string(),
            vehicles,
        }),
        Err(e) => {
            error!("Filter vehicles failed: {}", e);
            vehicle_error_response(&e)
        }
    }
}

/// Update a vehicle's color and price.
///
/// Only these two attributes are mutable; the rest of the record is fixed
/// at creation.
///
/// ## Endpoint
///
/// `PUT /cars/{id}`
///
/// ## Example
///
/// ```bash
/// curl -X PUT http://127.0.0.1:5050/cars/1 \
///   -H "Content-Type: application/json" \
///   -d '{ "color": "Preto", "price": 38000 }'
/// ```
///
/// ## Errors
///
/// - 400 `"color and price are required"` - A field is missing or empty
/// - 404 `"vehicle not found: {id}"` - No vehicle has this id
pub async fn update_car(
    state: web::Data<Arc<AppState>>,
    path: web::Path<u32>,
    body: web::Json<UpdateVehicleRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    info!("Update vehicle request: id={}", id);

    match state.vehicle_store.update(id, body.into_inner()) {
        Ok(found_car) => HttpResponse::Ok().json(VehicleUpdatedResponse {
            message: "Vehicle updated successfully".to_string(),
            found_car,
        }),
        Err(e) => {
            warn!("Update vehicle {} failed: {}", id, e);
            vehicle_error_response(&e)
        }
    }
}

/// Remove a vehicle.
///
/// ## Endpoint
///
/// `DELETE /cars/{id}`
///
/// ## Errors
///
/// - 404 `"vehicle not found: {id}"` - No vehicle has this id
pub async fn delete_car(state: web::Data<Arc<AppState>>, path: web::Path<u32>) -> HttpResponse {
    let id = path.into_inner();
    info!("Delete vehicle request: id={}", id);

    match state.vehicle_store.delete(id) {
        Ok(vehicle) => HttpResponse::Ok().json(VehicleDeletedResponse {
            message: "Vehicle removed successfully".to_string(),
            vehicle,
        }),
        Err(e) => {
            warn!("Delete vehicle {} failed: {}", id, e);
            vehicle_error_response(&e)
        }
    }
}

/// Register a new user account.
///
/// The password is hashed with bcrypt before it is stored; the response
/// echoes the account as persisted, hash included.
///
/// ## Endpoint
///
/// `POST /signup`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:5050/signup \
///   -H "Content-Type: application/json" \
///   -d '{ "name": "a", "email": "a@x.com", "password": "secret" }'
/// ```
///
/// **Response (201):**
/// ```json
/// {
///     "message": "User registered successfully",
///     "user": { "name": "a", "email": "a@x.com", "password": "$2b$10$..." }
/// }
/// ```
///
/// ## Errors
///
/// - 400 `"all fields required"` - A field is missing or empty
/// - 400 `"user already exists"` - The name is taken
/// - 500 - Hashing failed unexpectedly
pub async fn signup(
    state: web::Data<Arc<AppState>>,
    body: web::Json<SignupRequest>,
) -> HttpResponse {
    info!("Signup request: {:?}", body.name);

    match state.account_store.signup(body.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(SignupResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
        Err(e) => {
            warn!("Signup failed: {}", e);
            account_error_response(&e)
        }
    }
}

/// Check a user's credentials.
///
/// Looks the account up by email and verifies the password against the
/// stored hash. Success carries no token; the caller is only told the
/// check passed.
///
/// ## Endpoint
///
/// `POST /login`
///
/// ## Errors
///
/// - 400 `"all fields required"` - A field is missing or empty
/// - 404 `"user not found: {email}"` - No account has this email
/// - 400 `"incorrect password"` - Verification failed
/// - 500 - Verification failed unexpectedly
pub async fn login(state: web::Data<Arc<AppState>>, body: web::Json<LoginRequest>) -> HttpResponse {
    info!("Login request: {:?}", body.email);

    match state.account_store.login(body.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Login successful".to_string(),
        }),
        Err(e) => {
            warn!("Login failed: {}", e);
            account_error_response(&e)
        }
    }
}
