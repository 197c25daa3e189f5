//! # API Response Models
//!
//! Structures for outgoing API response bodies.
//!
//! There is no uniform envelope: each endpoint has its own body shape,
//! pairing a human-readable `message` with an endpoint-specific key
//! (`car`, `vehicles`, `foundCar`, `vehicle`, `user`). `GET /cars` answers
//! with a bare array and no wrapper at all.

use serde::{Deserialize, Serialize};

use crate::services::{Account, Vehicle};

/// Bare message body, used for every error response and for login success.
///
/// ## Example JSON
///
/// ```json
/// {
///     "message": "incorrect password"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// Body for a successful vehicle creation (`POST /cars`, 201).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCreatedResponse {
    pub message: String,

    /// The stored record, including its assigned id.
    pub car: Vehicle,
}

/// Body for a brand filter result (`GET /cars/{brand}`, 200).
///
/// `vehicles` may be empty; zero matches is still a success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredVehiclesResponse {
    pub message: String,

    /// Matching records in insertion order.
    pub vehicles: Vec<Vehicle>,
}

/// Body for a successful update (`PUT /cars/{id}`, 200).
///
/// The record travels under the `foundCar` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUpdatedResponse {
    pub message: String,

    /// The record after the update.
    pub found_car: Vehicle,
}

/// Body for a successful delete (`DELETE /cars/{id}`, 200).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDeletedResponse {
    pub message: String,

    /// The record that was removed.
    pub vehicle: Vehicle,
}

/// Body for a successful signup (`POST /signup`, 201).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,

    /// The stored account; the password field carries the hash as persisted.
    pub user: Account,
}
