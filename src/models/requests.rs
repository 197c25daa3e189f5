//! # API Request Models
//!
//! Structures for incoming API request bodies.
//! Each struct represents the expected JSON body for an endpoint.
//!
//! Every field is an `Option`: an absent field must reach the store's
//! all-fields-required validation (and produce the contract's 400 response)
//! instead of failing JSON deserialization.

use serde::{Deserialize, Serialize};

/// Request to register a new vehicle.
///
/// ## Example JSON
///
/// ```json
/// {
///     "model": "Civic",
///     "brand": "Honda",
///     "year": "2014/2015",
///     "color": "Azul",
///     "price": 40000
/// }
/// ```
///
/// ## Notes
///
/// All five fields are required. An empty string, and a `price` of `0`,
/// count as missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    /// Model name.
    pub model: Option<String>,

    /// Brand name.
    pub brand: Option<String>,

    /// Model year, as text.
    pub year: Option<String>,

    /// Color.
    pub color: Option<String>,

    /// Price. Zero is rejected as missing.
    pub price: Option<f64>,
}

/// Request to update a vehicle's mutable attributes.
///
/// Only `color` and `price` can change after creation.
///
/// ## Example JSON
///
/// ```json
/// {
///     "color": "Preto",
///     "price": 38000
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    /// New color.
    pub color: Option<String>,

    /// New price. Zero is rejected as missing.
    pub price: Option<f64>,
}

/// Request to register a new user account.
///
/// ## Example JSON
///
/// ```json
/// {
///     "name": "a",
///     "email": "a@x.com",
///     "password": "secret"
/// }
/// ```
///
/// ## Notes
///
/// `name` is the uniqueness key: a second signup with the same name is
/// rejected even if the email differs. The password is hashed before it is
/// stored; the plaintext never reaches the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Account name. Unique across accounts.
    pub name: Option<String>,

    /// Contact email. Used as the login identity.
    pub email: Option<String>,

    /// Plaintext password, hashed on signup.
    pub password: Option<String>,
}

/// Request to check a user's credentials.
///
/// ## Example JSON
///
/// ```json
/// {
///     "email": "a@x.com",
///     "password": "secret"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email the account was registered with.
    pub email: Option<String>,

    /// Plaintext password to verify against the stored hash.
    pub password: Option<String>,
}
