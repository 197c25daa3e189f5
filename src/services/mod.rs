//! # Services Module
//!
//! This module contains the core business logic services for the car
//! registry backend. Each service owns one in-memory collection.
//!
//! ## Services Overview
//!
//! | Service | Responsibility |
//! |---------|---------------|
//! | `VehicleStore` | Vehicle collection: create, list, filter, update, delete |
//! | `AccountStore` | User accounts: signup with hashing, login with verification |
//!
//! Both stores are constructed once at startup and shared with the API
//! layer through `AppState`; neither survives a restart.

pub mod account_store;
pub mod vehicle_store;

pub use account_store::{Account, AccountError, AccountStore};
pub use vehicle_store::{Vehicle, VehicleError, VehicleStore};
