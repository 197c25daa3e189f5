//! # Vehicle Store Service
//!
//! The VehicleStore is the central service for managing the registered
//! vehicle collection. It owns the in-memory state and exposes the five
//! registry operations used by the API layer.
//!
//! ## Responsibilities
//!
//! - Register new vehicles with store-assigned ids
//! - List and filter the current collection
//! - Update the mutable attributes (color, price) of a vehicle
//! - Remove vehicles from the collection
//!
//! ## State
//!
//! The collection is a `Vec` behind a `Mutex`, preserving insertion order.
//! The lock is only held for short, non-suspending critical sections.
//! Ids come from an atomic counter that never moves backwards, so a
//! freshly assigned id can never collide with one still in the collection,
//! even after deletions.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CreateVehicleRequest, UpdateVehicleRequest};

/// Errors that can occur in vehicle registry operations.
#[derive(Debug, thiserror::Error)]
pub enum VehicleError {
    /// One or more of the five required fields is missing or empty.
    #[error("all fields required")]
    MissingFields,

    /// An update arrived without a usable color or price.
    #[error("color and price are required")]
    MissingColorOrPrice,

    /// The collection holds no vehicles at all.
    #[error("no vehicles found")]
    NoVehicles,

    /// No vehicle matches the requested id.
    #[error("vehicle not found: {0}")]
    NotFound(u32),

    /// The store lock was poisoned by a panicking writer.
    #[error("vehicle store lock poisoned")]
    LockPoisoned,
}

/// One registered vehicle.
///
/// `id` is assigned by the store and never supplied by the caller.
/// After creation only `color` and `price` can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Store-assigned unique identifier.
    pub id: u32,

    /// Model name, e.g. "Civic".
    pub model: String,

    /// Brand name, e.g. "Honda". Filtering matches this exactly.
    pub brand: String,

    /// Model year. Kept as text, e.g. "2014/2015".
    pub year: String,

    /// Current color. Mutable via update.
    pub color: String,

    /// Current price. Mutable via update.
    pub price: f64,
}

/// The in-memory vehicle registry.
///
/// Constructed once at startup and shared through `AppState`.
///
/// ## Usage
///
/// ```rust,ignore
/// let store = VehicleStore::new();
/// let car = store.create(request)?;
/// let all = store.list()?;
/// ```
pub struct VehicleStore {
    /// The ordered collection of registered vehicles.
    vehicles: Mutex<Vec<Vehicle>>,

    /// Next id to hand out. Monotonic, independent of collection length.
    next_id: AtomicU32,
}

impl VehicleStore {
    /// Create an empty vehicle store. The first vehicle receives id 1.
    pub fn new() -> Self {
        Self {
            vehicles: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Register a new vehicle.
    ///
    /// All five fields must be present and non-empty; a `price` of `0` is
    /// treated as missing, the same emptiness rule applied to every field.
    /// Validation happens before any state changes, so a rejected request
    /// never mutates the collection.
    ///
    /// ## Returns
    ///
    /// * `Ok(Vehicle)` - The stored record, including its assigned id
    /// * `Err(VehicleError::MissingFields)` - A field is missing or empty
    pub fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, VehicleError> {
        let CreateVehicleRequest {
            model,
            brand,
            year,
            color,
            price,
        } = request;

        let (Some(model), Some(brand), Some(year), Some(color), Some(price)) =
            (model, brand, year, color, price)
        else {
            return Err(VehicleError::MissingFields);
        };

        if model.is_empty() || brand.is_empty() || year.is_empty() || color.is_empty() || price == 0.0
        {
            return Err(VehicleError::MissingFields);
        }

        let mut vehicles = self.vehicles.lock().map_err(|_| VehicleError::LockPoisoned)?;

        let vehicle = Vehicle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            model,
            brand,
            year,
            color,
            price,
        };

        debug!("Registering vehicle {} ({} {})", vehicle.id, vehicle.brand, vehicle.model);
        vehicles.push(vehicle.clone());

        Ok(vehicle)
    }

    /// List every registered vehicle, in insertion order.
    ///
    /// An empty collection is an error, not an empty success: the registry
    /// answers "no vehicles found" until the first vehicle is created.
    pub fn list(&self) -> Result<Vec<Vehicle>, VehicleError> {
        let vehicles = self.vehicles.lock().map_err(|_| VehicleError::LockPoisoned)?;

        if vehicles.is_empty() {
            return Err(VehicleError::NoVehicles);
        }

        Ok(vehicles.clone())
    }

    /// Return the vehicles whose brand equals `brand` exactly.
    ///
    /// Matching is case-sensitive with no partial matching, and the result
    /// preserves the collection's insertion order. Zero matches is a
    /// success with an empty list; there is no existence check here.
    pub fn filter_by_brand(&self, brand: &str) -> Result<Vec<Vehicle>, VehicleError> {
        let vehicles = self.vehicles.lock().map_err(|_| VehicleError::LockPoisoned)?;

        Ok(vehicles
            .iter()
            .filter(|vehicle| vehicle.brand == brand)
            .cloned()
            .collect())
    }

    /// Update the color and price of the vehicle with the given id.
    ///
    /// Only `color` and `price` are mutable; `model`, `brand`, `year` and
    /// `id` never change after creation. Both fields must be present, under
    /// the same emptiness rule as `create`. Validation precedes the lookup.
    ///
    /// ## Returns
    ///
    /// * `Ok(Vehicle)` - The updated record
    /// * `Err(VehicleError::MissingColorOrPrice)` - A field is missing
    /// * `Err(VehicleError::NotFound)` - No vehicle has this id
    pub fn update(&self, id: u32, request: UpdateVehicleRequest) -> Result<Vehicle, VehicleError> {
        let UpdateVehicleRequest { color, price } = request;

        let (Some(color), Some(price)) = (color, price) else {
            return Err(VehicleError::MissingColorOrPrice);
        };

        if color.is_empty() || price == 0.0 {
            return Err(VehicleError::MissingColorOrPrice);
        }

        let mut vehicles = self.vehicles.lock().map_err(|_| VehicleError::LockPoisoned)?;

        let vehicle = vehicles
            .iter_mut()
            .find(|vehicle| vehicle.id == id)
            .ok_or(VehicleError::NotFound(id))?;

        debug!("Updating vehicle {}: color={}, price={}", id, color, price);
        vehicle.color = color;
        vehicle.price = price;

        Ok(vehicle.clone())
    }

    /// Remove the vehicle with the given id and return it.
    ///
    /// Removes exactly one record. A second delete for the same id fails
    /// with `NotFound`.
    pub fn delete(&self, id: u32) -> Result<Vehicle, VehicleError> {
        let mut vehicles = self.vehicles.lock().map_err(|_| VehicleError::LockPoisoned)?;

        let index = vehicles
            .iter()
            .position(|vehicle| vehicle.id == id)
            .ok_or(VehicleError::NotFound(id))?;

        debug!("Removing vehicle {}", id);
        Ok(vehicles.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(model: &str, brand: &str, year: &str, color: &str, price: f64) -> CreateVehicleRequest {
        CreateVehicleRequest {
            model: Some(model.to_string()),
            brand: Some(brand.to_string()),
            year: Some(year.to_string()),
            color: Some(color.to_string()),
            price: Some(price),
        }
    }

    #[test]
    fn create_assigns_sequential_ids_and_keeps_input_fields() {
        let store = VehicleStore::new();

        let first = store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();
        let second = store.create(request("Corolla", "Toyota", "2018", "Preto", 55000.0)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.model, "Civic");
        assert_eq!(first.brand, "Honda");
        assert_eq!(first.year, "2015");
        assert_eq!(first.color, "Azul");
        assert_eq!(first.price, 40000.0);
    }

    #[test]
    fn create_rejects_missing_field_without_mutating() {
        let store = VehicleStore::new();

        let mut missing_color = request("Civic", "Honda", "2015", "Azul", 40000.0);
        missing_color.color = None;

        assert!(matches!(
            store.create(missing_color),
            Err(VehicleError::MissingFields)
        ));
        assert!(matches!(store.list(), Err(VehicleError::NoVehicles)));
    }

    #[test]
    fn create_rejects_empty_string_and_zero_price() {
        let store = VehicleStore::new();

        assert!(matches!(
            store.create(request("Civic", "", "2015", "Azul", 40000.0)),
            Err(VehicleError::MissingFields)
        ));

        // A price of zero counts as missing, same as an empty string.
        assert!(matches!(
            store.create(request("Civic", "Honda", "2015", "Azul", 0.0)),
            Err(VehicleError::MissingFields)
        ));
        assert!(matches!(store.list(), Err(VehicleError::NoVehicles)));
    }

    #[test]
    fn list_returns_all_vehicles_in_insertion_order() {
        let store = VehicleStore::new();
        store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();
        store.create(request("Fit", "Honda", "2017", "Prata", 45000.0)).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].model, "Civic");
        assert_eq!(all[1].model, "Fit");
    }

    #[test]
    fn filter_by_brand_matches_exactly_and_preserves_order() {
        let store = VehicleStore::new();
        store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();
        store.create(request("Corolla", "Toyota", "2018", "Preto", 55000.0)).unwrap();
        store.create(request("Fit", "Honda", "2017", "Prata", 45000.0)).unwrap();

        let hondas = store.filter_by_brand("Honda").unwrap();
        assert_eq!(hondas.len(), 2);
        assert_eq!(hondas[0].id, 1);
        assert_eq!(hondas[1].id, 3);

        // Case-sensitive, no partial matching.
        assert!(store.filter_by_brand("honda").unwrap().is_empty());
        assert!(store.filter_by_brand("Hon").unwrap().is_empty());
    }

    #[test]
    fn filter_with_zero_matches_is_a_success() {
        let store = VehicleStore::new();
        assert!(store.filter_by_brand("Honda").unwrap().is_empty());
    }

    #[test]
    fn update_changes_only_color_and_price() {
        let store = VehicleStore::new();
        let created = store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();

        let updated = store
            .update(
                created.id,
                UpdateVehicleRequest {
                    color: Some("Preto".to_string()),
                    price: Some(38000.0),
                },
            )
            .unwrap();

        assert_eq!(updated.color, "Preto");
        assert_eq!(updated.price, 38000.0);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.model, "Civic");
        assert_eq!(updated.brand, "Honda");
        assert_eq!(updated.year, "2015");
    }

    #[test]
    fn update_requires_both_color_and_price() {
        let store = VehicleStore::new();
        let created = store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();

        assert!(matches!(
            store.update(
                created.id,
                UpdateVehicleRequest {
                    color: Some("Preto".to_string()),
                    price: None,
                },
            ),
            Err(VehicleError::MissingColorOrPrice)
        ));

        // The record is untouched after the rejected update.
        let current = store.list().unwrap();
        assert_eq!(current[0].color, "Azul");
    }

    #[test]
    fn update_unknown_id_fails_without_mutating() {
        let store = VehicleStore::new();
        store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();

        assert!(matches!(
            store.update(
                99,
                UpdateVehicleRequest {
                    color: Some("Preto".to_string()),
                    price: Some(38000.0),
                },
            ),
            Err(VehicleError::NotFound(99))
        ));
        assert_eq!(store.list().unwrap()[0].color, "Azul");
    }

    #[test]
    fn delete_removes_exactly_one_and_second_delete_fails() {
        let store = VehicleStore::new();
        let first = store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();
        store.create(request("Corolla", "Toyota", "2018", "Preto", 55000.0)).unwrap();

        let removed = store.delete(first.id).unwrap();
        assert_eq!(removed.id, first.id);
        assert_eq!(store.list().unwrap().len(), 1);

        assert!(matches!(
            store.delete(first.id),
            Err(VehicleError::NotFound(_))
        ));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = VehicleStore::new();
        let first = store.create(request("Civic", "Honda", "2015", "Azul", 40000.0)).unwrap();
        store.delete(first.id).unwrap();

        let second = store.create(request("Corolla", "Toyota", "2018", "Preto", 55000.0)).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn list_on_empty_store_is_not_found() {
        let store = VehicleStore::new();
        assert!(matches!(store.list(), Err(VehicleError::NoVehicles)));
    }
}
