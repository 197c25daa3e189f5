//! # Account Store Service
//!
//! The AccountStore manages registered user accounts: signup with one-way
//! password hashing and login with hash verification. Accounts are never
//! updated or deleted once created.
//!
//! ## Passwords
//!
//! Plaintext passwords never reach the collection. Signup stores the bcrypt
//! hash of the submitted password; login compares against that hash with
//! bcrypt's verification function. Both run on actix's blocking pool via
//! `web::block`, so the event loop keeps serving other requests while a
//! hash is being computed.
//!
//! ## Known race
//!
//! The duplicate-name check runs before the hashing suspension and is not
//! repeated afterwards. Two signups for the same name that interleave
//! across the hash can therefore both land. The store accepts this rather
//! than holding a lock across the blocking hop.

use std::sync::Mutex;

use actix_web::web;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AppConfig;
use crate::models::{LoginRequest, SignupRequest};

/// Errors that can occur in account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A required field is missing or empty.
    #[error("all fields required")]
    MissingFields,

    /// An account with the same name is already registered.
    #[error("user already exists")]
    AlreadyExists,

    /// No account matches the given email.
    #[error("user not found: {0}")]
    NotFound(String),

    /// The submitted password does not match the stored hash.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Hashing or verification failed unexpectedly.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// The store lock was poisoned by a panicking writer.
    #[error("account store lock poisoned")]
    LockPoisoned,
}

/// One registered account.
///
/// `password` holds the bcrypt hash as persisted, never the plaintext.
/// `name` is the uniqueness key for signup conflicts; login looks accounts
/// up by `email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account name. Unique across the collection.
    pub name: String,

    /// Contact email. Login identity, not checked for uniqueness.
    pub email: String,

    /// bcrypt hash of the signup password.
    pub password: String,
}

/// The in-memory account registry.
///
/// Constructed once at startup and shared through `AppState`. The bcrypt
/// work factor comes from configuration (`BCRYPT_COST`, default 10).
pub struct AccountStore {
    /// The ordered collection of registered accounts.
    accounts: Mutex<Vec<Account>>,

    /// Application configuration, read for the bcrypt cost.
    config: AppConfig,
}

impl AccountStore {
    /// Create an empty account store.
    pub fn new(config: AppConfig) -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Register a new account.
    ///
    /// All three fields must be present and non-empty. The name must not
    /// already be registered. On success the account is stored with the
    /// bcrypt hash of `password` and returned as persisted.
    ///
    /// ## Returns
    ///
    /// * `Ok(Account)` - The stored record, password field holding the hash
    /// * `Err(AccountError::MissingFields)` - A field is missing or empty
    /// * `Err(AccountError::AlreadyExists)` - The name is taken
    /// * `Err(AccountError::Hashing)` - bcrypt failed unexpectedly
    pub async fn signup(&self, request: SignupRequest) -> Result<Account, AccountError> {
        let SignupRequest {
            name,
            email,
            password,
        } = request;

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AccountError::MissingFields);
        };

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        {
            let accounts = self.accounts.lock().map_err(|_| AccountError::LockPoisoned)?;
            if accounts.iter().any(|account| account.name == name) {
                return Err(AccountError::AlreadyExists);
            }
        }

        // Hash on the blocking pool; the lock is released across the hop
        // and the duplicate check is not repeated (see module docs).
        let cost = self.config.bcrypt_cost;
        let hashed_password = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .map_err(|e| AccountError::Hashing(e.to_string()))?;

        let account = Account {
            name,
            email,
            password: hashed_password,
        };

        debug!("Registering account {}", account.name);

        let mut accounts = self.accounts.lock().map_err(|_| AccountError::LockPoisoned)?;
        accounts.push(account.clone());

        Ok(account)
    }

    /// Check a login attempt.
    ///
    /// Looks the account up by `email` and verifies `password` against the
    /// stored hash. Success carries no token or session; the caller is only
    /// told the check passed.
    ///
    /// ## Returns
    ///
    /// * `Ok(())` - Credentials match
    /// * `Err(AccountError::MissingFields)` - A field is missing or empty
    /// * `Err(AccountError::NotFound)` - No account has this email
    /// * `Err(AccountError::IncorrectPassword)` - Verification failed
    /// * `Err(AccountError::Hashing)` - bcrypt failed unexpectedly
    pub async fn login(&self, request: LoginRequest) -> Result<(), AccountError> {
        let LoginRequest { email, password } = request;

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AccountError::MissingFields);
        };

        if email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let stored_hash = {
            let accounts = self.accounts.lock().map_err(|_| AccountError::LockPoisoned)?;
            accounts
                .iter()
                .find(|account| account.email == email)
                .map(|account| account.password.clone())
        }
        .ok_or(AccountError::NotFound(email))?;

        let matches = web::block(move || bcrypt::verify(password, &stored_hash))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .map_err(|e| AccountError::Hashing(e.to_string()))?;

        if !matches {
            return Err(AccountError::IncorrectPassword);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps the tests fast; production default is 10.
    fn test_store() -> AccountStore {
        AccountStore::new(AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            bcrypt_cost: 4, // bcrypt's minimum cost
        })
    }

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[actix_rt::test]
    async fn signup_stores_hash_not_plaintext() {
        let store = test_store();

        let account = store
            .signup(signup_request("a", "a@x.com", "secret"))
            .await
            .unwrap();

        assert_eq!(account.name, "a");
        assert_eq!(account.email, "a@x.com");
        assert_ne!(account.password, "secret");
        assert!(bcrypt::verify("secret", &account.password).unwrap());
        assert!(!bcrypt::verify("wrong", &account.password).unwrap());
    }

    #[actix_rt::test]
    async fn signup_rejects_missing_or_empty_fields() {
        let store = test_store();

        let mut missing_password = signup_request("a", "a@x.com", "secret");
        missing_password.password = None;
        assert!(matches!(
            store.signup(missing_password).await,
            Err(AccountError::MissingFields)
        ));

        assert!(matches!(
            store.signup(signup_request("a", "", "secret")).await,
            Err(AccountError::MissingFields)
        ));
    }

    #[actix_rt::test]
    async fn signup_duplicate_name_conflicts_regardless_of_email() {
        let store = test_store();
        store
            .signup(signup_request("a", "a@x.com", "secret"))
            .await
            .unwrap();

        // Same name, different email and password: still a conflict.
        assert!(matches!(
            store.signup(signup_request("a", "other@x.com", "hunter2")).await,
            Err(AccountError::AlreadyExists)
        ));

        // Same email under a different name is allowed; name is the key.
        assert!(store
            .signup(signup_request("b", "a@x.com", "secret"))
            .await
            .is_ok());
    }

    #[actix_rt::test]
    async fn login_succeeds_only_with_the_signed_up_password() {
        let store = test_store();
        store
            .signup(signup_request("a", "a@x.com", "secret"))
            .await
            .unwrap();

        assert!(store.login(login_request("a@x.com", "secret")).await.is_ok());
        assert!(matches!(
            store.login(login_request("a@x.com", "wrong")).await,
            Err(AccountError::IncorrectPassword)
        ));
    }

    #[actix_rt::test]
    async fn login_unknown_email_is_not_found() {
        let store = test_store();

        assert!(matches!(
            store.login(login_request("ghost@x.com", "secret")).await,
            Err(AccountError::NotFound(_))
        ));
    }

    #[actix_rt::test]
    async fn login_rejects_missing_fields() {
        let store = test_store();

        let mut missing_password = login_request("a@x.com", "secret");
        missing_password.password = None;
        assert!(matches!(
            store.login(missing_password).await,
            Err(AccountError::MissingFields)
        ));
    }
}
