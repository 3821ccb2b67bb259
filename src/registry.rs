use chrono::Utc;
use std::sync::Arc;

use crate::{
    config::AdminCredential,
    database::{StoreError, UserStore},
    error::ServiceError,
    models::users::{UserData, PASSWORD_MAX_LEN, ROLE_ADMIN, ROLE_USER, USERNAME_MAX_LEN},
};

/// Account registry: creates users and checks logins.
#[derive(Clone)]
pub struct Registry {
    store: Arc<dyn UserStore>,
    admin: AdminCredential,
}

impl Registry {
    pub fn new(store: Arc<dyn UserStore>, admin: AdminCredential) -> Self {
        Self { store, admin }
    }

    pub fn register(&self, username: &str, password: &str) -> Result<(), ServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::validation("Username and password required"));
        }
        if username.chars().count() > USERNAME_MAX_LEN {
            return Err(ServiceError::validation(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LEN
            )));
        }
        if password.chars().count() > PASSWORD_MAX_LEN {
            return Err(ServiceError::validation(format!(
                "Password must be at most {} characters",
                PASSWORD_MAX_LEN
            )));
        }

        let data = UserData {
            username: username.to_string(),
            password: password.to_string(),
            role: ROLE_USER.to_string(),
            created_at: Utc::now().naive_utc(),
        };
        match self.store.insert_user(data) {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate) => Err(ServiceError::conflict("Username already exists")),
            Err(StoreError::Backend(err)) => {
                Err(ServiceError::internal("Server error while registering", err))
            }
        }
    }

    /// The admin role never touches the store.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<(), ServiceError> {
        if role == ROLE_ADMIN {
            if self.admin.matches(username, password) {
                return Ok(());
            }
            return Err(ServiceError::auth("Invalid admin credentials"));
        }

        match self.store.find_user(username, password, role) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ServiceError::auth("Invalid credentials")),
            Err(err) => Err(ServiceError::internal("Server error while logging in", err)),
        }
    }
}
