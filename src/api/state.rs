//! Application state for the MinWinTid mock API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{EmployeeProfile, ServiceConfig};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// service configuration and the employee profile echoed in responses.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServiceConfig>,
    profile: Arc<EmployeeProfile>,
}

impl AppState {
    /// Creates a new application state with the default employee profile.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_profile(config, EmployeeProfile::default())
    }

    /// Creates a new application state with a custom employee profile.
    pub fn with_profile(config: ServiceConfig, profile: EmployeeProfile) -> Self {
        Self {
            config: Arc::new(config),
            profile: Arc::new(profile),
        }
    }

    /// Returns a reference to the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns a reference to the employee profile.
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_profile_is_used() {
        let state = AppState::new(ServiceConfig::default());
        assert_eq!(state.profile().nav_id, "123456");
    }
}
