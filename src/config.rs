//! Service configuration for the MinWinTid mock.
//!
//! Runtime settings come from `MOCK_`-prefixed environment variables (with a
//! `.env` file honored by the binary). The employee/manager identities echoed
//! in responses are fixed mock values; tests and embedders can substitute
//! their own profile when building the application state.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{MockError, MockResult};

/// Runtime settings read from the environment.
///
/// # Example
///
/// ```
/// use minwintid_mock::config::ServiceConfig;
///
/// let config = ServiceConfig::default();
/// assert_eq!(config.bind_addr.port(), 8080);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to (`MOCK_BIND_ADDR`).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl ServiceConfig {
    /// Loads the configuration from `MOCK_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Config`] when a variable is present but cannot be
    /// deserialized into its field type.
    pub fn from_env() -> MockResult<Self> {
        envy::prefixed("MOCK_")
            .from_env()
            .map_err(|err| MockError::Config {
                message: err.to_string(),
            })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// The employee and manager identities echoed in time-data responses.
///
/// The real feed resolves these from the HR registry; the mock holds them
/// constant so consumers get stable, recognizable test data. `resource_id`
/// is the one field taken from the request (`ident` is echoed verbatim).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    /// The employee's NAV id.
    pub nav_id: String,
    /// The manager's resource id.
    pub manager_resource_id: String,
    /// The manager's NAV id.
    pub manager_nav_id: String,
    /// The manager's display name.
    pub manager_name: String,
    /// The manager's email address.
    pub manager_email: String,
    /// Who approved the timesheet (`ansatt_dato_godkjent_av`).
    pub approved_by: String,
}

impl Default for EmployeeProfile {
    fn default() -> Self {
        Self {
            nav_id: "123456".to_string(),
            manager_resource_id: "654321".to_string(),
            manager_nav_id: "M654321".to_string(),
            manager_name: "Kalpana, Bran".to_string(),
            manager_email: "Bran.Kalpana@nav.no".to_string(),
            approved_by: "m654321".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_default_profile_identities() {
        let profile = EmployeeProfile::default();
        assert_eq!(profile.nav_id, "123456");
        assert_eq!(profile.manager_nav_id, "M654321");
        assert_eq!(profile.approved_by, "m654321");
    }
}
