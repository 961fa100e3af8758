//! Configuration for the catalog service module

use serde::Deserialize;

/// Catalog service configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Role gate for mutating endpoints
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Role gate configuration
///
/// Disabled by default; when enabled, POST/PUT/DELETE require a bearer token
/// whose role claim is listed in `write_roles`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default)]
    pub enabled: bool,

    /// HS256 signing secret for bearer tokens
    #[serde(default)]
    pub secret: String,

    /// Roles allowed to mutate resources
    #[serde(default = "default_write_roles")]
    pub write_roles: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            secret: String::new(),
            write_roles: default_write_roles(),
        }
    }
}

fn default_write_roles() -> Vec<String> {
    vec!["Administrador".to_string(), "Vendedor".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_the_role_gate_disabled() {
        let config = CatalogConfig::default();
        assert!(!config.auth.enabled);
        assert_eq!(
            config.auth.write_roles,
            vec!["Administrador".to_string(), "Vendedor".to_string()]
        );
    }
}
