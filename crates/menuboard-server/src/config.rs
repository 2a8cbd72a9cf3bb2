//! Layered server configuration.
//!
//! Built-in defaults are overridden by an optional YAML file (path from
//! `MENUBOARD_CONFIG`, default `menuboard.yaml`), which is in turn
//! overridden by `MENUBOARD_*` environment variables. Nested keys use
//! `__`, e.g. `MENUBOARD_DATABASE__ENDPOINT=mem://`.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use menuboard_auth::AuthConfig;
use menuboard_db::DbConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "MENUBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "menuboard.yaml";
const ENV_PREFIX: &str = "MENUBOARD_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("cannot read key file {}: {source}", path.display())]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing setting: {0}")]
    Missing(&'static str),
}

/// Administrator account created at start-up when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: String,
    /// Origin used to build public menu links.
    pub public_base_url: String,
    pub admin: Option<AdminBootstrap>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            public_base_url: "http://localhost:3000".into(),
            admin: None,
        }
    }
}

/// Paths to PEM files, read into [`AuthConfig`] when the inline keys
/// are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyFiles {
    pub jwt_private_key_file: Option<PathBuf>,
    pub jwt_public_key_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DbConfig,
    pub auth: AuthConfig,
    pub keys: KeyFiles,
}

impl AppConfig {
    /// Load from the file named by `MENUBOARD_CONFIG` (or the default
    /// path) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::load_from(Path::new(&path))
    }

    /// A missing file is not an error; defaults and the environment
    /// still apply.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config: AppConfig = Self::figment(path).extract().map_err(Box::new)?;
        config.resolve_key_files()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn resolve_key_files(&mut self) -> Result<(), ConfigError> {
        if self.auth.jwt_private_key_pem.is_empty() {
            if let Some(path) = &self.keys.jwt_private_key_file {
                self.auth.jwt_private_key_pem = read_key(path)?;
            }
        }
        if self.auth.jwt_public_key_pem.is_empty() {
            if let Some(path) = &self.keys.jwt_public_key_file {
                self.auth.jwt_public_key_pem = read_key(path)?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_private_key_pem.trim().is_empty() {
            return Err(ConfigError::Missing("auth.jwt_private_key_pem"));
        }
        if self.auth.jwt_public_key_pem.trim().is_empty() {
            return Err(ConfigError::Missing("auth.jwt_public_key_pem"));
        }
        Ok(())
    }
}

fn read_key(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::KeyFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file() {
        figment::Jail::expect_with(|_jail| {
            let config: AppConfig = AppConfig::figment(Path::new("does-not-exist.yaml"))
                .extract()
                .unwrap();
            assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
            assert_eq!(config.auth.min_password_length, 6);
            assert_eq!(config.database.namespace, "menuboard");
            assert!(config.server.admin.is_none());
            Ok(())
        });
    }

    #[test]
    fn yaml_and_env_layers_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "menuboard.yaml",
                r#"
server:
  public_base_url: "https://menus.example.com"
  admin:
    username: root
    password: admin-secret
auth:
  jwt_private_key_pem: "inline-private"
  jwt_public_key_pem: "inline-public"
  access_token_lifetime_secs: 600
"#,
            )?;
            jail.set_env("MENUBOARD_DATABASE__ENDPOINT", "mem://");
            jail.set_env("MENUBOARD_AUTH__ACCESS_TOKEN_LIFETIME_SECS", "120");

            let config = AppConfig::load_from(Path::new("menuboard.yaml")).unwrap();
            assert_eq!(config.server.public_base_url, "https://menus.example.com");
            assert_eq!(config.database.endpoint, "mem://");
            assert!(config.database.username.is_none());
            assert_eq!(config.auth.access_token_lifetime_secs, 120);
            assert_eq!(config.server.admin.unwrap().username, "root");
            Ok(())
        });
    }

    #[test]
    fn key_files_fill_empty_inline_keys() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("private.pem", "file-private")?;
            jail.create_file("public.pem", "file-public")?;
            jail.set_env("MENUBOARD_KEYS__JWT_PRIVATE_KEY_FILE", "private.pem");
            jail.set_env("MENUBOARD_KEYS__JWT_PUBLIC_KEY_FILE", "public.pem");

            let config = AppConfig::load_from(Path::new("none.yaml")).unwrap();
            assert_eq!(config.auth.jwt_private_key_pem, "file-private");
            assert_eq!(config.auth.jwt_public_key_pem, "file-public");
            Ok(())
        });
    }

    #[test]
    fn missing_keys_are_rejected() {
        figment::Jail::expect_with(|_jail| {
            let err = AppConfig::load_from(Path::new("none.yaml")).unwrap_err();
            assert!(matches!(err, ConfigError::Missing(_)));
            Ok(())
        });
    }
}
