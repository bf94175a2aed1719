use std::env;

use auth::PasswordError;
use auth::PasswordHasher;
use config::builder::DefaultState;
use config::Config as ConfigSource;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::Map;
use serde::Deserialize;

/// Application configuration for todo-service.
///
/// Loaded once at startup and passed explicitly to whatever needs it.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Listen address: `:3000`, `3000` or `host:port`
    pub port: String,
}

/// JWT signing configuration.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

/// Argon2 work factor used for new password hashes.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. `JWT_SECRET_KEY`, `PORT`, `DATABASE_URL`
    /// 2. Environment variables (DATABASE__URL, SERVER__PORT, etc.)
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars().collect())
    }

    fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let run_mode = vars
            .get("RUN_MODE")
            .cloned()
            .unwrap_or_else(|| "development".to_string());
        let non_empty = |key: &str| vars.get(key).filter(|value| !value.is_empty()).cloned();

        let configuration = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(
                Environment::default()
                    .separator("__")
                    .source(Some(vars.clone())),
            )
            .set_override_option("jwt.secret", non_empty("JWT_SECRET_KEY"))?
            .set_override_option("server.port", non_empty("PORT"))?
            .set_override_option("database.url", non_empty("DATABASE_URL"))?
            .build()?;

        configuration.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigSource::builder()
            .set_default("server.port", ":3000")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.secret", "")?
            .set_default("password.memory_cost_kib", 19456)?
            .set_default("password.time_cost", 2)?
            .set_default("password.parallelism", 1)
    }
}

impl ServerConfig {
    /// Socket address to bind.
    ///
    /// A bare port or a `:port` form binds every interface.
    pub fn listen_address(&self) -> String {
        let port = self.port.trim();
        if let Some(bare) = port.strip_prefix(':') {
            format!("0.0.0.0:{}", bare)
        } else if port.chars().all(|c| c.is_ascii_digit()) {
            format!("0.0.0.0:{}", port)
        } else {
            port.to_string()
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl PasswordConfig {
    /// Build the password hasher for this work factor.
    pub fn hasher(&self) -> Result<PasswordHasher, PasswordError> {
        PasswordHasher::with_cost(self.memory_cost_kib, self.time_cost, self.parallelism)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Config {
        Config::with_defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/todo"
            "#,
        );

        assert_eq!(config.server.port, ":3000");
        assert_eq!(config.database.max_connections, 5);
        assert!(config.jwt.secret.is_empty());
        assert_eq!(config.password.time_cost, 2);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/todo"

            [server]
            port = "8080"

            [jwt]
            secret = "s3cr3t"
            "#,
        );

        assert_eq!(config.server.port, "8080");
        assert_eq!(config.jwt.secret, "s3cr3t");
    }

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_section_variables_override_files() {
        let config = Config::from_vars(vars(&[
            ("DATABASE__URL", "postgresql://elsewhere/db"),
            ("JWT__SECRET", "section-secret"),
            ("SERVER__PORT", "4000"),
        ]))
        .unwrap();

        assert_eq!(config.database.url, "postgresql://elsewhere/db");
        assert_eq!(config.jwt.secret, "section-secret");
        assert_eq!(config.server.port, "4000");
    }

    #[test]
    fn test_conventional_variables_take_precedence() {
        let config = Config::from_vars(vars(&[
            ("DATABASE__URL", "postgresql://section/db"),
            ("DATABASE_URL", "postgresql://conventional/db"),
            ("JWT__SECRET", "section-secret"),
            ("JWT_SECRET_KEY", "conventional-secret"),
            ("PORT", ":8081"),
        ]))
        .unwrap();

        assert_eq!(config.database.url, "postgresql://conventional/db");
        assert_eq!(config.jwt.secret, "conventional-secret");
        assert_eq!(config.server.listen_address(), "0.0.0.0:8081");
    }

    #[test]
    fn test_empty_conventional_variable_ignored() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgresql://conventional/db"),
            ("PORT", ""),
        ]))
        .unwrap();

        assert_eq!(config.server.port, ":3000");
    }

    #[test]
    fn test_listen_address() {
        let server = |port: &str| ServerConfig {
            port: port.to_string(),
        };

        assert_eq!(server(":3000").listen_address(), "0.0.0.0:3000");
        assert_eq!(server("8080").listen_address(), "0.0.0.0:8080");
        assert_eq!(server("127.0.0.1:9000").listen_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_jwt_secret_redacted_in_debug() {
        let jwt = JwtConfig {
            secret: "s3cr3t".to_string(),
        };
        assert!(!format!("{:?}", jwt).contains("s3cr3t"));
    }

    #[test]
    fn test_password_hasher_from_config() {
        let password = PasswordConfig {
            memory_cost_kib: 1024,
            time_cost: 1,
            parallelism: 1,
        };
        assert!(password.hasher().is_ok());
    }
}
