use std::env;

/// Process-wide settings, read once at startup and handed to handlers
/// through `web::Data`. Nothing in the server mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file. Each request opens its own
    /// connection against it.
    pub database_path: String,
    /// Legacy escape hatch: accept credentials stored as plaintext while
    /// they are migrated to bcrypt hashes. Off unless explicitly enabled.
    pub allow_plaintext_passwords: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: "agrotrack.sqlite".to_string(),
            allow_plaintext_passwords: false,
        }
    }
}

impl Config {
    /// Builds the configuration from environment variables, keeping the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            host: env::var("AGROTRACK_HOST").unwrap_or(defaults.host),
            port: env::var("AGROTRACK_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            database_path: env::var("AGROTRACK_DB").unwrap_or(defaults.database_path),
            allow_plaintext_passwords: env::var("AGROTRACK_ALLOW_PLAINTEXT_PASSWORDS")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.allow_plaintext_passwords),
        }
    }
}
