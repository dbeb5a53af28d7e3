use rusqlite::{Connection, OpenFlags};

use crate::config::Config;
use crate::error::ApiError;

/// Opens the one-per-request connection to the store.
///
/// The database file must already exist; a failure maps straight to the
/// fixed 500 envelope, so a broken handle never reaches a handler. SQLite
/// text is UTF-8 throughout, 4-byte sequences included. The connection
/// closes when it drops at the end of the handler.
pub fn open_connection(config: &Config) -> Result<Connection, ApiError> {
    Connection::open_with_flags(
        &config.database_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| {
        log::error!(
            "could not open database {}: {err}",
            config.database_path
        );
        ApiError::Database
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_file_maps_to_database_error() {
        let config = Config {
            database_path: "/nonexistent/agrotrack.sqlite".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            open_connection(&config),
            Err(ApiError::Database)
        ));
    }

    #[test]
    fn existing_database_file_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agrotrack.sqlite");
        Connection::open(&path).unwrap();

        let config = Config {
            database_path: path.to_string_lossy().into_owned(),
            ..Config::default()
        };
        assert!(open_connection(&config).is_ok());
    }
}
