use anyhow::Result;
use std::path::PathBuf;

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "BUDDY_DB";

/// Get the local data directory for daily-buddy.
///
/// # Errors
///
/// Returns an error if the local data directory cannot be determined.
pub fn get_data_dir() -> Result<PathBuf> {
    let mut path =
        dirs::data_local_dir().ok_or_else(|| anyhow::anyhow!("Failed to get local data dir"))?;
    path.push("daily-buddy");
    Ok(path)
}

/// Database file to open: the explicit override, else `buddy.db` in the data dir.
///
/// # Errors
///
/// Returns an error if no override is given and the data directory cannot be determined.
pub fn resolve_db_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => Ok(get_data_dir()?.join("buddy.db")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let path = PathBuf::from("/tmp/custom.db");
        assert_eq!(resolve_db_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_default_in_data_dir() {
        if let Ok(dir) = get_data_dir() {
            assert!(dir.ends_with("daily-buddy"));
            assert_eq!(resolve_db_path(None).unwrap(), dir.join("buddy.db"));
        }
    }
}
