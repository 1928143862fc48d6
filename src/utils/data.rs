use serde::{ Deserialize, Serialize };
/// Data serialization and file management utilities
use std::fs;
use std::path::Path;

use crate::errors::PortalResult;

/// Generic function to load JSON data from file
pub fn load_json_from_file<T>(file_path: &Path) -> PortalResult<T>
    where T: for<'de> Deserialize<'de>
{
    let contents = fs::read_to_string(file_path)?;
    Ok(serde_json::from_str::<T>(&contents)?)
}

/// Generic function to save data as JSON to file, creating parent directories
pub fn save_json_to_file<T>(data: &T, file_path: &Path) -> PortalResult<()> where T: Serialize {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(data)?;
    fs::write(file_path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PortalError;
    use std::collections::BTreeMap;

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("values.json");
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), "Brion Silva".to_string());

        save_json_to_file(&values, &path).unwrap();
        let loaded: BTreeMap<String, String> = load_json_from_file(&path).unwrap();
        assert_eq!(loaded, values);
    }

    #[test]
    fn load_reports_io_and_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_json_from_file::<BTreeMap<String, String>>(&missing).unwrap_err();
        assert!(matches!(err, PortalError::Io(_)));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = load_json_from_file::<BTreeMap<String, String>>(&broken).unwrap_err();
        assert!(matches!(err, PortalError::Json(_)));
    }
}
