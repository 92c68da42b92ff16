//! File-per-key storage for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Stores each key as a file named after it inside `dir`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store files under `%APPDATA%` on Windows, otherwise next to the
    /// running executable, or in the working directory as a last resort
    pub fn default_location() -> Self {
        #[cfg(windows)]
        let appdata = std::env::var_os("APPDATA").map(PathBuf::from);
        #[cfg(not(windows))]
        let appdata = None;

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(data_dir(appdata, exe_dir))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

fn data_dir(appdata: Option<PathBuf>, exe_dir: Option<PathBuf>) -> PathBuf {
    appdata
        .filter(|dir| !dir.as_os_str().is_empty())
        .or(exe_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flappy-gopher-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_is_none() {
        let storage = FileStorage::new(scratch_dir("missing"));
        assert_eq!(storage.load("nothing_here").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let mut storage = FileStorage::new(&dir);
        storage.save("score", "12").unwrap();
        assert_eq!(storage.load("score").unwrap().as_deref(), Some("12"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_data_dir_preference() {
        let appdata = PathBuf::from("C:/Users/gopher/AppData/Roaming");
        let exe = PathBuf::from("/opt/flappy");
        assert_eq!(data_dir(Some(appdata.clone()), Some(exe.clone())), appdata);
        assert_eq!(data_dir(Some(PathBuf::new()), Some(exe.clone())), exe);
        assert_eq!(data_dir(None, Some(exe.clone())), exe);
        assert_eq!(data_dir(None, None), PathBuf::from("."));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_default_location_is_beside_executable() {
        let exe = std::env::current_exe().unwrap();
        assert_eq!(
            FileStorage::default_location().path_for("k"),
            exe.parent().unwrap().join("k")
        );
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let mut storage = FileStorage::new(scratch_dir("gone").join("does/not/exist"));
        assert!(matches!(
            storage.save("score", "1"),
            Err(StorageError::Write { .. })
        ));
    }
}
