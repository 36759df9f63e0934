use crate::domain::storage::Storage;
use crate::domain::Manifest;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps the badge database in a single JSON file.
#[derive(Clone)]
pub struct FileSystemStore {
    manifest_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        if let Some(dir) = path.parent() {
            self.ensure_dir(dir)?;
        }

        // to_string_pretty indents by two spaces and leaves non-ASCII text as is
        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_manifest(&self) -> Result<Option<Manifest>> {
        self.read_json_file(&self.manifest_path)
    }

    fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        self.write_json_file(&self.manifest_path, manifest)
    }
}
