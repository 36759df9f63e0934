use super::Manifest;
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn load_manifest(&self) -> Result<Option<Manifest>>;
    fn save_manifest(&self, manifest: &Manifest) -> Result<()>;
}
