mod badge;
mod manifest;
pub mod storage;

pub use badge::BadgeRecord;
pub use manifest::{Manifest, ManifestMetadata, MANIFEST_DESCRIPTION};
