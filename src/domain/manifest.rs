use crate::domain::badge::BadgeRecord;
use serde::{Deserialize, Serialize};

pub const MANIFEST_DESCRIPTION: &str =
    "Auto-generated badge database for Football Badge Attack game";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub metadata: ManifestMetadata,
    pub badges: Vec<BadgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub total_badges: usize,
    /// Working directory the generator ran from.
    pub generated_at: String,
    pub description: String,
}

impl Manifest {
    pub fn new(badges: Vec<BadgeRecord>, generated_at: impl Into<String>) -> Self {
        Self {
            metadata: ManifestMetadata {
                total_badges: badges.len(),
                generated_at: generated_at.into(),
                description: MANIFEST_DESCRIPTION.to_string(),
            },
            badges,
        }
    }
}
