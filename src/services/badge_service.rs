use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{BadgeRecord, Manifest};
use crate::error::{BadgeError, Result};
use crate::services::reporting::LeagueBreakdown;
use crate::services::scanning::scan_badges;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// How a generator run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Written { total_badges: usize, path: PathBuf },
    MissingInput(PathBuf),
    NoBadges(PathBuf),
}

pub struct BadgeService {
    config: Config,
    store: Arc<dyn Storage>,
}

impl BadgeService {
    pub fn new(config: Config, store: Arc<dyn Storage + 'static>) -> Self {
        Self { config, store }
    }

    /// Scans the badge folder and rewrites the manifest from scratch.
    ///
    /// A missing folder or a folder without badges leaves the output untouched
    /// and is not an error. Failures while writing are.
    pub fn run(&self) -> Result<GenerationOutcome> {
        let badges = match self.collect_badges() {
            Ok(badges) => badges,
            Err(BadgeError::MissingInput(path)) => {
                error!("Error: Logos folder not found at {}", path.display());
                return Ok(GenerationOutcome::MissingInput(path));
            }
            Err(BadgeError::EmptyResult(path)) => {
                warn!("No badges found. Please check your Logos folder structure.");
                return Ok(GenerationOutcome::NoBadges(path));
            }
            Err(e) => return Err(e),
        };

        let breakdown = LeagueBreakdown::from_badges(&badges);
        let total_badges = badges.len();

        self.save_manifest(badges)?;
        info!(
            "Database saved to: {}",
            self.config.output_file.display()
        );
        info!("Database contains {} badges", total_badges);

        breakdown.log();
        info!("Database generation complete!");

        Ok(GenerationOutcome::Written {
            total_badges,
            path: self.config.output_file.clone(),
        })
    }

    fn collect_badges(&self) -> Result<Vec<BadgeRecord>> {
        let badges = scan_badges(&self.config.root_dir)?;
        if badges.is_empty() {
            return Err(BadgeError::EmptyResult(self.config.root_dir.clone()));
        }
        Ok(badges)
    }

    fn save_manifest(&self, badges: Vec<BadgeRecord>) -> Result<()> {
        let generated_at = std::env::current_dir()?.display().to_string();
        let manifest = Manifest::new(badges, generated_at);
        self.store.save_manifest(&manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tracing::Level;

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Option<Manifest>>,
    }

    impl Storage for MemoryStore {
        fn load_manifest(&self) -> Result<Option<Manifest>> {
            Ok(self.saved.lock().unwrap().clone())
        }

        fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
            *self.saved.lock().unwrap() = Some(manifest.clone());
            Ok(())
        }
    }

    fn config(root: PathBuf) -> Config {
        Config {
            output_file: root.join("badge-list.json"),
            root_dir: root,
            log_level: Level::INFO,
        }
    }

    #[test]
    fn missing_folder_saves_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("Logos");
        let store = Arc::new(MemoryStore::default());

        let outcome = BadgeService::new(config(root.clone()), store.clone())
            .run()
            .unwrap();

        assert_eq!(outcome, GenerationOutcome::MissingInput(root));
        assert!(store.load_manifest().unwrap().is_none());
    }

    #[test]
    fn folder_without_badges_saves_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("Logos");
        std::fs::create_dir_all(root.join("Eredivisie")).unwrap();
        std::fs::write(root.join("Eredivisie").join("notes.txt"), "x").unwrap();
        let store = Arc::new(MemoryStore::default());

        let outcome = BadgeService::new(config(root.clone()), store.clone())
            .run()
            .unwrap();

        assert_eq!(outcome, GenerationOutcome::NoBadges(root));
        assert!(store.load_manifest().unwrap().is_none());
    }

    #[test]
    fn saves_manifest_with_all_badges() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("Logos");
        std::fs::create_dir_all(root.join("Ligue 1")).unwrap();
        std::fs::write(root.join("Ligue 1").join("Lille.png"), "x").unwrap();
        std::fs::write(root.join("Ligue 1").join("Nantes.jpg"), "x").unwrap();
        let store = Arc::new(MemoryStore::default());

        let outcome = BadgeService::new(config(root.clone()), store.clone())
            .run()
            .unwrap();

        assert_eq!(
            outcome,
            GenerationOutcome::Written {
                total_badges: 2,
                path: root.join("badge-list.json"),
            }
        );
        let manifest = store.load_manifest().unwrap().unwrap();
        assert_eq!(manifest.metadata.total_badges, 2);
        assert_eq!(manifest.badges[0].team, "Lille");
        assert_eq!(manifest.badges[1].badge_url, "Logos/Ligue 1/Nantes.jpg");
    }
}
