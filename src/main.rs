use badge_database::config::Config;
use badge_database::error::Result;
use badge_database::infrastructure::FileSystemStore;
use badge_database::services::badge_service::BadgeService;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("Football Badge Attack - Database Generator");

    let store = Arc::new(FileSystemStore::new(&config.output_file));
    let service = BadgeService::new(config, store);
    service.run()?;

    Ok(())
}
