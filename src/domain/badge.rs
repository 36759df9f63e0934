use serde::{Deserialize, Serialize};

/// One discovered badge image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRecord {
    pub team: String,
    #[serde(rename = "badgeUrl")]
    pub badge_url: String,
    pub league: String,
    pub filename: String,
}

impl BadgeRecord {
    pub fn new(team: String, badge_url: String, league: String, filename: String) -> Self {
        Self {
            team,
            badge_url,
            league,
            filename,
        }
    }
}
