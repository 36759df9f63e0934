use crate::domain::BadgeRecord;
use std::collections::BTreeMap;
use tracing::info;

/// Badge counts per league, ordered by league name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LeagueBreakdown {
    counts: BTreeMap<String, usize>,
}

impl LeagueBreakdown {
    pub fn from_badges(badges: &[BadgeRecord]) -> Self {
        let mut counts = BTreeMap::new();
        for badge in badges {
            *counts.entry(badge.league.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(league, count)| (league.as_str(), *count))
    }

    pub fn log(&self) {
        info!("League breakdown:");
        for (league, count) in self.iter() {
            info!("  {}: {} badges", league, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(league: &str, team: &str) -> BadgeRecord {
        BadgeRecord::new(
            team.to_string(),
            format!("Logos/{league}/{team}.png"),
            league.to_string(),
            format!("{team}.png"),
        )
    }

    #[test]
    fn counts_are_sorted_by_league() {
        let badges = vec![
            badge("Serie A", "Milan"),
            badge("Bundesliga", "Bayern"),
            badge("Serie A", "Napoli"),
            badge("La Liga", "Betis"),
        ];

        let breakdown = LeagueBreakdown::from_badges(&badges);

        assert_eq!(
            breakdown.iter().collect::<Vec<_>>(),
            vec![("Bundesliga", 1), ("La Liga", 1), ("Serie A", 2)]
        );
    }

    #[test]
    fn empty_input_has_no_leagues() {
        assert_eq!(LeagueBreakdown::from_badges(&[]), LeagueBreakdown::default());
    }
}
