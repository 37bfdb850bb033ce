use crate::api::models::MatchDto;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCount {
    pub role: String,
    pub games: usize,
}

/// Counts how often the searched player appeared in each team position.
/// Roles keep the order in which they were first seen.
#[derive(Debug, Default)]
pub struct RoleTally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl RoleTally {
    pub fn new() -> Self {
        RoleTally::default()
    }

    pub fn from_matches(matches: &[MatchDto], puuid: &str) -> Self {
        let mut tally = RoleTally::new();
        for match_data in matches {
            for participant in &match_data.info.participants {
                if participant.puuid == puuid {
                    tally.add_role(&participant.team_position);
                }
            }
        }
        tally
    }

    pub fn add_role(&mut self, role: &str) {
        let count = self.counts.entry(role.to_string()).or_insert_with(|| {
            self.order.push(role.to_string());
            0
        });
        *count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, role: &str) -> usize {
        self.counts.get(role).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> Vec<RoleCount> {
        self.order
            .iter()
            .map(|role| RoleCount {
                role: role.clone(),
                games: self.get(role),
            })
            .collect()
    }
}
