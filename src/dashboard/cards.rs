use crate::api::endpoints;
use crate::api::models::{MatchDto, ParticipantDto};
use crate::reference::ReferenceData;

pub const WIN_BACKGROUND: &str = "#2ecc71";
pub const LOSS_BACKGROUND: &str = "#e74c3c";

/// One recent match from the searched player's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub game_mode: String,
    pub champion: String,
    pub champion_icon: String,
    pub champion_level: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub gold: i64,
    pub duration_minutes: i64,
    pub win: bool,
    pub background: &'static str,
    pub spell_icons: Vec<String>,
    pub item_icons: Vec<String>,
}

impl MatchCard {
    pub fn build(match_data: &MatchDto, player: &ParticipantDto, refs: &ReferenceData) -> Self {
        let version = refs.version.as_str();
        let champion = refs.champion_name(player.champion_id).to_string();

        let spell_icons = [player.summoner1_id, player.summoner2_id]
            .iter()
            .filter_map(|id| refs.spell_name(*id))
            .filter(|name| !name.is_empty())
            .map(|name| endpoints::spell_icon(version, name))
            .collect();

        let item_icons = player
            .items()
            .iter()
            .filter(|id| **id > 0)
            .map(|id| endpoints::item_icon(version, *id))
            .collect();

        MatchCard {
            game_mode: match_data.info.game_mode.clone(),
            champion_icon: endpoints::champion_icon(version, &champion),
            champion,
            champion_level: player.champ_level,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            gold: player.gold_earned,
            duration_minutes: match_data.info.game_duration / 60,
            win: player.win,
            background: if player.win { WIN_BACKGROUND } else { LOSS_BACKGROUND },
            spell_icons,
            item_icons,
        }
    }

    pub fn kda(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }
}
