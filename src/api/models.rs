use serde::Deserialize;

// Account V1 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i64,
}

// League V4 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
}

// Match V5 response
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub game_mode: String,
    /// Seconds.
    #[serde(default)]
    pub game_duration: i64,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

impl MatchDto {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i64,
    pub champ_level: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub gold_earned: i64,
    pub summoner1_id: i64,
    pub summoner2_id: i64,
    pub item0: i64,
    pub item1: i64,
    pub item2: i64,
    pub item3: i64,
    pub item4: i64,
    pub item5: i64,
    pub total_damage_dealt_to_champions: i64,
    pub vision_score: i64,
    pub total_minions_killed: i64,
    pub win: bool,
    pub team_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY
}

impl ParticipantDto {
    /// Inventory slots 0..5; the trinket slot is not shown.
    pub fn items(&self) -> [i64; 6] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_with_extra_fields_still_parse() {
        let entries: Vec<LeagueEntryDto> = serde_json::from_str(
            r#"[{"leagueId":"x","queueType":"RANKED_SOLO_5x5","tier":"GOLD","rank":"II",
                "leaguePoints":42,"wins":10,"losses":5,"hotStreak":false}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].queue_type, "RANKED_SOLO_5x5");
        assert_eq!((entries[0].wins, entries[0].losses), (10, 5));

        let summoner: SummonerDto = serde_json::from_str(
            r#"{"puuid":"p","profileIconId":4568,"revisionDate":1,"summonerLevel":312}"#,
        )
        .unwrap();
        assert_eq!(summoner.id, "");
        assert_eq!(summoner.summoner_level, 312);
    }
}
