#![allow(dead_code)]

use data_legends::api::models::*;
use data_legends::api::RiotApi;
use data_legends::reference::{parse_id_table, ReferenceData};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

pub fn reference_data() -> ReferenceData {
    let champions = parse_id_table(&read_fixture("champion.json")).expect("champions should parse");
    let spells = parse_id_table(&read_fixture("summoner.json")).expect("spells should parse");
    ReferenceData::new("13.6.1", champions, spells)
}

pub fn ranked_match() -> MatchDto {
    serde_json::from_str(&read_fixture("match_ranked.json")).expect("match should parse")
}

pub fn account(puuid: &str, game_name: &str, tag_line: &str) -> AccountDto {
    AccountDto {
        puuid: puuid.to_string(),
        game_name: game_name.to_string(),
        tag_line: tag_line.to_string(),
    }
}

pub fn rank_entry(queue_type: &str, wins: u64, losses: u64) -> LeagueEntryDto {
    LeagueEntryDto {
        queue_type: queue_type.to_string(),
        wins,
        losses,
    }
}

/// A match with only the searched player in it.
pub fn match_in_position(puuid: &str, position: &str) -> MatchDto {
    MatchDto {
        info: MatchInfo {
            game_mode: "CLASSIC".to_string(),
            game_duration: 1800,
            participants: vec![ParticipantDto {
                puuid: puuid.to_string(),
                team_position: position.to_string(),
                ..ParticipantDto::default()
            }],
        },
    }
}

/// In-memory `RiotApi` that records every call it receives.
#[derive(Default)]
pub struct MockApi {
    pub account: Option<AccountDto>,
    pub summoner: Option<SummonerDto>,
    pub rank: Vec<LeagueEntryDto>,
    pub match_ids: Vec<String>,
    pub matches: HashMap<String, MatchDto>,
    pub calls: RefCell<Vec<String>>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl RiotApi for MockApi {
    fn get_account(&self, game_name: &str, tag_line: &str) -> Option<AccountDto> {
        self.record(format!("account:{}#{}", game_name, tag_line));
        self.account.clone()
    }

    fn get_summoner(&self, puuid: &str) -> Option<SummonerDto> {
        self.record(format!("summoner:{}", puuid));
        self.summoner.clone()
    }

    fn get_league_entries(&self, summoner_id: &str) -> Vec<LeagueEntryDto> {
        self.record(format!("league:{}", summoner_id));
        self.rank.clone()
    }

    fn get_league_entries_by_puuid(&self, puuid: &str) -> Vec<LeagueEntryDto> {
        self.record(format!("league-by-puuid:{}", puuid));
        self.rank.clone()
    }

    fn get_match_ids(&self, puuid: &str) -> Vec<String> {
        self.record(format!("match-ids:{}", puuid));
        self.match_ids.clone()
    }

    fn get_match(&self, match_id: &str) -> Option<MatchDto> {
        self.record(format!("match:{}", match_id));
        self.matches.get(match_id).cloned()
    }
}
