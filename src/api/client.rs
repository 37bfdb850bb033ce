use crate::config::Config;
use serde::de::DeserializeOwned;

use super::endpoints;
use super::models::*;

/// The five Riot lookups the dashboard needs.
///
/// Every call is best-effort: a non-200 status, a transport failure or an
/// undecodable body all collapse into the same empty result.
pub trait RiotApi {
    fn get_account(&self, game_name: &str, tag_line: &str) -> Option<AccountDto>;

    fn get_summoner(&self, puuid: &str) -> Option<SummonerDto>;

    fn get_league_entries(&self, summoner_id: &str) -> Vec<LeagueEntryDto>;

    /// Used when the summoner record no longer carries an encrypted id.
    fn get_league_entries_by_puuid(&self, puuid: &str) -> Vec<LeagueEntryDto>;

    fn get_match_ids(&self, puuid: &str) -> Vec<String>;

    fn get_match(&self, match_id: &str) -> Option<MatchDto>;
}

pub struct RiotApiClient {
    config: Config,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        RiotApiClient { config }
    }

    fn execute_request(&self, url: &str) -> Option<String> {
        log::debug!("GET {}", url);

        let response = ureq::get(url)
            .set("User-Agent", "data_legends/0.1.0")
            .set("X-Riot-Token", &self.config.api_key)
            .call();

        match response {
            Ok(resp) => {
                let status = resp.status();
                match resp.into_string() {
                    Ok(body) => body_if_ok(status, body),
                    Err(e) => {
                        log::warn!("failed to read body from {}: {}", url, e);
                        None
                    }
                }
            }
            Err(ureq::Error::Status(code, _)) => {
                log::debug!("{} returned status {}", url, code);
                None
            }
            Err(e) => {
                log::warn!("request to {} failed: {}", url, e);
                None
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body)
            .map_err(|e| log::warn!("unexpected payload from {}: {}", url, e))
            .ok()
    }
}

/// Only an exact 200 yields a body; 2xx variants such as 204 are treated as misses.
pub fn body_if_ok(status: u16, body: String) -> Option<String> {
    if status == 200 {
        Some(body)
    } else {
        log::debug!("ignoring response with status {}", status);
        None
    }
}

impl RiotApi for RiotApiClient {
    fn get_account(&self, game_name: &str, tag_line: &str) -> Option<AccountDto> {
        let url = endpoints::account_by_riot_id(&self.config.account_region, game_name, tag_line);
        self.get_json(&url)
    }

    fn get_summoner(&self, puuid: &str) -> Option<SummonerDto> {
        let url = endpoints::summoner_by_puuid(&self.config.region, puuid);
        self.get_json(&url)
    }

    fn get_league_entries(&self, summoner_id: &str) -> Vec<LeagueEntryDto> {
        let url = endpoints::league_entries_by_summoner(&self.config.region, summoner_id);
        self.get_json(&url).unwrap_or_default()
    }

    fn get_league_entries_by_puuid(&self, puuid: &str) -> Vec<LeagueEntryDto> {
        let url = endpoints::league_entries_by_puuid(&self.config.region, puuid);
        self.get_json(&url).unwrap_or_default()
    }

    fn get_match_ids(&self, puuid: &str) -> Vec<String> {
        let url = endpoints::match_ids_by_puuid(
            &self.config.match_region,
            puuid,
            self.config.match_count,
        );
        self.get_json(&url).unwrap_or_default()
    }

    fn get_match(&self, match_id: &str) -> Option<MatchDto> {
        let url = endpoints::match_by_id(&self.config.match_region, match_id);
        self.get_json(&url)
    }
}
