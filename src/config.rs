use crate::error::AppError;
use std::env;

pub const API_KEY_PLACEHOLDER: &str = "SUA_CHAVE_AQUI";
pub const DEFAULT_REGION: &str = "br1";
pub const DEFAULT_DDRAGON_VERSION: &str = "13.6.1";
/// Most recent matches fetched per search. No pagination beyond this.
pub const MATCH_COUNT: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub match_region: String,
    pub account_region: String,
    pub ddragon_version: String,
    pub match_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY").unwrap_or_else(|| {
            log::warn!("RIOT_API_KEY not set, using placeholder key");
            API_KEY_PLACEHOLDER.to_string()
        });

        let region = lookup("RIOT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let ddragon_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string());

        let mut config = Config {
            api_key,
            region: String::new(),
            match_region: String::new(),
            account_region: String::new(),
            ddragon_version,
            match_count: MATCH_COUNT,
        };
        config.set_region(&region)?;

        if config.ddragon_version.trim().is_empty() {
            return Err(AppError::ConfigError(
                "DDRAGON_VERSION must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn set_region(&mut self, region: &str) -> Result<(), AppError> {
        let region = region.trim().to_lowercase();
        if region.is_empty() {
            return Err(AppError::ConfigError("region must not be empty".to_string()));
        }
        self.match_region = regional_routing(&region).to_string();
        self.account_region = account_routing(&region).to_string();
        self.region = region;
        Ok(())
    }
}

/// Match-v5 and account-v1 live on regional hosts, not platform hosts.
pub fn regional_routing(region: &str) -> &'static str {
    match region {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "americas",
    }
}

/// Account-v1 has no `sea` host; those platforms resolve through asia.
pub fn account_routing(region: &str) -> &'static str {
    match regional_routing(region) {
        "sea" => "asia",
        routing => routing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_key, API_KEY_PLACEHOLDER);
        assert_eq!(config.region, "br1");
        assert_eq!(config.match_region, "americas");
        assert_eq!(config.account_region, "americas");
        assert_eq!(config.ddragon_version, "13.6.1");
        assert_eq!(config.match_count, 10);
    }

    #[test]
    fn region_override_updates_routing() {
        let mut config = config_from(&[("RIOT_API_KEY", "RGAPI-test"), ("RIOT_REGION", "KR")])
            .unwrap();
        assert_eq!(config.api_key, "RGAPI-test");
        assert_eq!(config.region, "kr");
        assert_eq!(config.match_region, "asia");

        config.set_region("euw1").unwrap();
        assert_eq!(config.match_region, "europe");
    }

    #[test]
    fn sea_platforms_look_up_accounts_on_asia() {
        let config = config_from(&[("RIOT_REGION", "oc1")]).unwrap();
        assert_eq!(config.match_region, "sea");
        assert_eq!(config.account_region, "asia");

        let url =
            crate::api::endpoints::account_by_riot_id(&config.account_region, "smoke", "071");
        assert!(url.starts_with("https://asia.api.riotgames.com/riot/account/v1/"));
    }

    #[test]
    fn empty_region_is_rejected() {
        assert!(config_from(&[("RIOT_REGION", "  ")]).is_err());
        assert!(config_from(&[("DDRAGON_VERSION", "")]).is_err());
    }
}
