// URL builders for the Riot REST API and the Data Dragon CDN

pub const DATA_DRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

pub fn account_by_riot_id(account_region: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        account_region,
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

pub fn summoner_by_puuid(region: &str, puuid: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
        region, puuid
    )
}

pub fn league_entries_by_summoner(region: &str, summoner_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/league/v4/entries/by-summoner/{}",
        region, summoner_id
    )
}

pub fn league_entries_by_puuid(region: &str, puuid: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/league/v4/entries/by-puuid/{}",
        region, puuid
    )
}

pub fn match_ids_by_puuid(match_region: &str, puuid: &str, count: usize) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
        match_region, puuid, count
    )
}

pub fn match_by_id(match_region: &str, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        match_region, match_id
    )
}

pub fn champion_data(version: &str) -> String {
    format!("{}/{}/data/en_US/champion.json", DATA_DRAGON_CDN, version)
}

pub fn spell_data(version: &str) -> String {
    format!("{}/{}/data/en_US/summoner.json", DATA_DRAGON_CDN, version)
}

pub fn profile_icon(version: &str, icon_id: i64) -> String {
    format!("{}/{}/img/profileicon/{}.png", DATA_DRAGON_CDN, version, icon_id)
}

pub fn champion_icon(version: &str, champion: &str) -> String {
    format!("{}/{}/img/champion/{}.png", DATA_DRAGON_CDN, version, champion)
}

pub fn spell_icon(version: &str, spell: &str) -> String {
    format!("{}/{}/img/spell/{}.png", DATA_DRAGON_CDN, version, spell)
}

pub fn item_icon(version: &str, item_id: i64) -> String {
    format!("{}/{}/img/item/{}.png", DATA_DRAGON_CDN, version, item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn riot_id_parts_are_encoded() {
        let url = account_by_riot_id("americas", "Zé Doe", "BR1");
        assert_eq!(
            url,
            "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Z%C3%A9%20Doe/BR1"
        );
    }

    #[test]
    fn match_ids_request_fixed_window() {
        let url = match_ids_by_puuid("americas", "abc", 10);
        assert!(url.ends_with("/matches/by-puuid/abc/ids?start=0&count=10"));
    }

    #[test]
    fn cdn_icons_use_version() {
        assert_eq!(
            champion_icon("13.6.1", "Ahri"),
            "https://ddragon.leagueoflegends.com/cdn/13.6.1/img/champion/Ahri.png"
        );
        assert_eq!(
            item_icon("13.6.1", 3089),
            "https://ddragon.leagueoflegends.com/cdn/13.6.1/img/item/3089.png"
        );
    }
}
