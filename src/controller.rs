use crate::analysis::win_rate::rank_totals;
use crate::api::endpoints;
use crate::api::models::{AccountDto, MatchDto, SummonerDto};
use crate::api::RiotApi;
use crate::dashboard::{
    show_match_stats_bar, show_rank_graph, show_role_pie, show_winrate_gauge, MatchCard, Page,
    ProfileHeader, Widget,
};
use crate::error::AppError;
use crate::reference::ReferenceData;
use indicatif::ProgressBar;

pub const NOT_FOUND_MESSAGE: &str = "Invocador não encontrado.";

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Idle,
    Loaded(Page),
}

/// Holds the page between searches. Each submit rebuilds it from scratch.
pub struct Controller<'a, A: RiotApi + ?Sized> {
    api: &'a A,
    refs: &'a ReferenceData,
    state: PageState,
}

impl<'a, A: RiotApi + ?Sized> Controller<'a, A> {
    pub fn new(api: &'a A, refs: &'a ReferenceData) -> Self {
        Controller {
            api,
            refs,
            state: PageState::Idle,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn page(&self) -> Option<&Page> {
        match &self.state {
            PageState::Loaded(page) => Some(page),
            PageState::Idle => None,
        }
    }

    pub fn submit(&mut self, game_name: &str, tag_line: &str) {
        let page = search(self.api, self.refs, game_name, tag_line);
        self.state = PageState::Loaded(page);
    }
}

/// Runs one full search and returns the rendered page.
///
/// The calls are strictly sequential: account, summoner, rank, match ids,
/// then each match once. A missing account stops everything after it.
pub fn search<A: RiotApi + ?Sized>(
    api: &A,
    refs: &ReferenceData,
    game_name: &str,
    tag_line: &str,
) -> Page {
    let mut page = Page::new();

    let Some(account) = api.get_account(game_name, tag_line) else {
        log::info!("account {}#{} not found", game_name, tag_line);
        page.push(Widget::Error(NOT_FOUND_MESSAGE.to_string()));
        return page;
    };

    let summoner = api.get_summoner(&account.puuid);
    if summoner.is_none() {
        log::warn!("no summoner profile for {}", account.puuid);
    }

    let rank = match &summoner {
        Some(s) if !s.id.is_empty() => api.get_league_entries(&s.id),
        Some(_) => api.get_league_entries_by_puuid(&account.puuid),
        None => Vec::new(),
    };

    let match_ids = api.get_match_ids(&account.puuid);
    let matches = fetch_matches(api, &match_ids);

    page.push(Widget::Header(profile_header(&account, summoner.as_ref(), refs)));

    show_rank_graph(&mut page, &rank);
    let (wins, losses) = rank_totals(&rank);
    show_winrate_gauge(&mut page, wins, losses);

    show_role_pie(&mut page, &matches, &account.puuid);

    page.push(Widget::Divider);
    page.push(Widget::Subheader("Partidas Recentes".to_string()));

    for match_data in &matches {
        for player in &match_data.info.participants {
            if player.puuid == account.puuid {
                page.push(Widget::MatchCard(MatchCard::build(match_data, player, refs)));
                show_match_stats_bar(&mut page, player);
            }
        }
    }

    page
}

/// Fetches each id once, in order. Failed fetches are dropped, so the result
/// may be shorter than `match_ids`.
pub fn fetch_matches<A: RiotApi + ?Sized>(
    api: &A,
    match_ids: &[String],
) -> Vec<MatchDto> {
    let progress = ProgressBar::new(match_ids.len() as u64);
    progress.set_message("Buscando partidas");

    let mut matches = Vec::with_capacity(match_ids.len());
    for match_id in match_ids {
        match api.get_match(match_id) {
            Some(match_data) => matches.push(match_data),
            None => log::warn!("dropping match {}: fetch failed", match_id),
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    matches
}

fn profile_header(
    account: &AccountDto,
    summoner: Option<&SummonerDto>,
    refs: &ReferenceData,
) -> ProfileHeader {
    ProfileHeader {
        icon_url: summoner.map(|s| endpoints::profile_icon(&refs.version, s.profile_icon_id)),
        riot_id: format!("{}#{}", account.game_name, account.tag_line),
        level: summoner.map(|s| s.summoner_level),
    }
}

/// Splits `Name#TAG` into its two parts.
pub fn parse_riot_id(input: &str) -> Result<(String, String), AppError> {
    let (game_name, tag_line) = input.trim().rsplit_once('#').ok_or(AppError::InvalidRiotId)?;
    let (game_name, tag_line) = (game_name.trim(), tag_line.trim());
    if game_name.is_empty() || tag_line.is_empty() {
        return Err(AppError::InvalidRiotId);
    }
    Ok((game_name.to_string(), tag_line.to_string()))
}
