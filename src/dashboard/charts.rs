use super::{Page, Widget};
use crate::analysis::role_stats::{RoleCount, RoleTally};
use crate::analysis::win_rate::win_rate_percent;
use crate::api::models::{LeagueEntryDto, MatchDto, ParticipantDto};

pub const WIN_COLOR: &str = "green";
pub const LOSS_COLOR: &str = "red";
pub const STAT_COLORS: [&str; 3] = ["#3498db", "#9b59b6", "#f1c40f"];

/// Wins stacked on losses, one column per queue type.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub wins: Vec<u64>,
    pub losses: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<RoleCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeChart {
    pub title: String,
    pub value: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    pub colors: Vec<String>,
}

pub fn show_rank_graph(page: &mut Page, entries: &[LeagueEntryDto]) {
    if entries.is_empty() {
        return;
    }

    page.push(Widget::StackedBar(StackedBarChart {
        title: "Vitórias e Derrotas por Tipo de Fila".to_string(),
        categories: entries.iter().map(|e| e.queue_type.clone()).collect(),
        wins: entries.iter().map(|e| e.wins).collect(),
        losses: entries.iter().map(|e| e.losses).collect(),
    }));
}

pub fn show_role_pie(page: &mut Page, matches: &[MatchDto], puuid: &str) {
    let tally = RoleTally::from_matches(matches, puuid);
    if tally.is_empty() {
        return;
    }

    page.push(Widget::Pie(PieChart {
        title: "Distribuição de Posições".to_string(),
        slices: tally.counts(),
    }));
}

pub fn show_winrate_gauge(page: &mut Page, wins: u64, losses: u64) {
    let Some(value) = win_rate_percent(wins, losses) else {
        return;
    };

    page.push(Widget::Gauge(GaugeChart {
        title: "Taxa de Vitória (%)".to_string(),
        value,
        max: 100,
    }));
}

pub fn show_match_stats_bar(page: &mut Page, player: &ParticipantDto) {
    page.push(Widget::Bar(BarChart {
        title: "Estatísticas da Partida".to_string(),
        x_title: "Métrica".to_string(),
        y_title: "Valor".to_string(),
        labels: vec![
            "Dano Total".to_string(),
            "Visão".to_string(),
            "Minions".to_string(),
        ],
        values: vec![
            player.total_damage_dealt_to_champions,
            player.vision_score,
            player.total_minions_killed,
        ],
        colors: STAT_COLORS.iter().map(|c| c.to_string()).collect(),
    }));
}
