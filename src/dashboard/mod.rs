//! The page model: an ordered list of widgets produced by one search.

pub mod cards;
pub mod charts;

pub use cards::MatchCard;
pub use charts::{
    show_match_stats_bar, show_rank_graph, show_role_pie, show_winrate_gauge, BarChart,
    GaugeChart, PieChart, StackedBarChart,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    pub icon_url: Option<String>,
    pub riot_id: String,
    pub level: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Header(ProfileHeader),
    Error(String),
    Divider,
    Subheader(String),
    StackedBar(StackedBarChart),
    Pie(PieChart),
    Gauge(GaugeChart),
    Bar(BarChart),
    MatchCard(MatchCard),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    widgets: Vec<Widget>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn stacked_bars(&self) -> impl Iterator<Item = &StackedBarChart> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::StackedBar(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn pies(&self) -> impl Iterator<Item = &PieChart> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Pie(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn gauges(&self) -> impl Iterator<Item = &GaugeChart> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Gauge(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn match_cards(&self) -> impl Iterator<Item = &MatchCard> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::MatchCard(card) => Some(card),
            _ => None,
        })
    }

    pub fn error(&self) -> Option<&str> {
        self.widgets.iter().find_map(|w| match w {
            Widget::Error(message) => Some(message.as_str()),
            _ => None,
        })
    }
}
