use crate::dashboard::{
    BarChart, GaugeChart, MatchCard, Page, PieChart, ProfileHeader, StackedBarChart, Widget,
};
use colored::*;
use std::fmt::Write;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 30;
const GAUGE_WIDTH: usize = 40;

#[derive(Tabled)]
struct QueueRow {
    queue: String,
    #[tabled(rename = "Vitórias")]
    wins: String,
    #[tabled(rename = "Derrotas")]
    losses: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "Posição")]
    role: String,
    #[tabled(rename = "Partidas")]
    games: String,
    #[tabled(rename = "%")]
    share: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Métrica")]
    label: String,
    #[tabled(rename = "Valor")]
    value: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_page(page: &Page) {
    println!("{}", render_page(page));
}

pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    for widget in page.widgets() {
        match widget {
            Widget::Header(header) => render_header(&mut out, header),
            Widget::Error(message) => {
                let _ = writeln!(out, "{} {}", "❌".red(), message.red().bold());
            }
            Widget::Divider => {
                let _ = writeln!(out, "{}", "=".repeat(80).cyan());
            }
            Widget::Subheader(text) => {
                let _ = writeln!(out, "\n{}\n", format!("🔎 {}", text).bold().cyan());
            }
            Widget::StackedBar(chart) => render_stacked_bar(&mut out, chart),
            Widget::Pie(chart) => render_pie(&mut out, chart),
            Widget::Gauge(chart) => render_gauge(&mut out, chart),
            Widget::Bar(chart) => render_bar(&mut out, chart),
            Widget::MatchCard(card) => render_card(&mut out, card),
        }
    }
    out
}

fn render_header(out: &mut String, header: &ProfileHeader) {
    let _ = writeln!(out, "\n{}", format!("📊 {}", header.riot_id).bold().cyan());
    if let Some(level) = header.level {
        let _ = writeln!(out, "{}", format!("Nível {}", level).dimmed());
    }
    if let Some(icon) = &header.icon_url {
        let _ = writeln!(out, "{}", icon.dimmed());
    }
    let _ = writeln!(out);
}

fn render_stacked_bar(out: &mut String, chart: &StackedBarChart) {
    let max_total = chart
        .wins
        .iter()
        .zip(&chart.losses)
        .map(|(w, l)| w + l)
        .max()
        .unwrap_or(0);

    let rows: Vec<QueueRow> = chart
        .categories
        .iter()
        .zip(chart.wins.iter().zip(&chart.losses))
        .map(|(queue, (wins, losses))| QueueRow {
            queue: queue.clone(),
            wins: wins.to_string().green().to_string(),
            losses: losses.to_string().red().to_string(),
            bar: format!(
                "{}{}",
                "█".repeat(scaled(*wins, max_total, BAR_WIDTH)).green(),
                "█".repeat(scaled(*losses, max_total, BAR_WIDTH)).red()
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    let _ = writeln!(out, "{}", chart.title.bold().yellow());
    let _ = writeln!(out, "{}\n", table);
}

fn render_pie(out: &mut String, chart: &PieChart) {
    let total: usize = chart.slices.iter().map(|s| s.games).sum();
    let rows: Vec<RoleRow> = chart
        .slices
        .iter()
        .map(|slice| RoleRow {
            role: display_role(&slice.role),
            games: slice.games.to_string(),
            share: format!("{:.1}%", slice.games as f64 * 100.0 / total.max(1) as f64),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    let _ = writeln!(out, "{}", chart.title.bold().yellow());
    let _ = writeln!(out, "{}\n", table);
}

fn render_gauge(out: &mut String, chart: &GaugeChart) {
    let filled = scaled(chart.value as u64, chart.max as u64, GAUGE_WIDTH);
    let bar = format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(GAUGE_WIDTH - filled).dimmed()
    );
    let _ = writeln!(out, "{}", chart.title.bold().yellow());
    let _ = writeln!(out, "[{}] {}\n", bar, format!("{}%", chart.value).bold());
}

fn render_bar(out: &mut String, chart: &BarChart) {
    let rows: Vec<StatRow> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .map(|(label, value)| StatRow {
            label: label.clone(),
            value: value.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    let _ = writeln!(out, "{}", table);
    let _ = writeln!(out);
}

fn render_card(out: &mut String, card: &MatchCard) {
    let result = if card.win {
        "VITÓRIA".green().bold()
    } else {
        "DERROTA".red().bold()
    };

    let _ = writeln!(
        out,
        "{} {} - {} - Nível: {}",
        result,
        card.game_mode.bold(),
        card.champion,
        card.champion_level
    );
    let _ = writeln!(
        out,
        "   KDA: {} | Ouro: {} | Tempo: {}min",
        card.kda(),
        card.gold,
        card.duration_minutes
    );
    let _ = writeln!(out, "   Feitiços: {}", icon_names(&card.spell_icons).dimmed());
    let _ = writeln!(out, "   Itens: {}", icon_names(&card.item_icons).dimmed());
}

/// Shows the file stem of each icon URL, e.g. `SummonerFlash` or `3089`.
fn icon_names(urls: &[String]) -> String {
    urls.iter()
        .map(|url| {
            url.rsplit('/')
                .next()
                .unwrap_or(url)
                .trim_end_matches(".png")
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_role(role: &str) -> String {
    if role.is_empty() {
        "(sem posição)".to_string()
    } else {
        role.to_string()
    }
}

fn scaled(value: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_never_exceeds_width() {
        assert_eq!(scaled(0, 0, 30), 0);
        assert_eq!(scaled(10, 15, 30), 20);
        assert_eq!(scaled(15, 15, 30), 30);
    }

    #[test]
    fn icon_names_strip_cdn_prefix() {
        let urls = vec![
            "https://ddragon.leagueoflegends.com/cdn/13.6.1/img/spell/SummonerFlash.png".to_string(),
            "https://ddragon.leagueoflegends.com/cdn/13.6.1/img/item/3089.png".to_string(),
        ];
        assert_eq!(icon_names(&urls), "SummonerFlash 3089");
    }
}
