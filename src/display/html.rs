//! Standalone HTML report. Charts are Plotly figures, cards are inline HTML.

use crate::dashboard::charts::{LOSS_COLOR, WIN_COLOR};
use crate::dashboard::{
    BarChart, GaugeChart, MatchCard, Page, PieChart, ProfileHeader, StackedBarChart, Widget,
};
use crate::error::AppError;
use chrono::{DateTime, Local};
use serde_json::{json, Value};
use std::fmt::Write;
use std::fs;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

pub fn write_page(path: &Path, page: &Page, generated_at: DateTime<Local>) -> Result<(), AppError> {
    let document = render_page(page, generated_at);
    fs::write(path, document)
        .map_err(|e| AppError::ReportError(format!("{}: {}", path.display(), e)))
}

pub fn render_page(page: &Page, generated_at: DateTime<Local>) -> String {
    let mut body = String::new();
    let mut chart_index = 0;

    for widget in page.widgets() {
        match widget {
            Widget::Header(header) => render_header(&mut body, header),
            Widget::Error(message) => {
                let _ = writeln!(body, "<div class=\"error\">{}</div>", escape(message));
            }
            Widget::Divider => body.push_str("<hr>\n"),
            Widget::Subheader(text) => {
                let _ = writeln!(body, "<h3>🔎 {}</h3>", escape(text));
            }
            Widget::StackedBar(chart) => {
                push_figure(&mut body, &mut chart_index, stacked_bar_figure(chart))
            }
            Widget::Pie(chart) => push_figure(&mut body, &mut chart_index, pie_figure(chart)),
            Widget::Gauge(chart) => push_figure(&mut body, &mut chart_index, gauge_figure(chart)),
            Widget::Bar(chart) => push_figure(&mut body, &mut chart_index, bar_figure(chart)),
            Widget::MatchCard(card) => render_card(&mut body, card),
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Data Legends</title>
<script src="{plotly}"></script>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
.card {{ padding: 10px; border-radius: 10px; margin: 1rem 0; color: #fff; }}
.error {{ background: #fdecea; color: #b71c1c; padding: 10px; border-radius: 5px; }}
.caption {{ color: #777; }}
</style>
</head>
<body>
<h1>📊 Data Legends</h1>
{body}<p class="caption">Gerado em {generated}</p>
</body>
</html>
"#,
        plotly = PLOTLY_CDN,
        body = body,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

fn render_header(body: &mut String, header: &ProfileHeader) {
    body.push_str("<div class=\"header\">\n");
    if let Some(icon) = &header.icon_url {
        let _ = writeln!(body, "<img src=\"{}\" width=\"100\">", escape(icon));
    }
    let _ = writeln!(body, "<h2>{}</h2>", escape(&header.riot_id));
    if let Some(level) = header.level {
        let _ = writeln!(body, "<p class=\"caption\">Nível {}</p>", level);
    }
    body.push_str("</div>\n");
}

fn render_card(body: &mut String, card: &MatchCard) {
    let spells = card
        .spell_icons
        .iter()
        .map(|icon| format!("<img src=\"{}\" width=\"25\">", escape(icon)))
        .collect::<Vec<_>>()
        .join(" ");
    let items = card
        .item_icons
        .iter()
        .map(|icon| format!("<img src=\"{}\" width=\"25\">", escape(icon)))
        .collect::<Vec<_>>()
        .join(" ");

    let _ = writeln!(
        body,
        "<div class=\"card\" style=\"background-color:{background};\">\n\
         <img src=\"{icon}\" width=\"40\" style=\"vertical-align:middle; border-radius:5px;\">\n\
         <b>{mode}</b> - {champion} - <b>Nível:</b> {level}<br>\n\
         <b>KDA:</b> {kda} | <b>Ouro:</b> {gold} | <b>Tempo:</b> {minutes}min<br>\n\
         <b>Feitiços:</b> {spells}<br>\n\
         <b>Itens:</b> {items}\n\
         </div>",
        background = card.background,
        icon = escape(&card.champion_icon),
        mode = escape(&card.game_mode),
        champion = escape(&card.champion),
        level = card.champion_level,
        kda = card.kda(),
        gold = card.gold,
        minutes = card.duration_minutes,
        spells = spells,
        items = items,
    );
}

fn push_figure(body: &mut String, index: &mut usize, figure: Value) {
    let id = format!("chart-{}", index);
    *index += 1;
    let _ = writeln!(
        body,
        "<div id=\"{id}\"></div>\n<script>Plotly.newPlot(\"{id}\", {data}, {layout}, {{responsive: true}});</script>",
        id = id,
        data = script_safe(&figure["data"]),
        layout = script_safe(&figure["layout"]),
    );
}

pub fn stacked_bar_figure(chart: &StackedBarChart) -> Value {
    json!({
        "data": [
            {
                "type": "bar",
                "x": chart.categories,
                "y": chart.wins,
                "name": "Vitórias",
                "marker": { "color": WIN_COLOR },
            },
            {
                "type": "bar",
                "x": chart.categories,
                "y": chart.losses,
                "name": "Derrotas",
                "marker": { "color": LOSS_COLOR },
            },
        ],
        "layout": { "barmode": "stack", "title": chart.title },
    })
}

pub fn pie_figure(chart: &PieChart) -> Value {
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.role.as_str()).collect();
    let values: Vec<usize> = chart.slices.iter().map(|s| s.games).collect();
    json!({
        "data": [{ "type": "pie", "labels": labels, "values": values }],
        "layout": { "title": chart.title },
    })
}

pub fn gauge_figure(chart: &GaugeChart) -> Value {
    json!({
        "data": [{
            "type": "indicator",
            "mode": "gauge+number",
            "value": chart.value,
            "title": { "text": chart.title },
            "gauge": { "axis": { "range": [Value::Null, chart.max] } },
        }],
        "layout": {},
    })
}

pub fn bar_figure(chart: &BarChart) -> Value {
    json!({
        "data": [{
            "type": "bar",
            "x": chart.labels,
            "y": chart.values,
            "marker": { "color": chart.colors },
        }],
        "layout": {
            "title": chart.title,
            "xaxis": { "title": chart.x_title },
            "yaxis": { "title": chart.y_title },
            "height": 300,
        },
    })
}

/// JSON embedded in a `<script>` block must not be able to close the tag.
fn script_safe(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape("<b>\"Zé\" & 'co'</b>"),
            "&lt;b&gt;&quot;Zé&quot; &amp; &#39;co&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn gauge_figure_matches_plotly_indicator() {
        let figure = gauge_figure(&GaugeChart {
            title: "Taxa de Vitória (%)".to_string(),
            value: 66,
            max: 100,
        });
        assert_eq!(figure["data"][0]["value"], 66);
        assert_eq!(figure["data"][0]["mode"], "gauge+number");
        assert!(figure["data"][0]["gauge"]["axis"]["range"][0].is_null());
    }

    #[test]
    fn script_payload_cannot_close_tag() {
        let value = json!({ "title": "</script><script>alert(1)" });
        assert!(!script_safe(&value).contains("</script>"));
    }
}
