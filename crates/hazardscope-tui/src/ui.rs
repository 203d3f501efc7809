use crate::app::{App, Panel};
use hazardscope_core::charts::{ChartData, HotspotMap};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph};
use ratatui::Frame;

/// Marker colors, assigned per disaster type in order of appearance.
const TYPE_COLORS: [Color; 8] = [
    Color::Red,
    Color::Yellow,
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::LightRed,
    Color::LightYellow,
];

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(chunks[1]);

    render_metrics(frame, app, body[0]);
    match app.panel {
        Panel::Map => render_map(frame, app, body[1]),
        Panel::Breakdown => render_breakdown(frame, app, body[1]),
        Panel::Radar => render_radar(frame, app, body[1]),
    }

    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let country = app.country().unwrap_or("—");
    let year = app
        .year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "—".to_string());

    let line = Line::from(vec![
        Span::styled("Country ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("◀ {country} ▶"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Year ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("▼ {year} ▲"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Panel ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.panel.title()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" hazardscope "),
    );
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![Span::styled(
        " ←/→ country   ↑/↓ year   Tab panel   q quit",
        Style::default().fg(Color::DarkGray),
    )]);
    frame.render_widget(Paragraph::new(hints), area);
}

fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Key metrics ");

    let lines: Vec<Line> = match &app.metrics {
        ChartData::Insufficient(reason) => placeholder_lines(reason),
        ChartData::Ready(card) => {
            let mut lines = vec![Line::from(Span::styled(
                format!("{} — {}", card.country, card.year),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.push(Line::raw(format!("Events        {}", card.events)));
            if let Some(v) = card.total_deaths {
                lines.push(Line::raw(format!("Deaths        {v:.0}")));
            }
            if let Some(v) = card.total_affected {
                lines.push(Line::raw(format!("Affected      {v:.0}")));
            }
            if let Some(v) = card.total_damage_thousands_usd {
                lines.push(Line::raw(format!("Damage        {v:.0}k US$")));
            }
            if let Some(v) = card.world_risk_index {
                lines.push(Line::raw(format!("World Risk    {v:.2}")));
            }
            if let Some(v) = card.average_risk_index {
                lines.push(Line::raw(format!("Avg Risk      {v:.2}")));
            }
            if let Some(ranks) = &card.ranks {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    "Rankings",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for (label, value) in [
                    ("Damages", ranks.rank_damages),
                    ("Risk", ranks.rank_risk),
                    ("GDP", ranks.rank_gdp),
                    ("HDI", ranks.rank_hdi),
                    ("Vulnerability", ranks.rank_vulnerability),
                ] {
                    if let Some(v) = value {
                        lines.push(Line::raw(format!("{label:<13} #{v:.0}")));
                    }
                }
            }
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    match &app.map {
        ChartData::Insufficient(reason) => render_placeholder(frame, area, " Hotspot map ", reason),
        ChartData::Ready(map) => {
            let title = format!(
                " Hotspot map — {} plotted, {} unresolved, {:.0} deaths ",
                map.markers.len(),
                map.unresolved,
                map.total_deaths
            );
            let (x_bounds, y_bounds) = map_bounds(map);
            let groups = marker_groups(map);

            let canvas = Canvas::default()
                .block(Block::default().borders(Borders::ALL).title(title))
                .marker(symbols::Marker::Braille)
                .x_bounds(x_bounds)
                .y_bounds(y_bounds)
                .paint(|ctx| {
                    for (_, color, coords) in &groups {
                        ctx.draw(&Points {
                            coords,
                            color: *color,
                        });
                    }
                    // Legend in the top-left corner of the canvas.
                    let mut y = y_bounds[1];
                    let step = (y_bounds[1] - y_bounds[0]) / 18.0;
                    for (name, color, coords) in &groups {
                        ctx.print(
                            x_bounds[0],
                            y,
                            Line::from(Span::styled(
                                format!("● {} ({})", name, coords.len()),
                                Style::default().fg(*color),
                            )),
                        );
                        y -= step;
                    }
                });
            frame.render_widget(canvas, area);
        }
    }
}

/// Padded lon/lat bounds around the plotted markers.
fn map_bounds(map: &HotspotMap) -> ([f64; 2], [f64; 2]) {
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    for m in &map.markers {
        min_lon = min_lon.min(m.longitude);
        max_lon = max_lon.max(m.longitude);
        min_lat = min_lat.min(m.latitude);
        max_lat = max_lat.max(m.latitude);
    }
    let pad_lon = ((max_lon - min_lon) * 0.15).max(1.0);
    let pad_lat = ((max_lat - min_lat) * 0.15).max(1.0);
    (
        [min_lon - pad_lon, max_lon + pad_lon],
        [min_lat - pad_lat, max_lat + pad_lat],
    )
}

/// Markers grouped by disaster type with a stable color each.
fn marker_groups(map: &HotspotMap) -> Vec<(String, Color, Vec<(f64, f64)>)> {
    let mut groups: Vec<(String, Color, Vec<(f64, f64)>)> = Vec::new();
    for marker in &map.markers {
        let idx = match groups
            .iter()
            .position(|(name, ..)| *name == marker.disaster_type)
        {
            Some(idx) => idx,
            None => {
                let color = TYPE_COLORS[groups.len() % TYPE_COLORS.len()];
                groups.push((marker.disaster_type.clone(), color, Vec::new()));
                groups.len() - 1
            }
        };
        // Canvas points are (x, y) = (lon, lat).
        groups[idx].2.push((marker.longitude, marker.latitude));
    }
    groups
}

fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    match &app.breakdown {
        ChartData::Insufficient(reason) => {
            render_placeholder(frame, area, " Disaster types ", reason)
        }
        ChartData::Ready(counts) => {
            // Largest first for the vertical bar layout.
            let data: Vec<(&str, u64)> = counts
                .iter()
                .rev()
                .map(|c| (c.disaster_type.as_str(), c.count as u64))
                .collect();
            let chart = BarChart::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Disaster types "),
                )
                .bar_width(12)
                .bar_gap(2)
                .bar_style(Style::default().fg(Color::Cyan))
                .value_style(Style::default().add_modifier(Modifier::BOLD))
                .data(&data);
            frame.render_widget(chart, area);
        }
    }
}

fn render_radar(frame: &mut Frame, app: &App, area: Rect) {
    match &app.radar {
        ChartData::Insufficient(reason) => render_placeholder(frame, area, " Risk profile ", reason),
        ChartData::Ready(profile) => {
            let width = 30usize;
            let mut lines = Vec::new();
            for axis in &profile.axes {
                let filled =
                    ((axis.value / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
                lines.push(Line::from(vec![
                    Span::raw(format!("{:<18}", axis.dimension.label())),
                    Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        "░".repeat(width - filled),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!(" {:>6.1}", axis.value)),
                ]));
            }
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" Risk profile ({}) ", profile.year));
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, reason: &str) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    frame.render_widget(Paragraph::new(placeholder_lines(reason)).block(block), area);
}

/// The deliberate empty state: the reason, dimmed, instead of a blank box.
fn placeholder_lines(reason: &str) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {reason}"),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
