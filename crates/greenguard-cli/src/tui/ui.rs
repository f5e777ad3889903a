//! TUI rendering — dashboard shell over the engine's observables.
//!
//! ┌──────────────────────────────────────────────────────┐
//! │  🌳 GreenGuard   demo●   28.4°C  61dB  AQI 52        │
//! ├───────────────────────────────┬──────────────────────┤
//! │  1 Overview  2 Architecture … │  GreenAI Assistant   │
//! │                               │  ai: Xin chào! …     │
//! │  (active view body)           │  user: Kiến trúc …   │
//! │                               │  … composing …       │
//! │                               ├──────────────────────┤
//! │                               │  > _                 │
//! ├───────────────────────────────┴──────────────────────┤
//! │  1-5/tab: views   d: demo   /: chat   e: export   q  │
//! └──────────────────────────────────────────────────────┘

use greenguard_core::alarm::Metric;
use greenguard_core::chat::Sender;
use greenguard_core::fixtures::{ALERTS, AlertStatus, FORECAST, TreeStatus};
use greenguard_core::scenario::SCRIPT;
use greenguard_core::view::{ALL_VIEWS, ViewId};
use ratatui::{prelude::*, widgets::*};

use super::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // body
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_header(f, rows[0], app);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(rows[1]);

    draw_body(f, cols[0], app);
    draw_chat(f, cols[1], app);
    draw_keys(f, rows[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let reading = engine.reading();
    let alarm = engine.alarm();

    let metric = |breached: bool| {
        if breached {
            Style::default().bold().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        }
    };

    let demo = if engine.demo_mode() {
        Span::styled(" demo● ", Style::default().bold().fg(Color::Magenta))
    } else {
        Span::styled(" demo○ ", Style::default().fg(Color::DarkGray))
    };

    let mut title = vec![
        Span::styled(" 🌳 GreenGuard ", Style::default().bold().fg(Color::Green)),
        demo,
        Span::styled(
            format!(" {:.1}°C ", reading.temperature),
            metric(alarm.is_breached(Metric::Temperature)),
        ),
        Span::styled(
            format!(" {:.0}dB ", reading.noise_level),
            metric(alarm.is_breached(Metric::Noise)),
        ),
        Span::styled(
            format!(" AQI {} ", reading.air_quality_index),
            metric(alarm.is_breached(Metric::AirQuality)),
        ),
    ];
    if alarm.is_alarmed {
        title.push(Span::styled(
            "  ⚠ THRESHOLD BREACH ",
            Style::default().bold().fg(Color::White).bg(Color::Red),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if alarm.is_alarmed {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        })
        .title(Line::from(title));
    f.render_widget(block, area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    draw_view_tabs(f, rows[0], app);

    match app.engine.active_view() {
        ViewId::Overview => draw_overview(f, rows[1], app),
        ViewId::Architecture => draw_architecture(f, rows[1]),
        ViewId::Map => draw_map(f, rows[1], app),
        ViewId::Devices => draw_devices(f, rows[1], app),
        ViewId::Alerts => draw_alerts(f, rows[1]),
    }
}

fn draw_view_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = ALL_VIEWS
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.label())))
        .collect();
    let selected = ALL_VIEWS
        .iter()
        .position(|v| *v == app.engine.active_view())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().bold().fg(Color::Green));
    f.render_widget(tabs, area);
}

fn draw_overview(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    let engine = &app.engine;
    let reading = engine.reading();
    let alarm = engine.alarm();

    let stat = |label: &str, value: String, breached: bool| -> Line {
        Line::from(vec![
            Span::styled(format!("  {label:<12}"), Style::default().fg(Color::Gray)),
            Span::styled(
                value,
                if breached {
                    Style::default().bold().fg(Color::Red)
                } else {
                    Style::default().bold().fg(Color::White)
                },
            ),
            Span::styled(
                if breached { "  over threshold" } else { "  stable" },
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    let lines = vec![
        Line::from(""),
        stat(
            "Temperature",
            format!("{:.1} °C", reading.temperature),
            alarm.is_breached(Metric::Temperature),
        ),
        stat(
            "Noise",
            format!("{:.1} dB", reading.noise_level),
            alarm.is_breached(Metric::Noise),
        ),
        stat(
            "Air quality",
            format!("{} AQI", reading.air_quality_index),
            alarm.is_breached(Metric::AirQuality),
        ),
    ];
    let cards = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Live sensors "),
    );
    f.render_widget(cards, rows[0]);

    let bars: Vec<Bar> = FORECAST
        .iter()
        .map(|p| {
            Bar::default()
                .label(Line::from(p.time))
                .value(p.risk as u64)
                .style(if p.risk >= 80 {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Cyan)
                })
        })
        .collect();
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .max(100)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Risk forecast (%) "),
        );
    f.render_widget(chart, rows[1]);
}

fn draw_architecture(f: &mut Frame, area: Rect) {
    let layer = |n: u8, name: &'static str, parts: &'static str| -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                format!("  Layer {n}: {name}"),
                Style::default().bold().fg(Color::Green),
            )),
            Line::from(Span::styled(
                format!("    {parts}"),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ]
    };

    let mut lines = vec![Line::from("")];
    lines.extend(layer(1, "Device", "Green Node — MPU6050 sensor, ESP32, LoRa module"));
    lines.extend(layer(2, "Connectivity", "TTN gateway, MQTT broker, time-series store, Weather API"));
    lines.extend(layer(3, "AI Core", "Anomaly detection, LSTM risk forecaster"));
    lines.extend(layer(4, "Application", "Dashboard, assistant, SMS/Zalo alerts"));

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" System architecture — 4 layers "),
    );
    f.render_widget(p, area);
}

fn draw_map(f: &mut Frame, area: Rect, app: &App) {
    use ratatui::widgets::canvas::{Canvas, Points};

    let nodes = app.engine.tree_nodes();
    let coords = |status: TreeStatus| -> Vec<(f64, f64)> {
        nodes
            .iter()
            .filter(|n| n.status == status)
            // Flip y so "top of the map" renders at the top of the canvas.
            .map(|n| (n.x, 100.0 - n.y))
            .collect()
    };
    let safe = coords(TreeStatus::Safe);
    let warning = coords(TreeStatus::Warning);
    let critical = coords(TreeStatus::Critical);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" City map — ● safe  ● warning  ● critical "),
        )
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .marker(symbols::Marker::Dot)
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &safe,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &warning,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &critical,
                color: Color::Red,
            });
        });
    f.render_widget(canvas, area);
}

fn draw_devices(f: &mut Frame, area: Rect, app: &App) {
    let nodes = app.engine.tree_nodes();
    let rows: Vec<Row> = nodes
        .iter()
        .map(|n| {
            let style = match n.status {
                TreeStatus::Critical => Style::default().bold().fg(Color::Red),
                TreeStatus::Warning => Style::default().fg(Color::Yellow),
                TreeStatus::Safe => Style::default().fg(Color::Green),
            };
            Row::new(vec![
                Cell::from(n.id.clone()),
                Cell::from(format!("{:.0}%, {:.0}%", n.x, n.y)),
                Cell::from(format!("{:.1}°", n.tilt)),
                Cell::from(format!("{:?}", n.status)).style(style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Min(8),
        ],
    )
    .header(Row::new(vec!["Node", "Position", "Tilt", "Status"]).bold())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" AIoT devices ({}) ", nodes.len())),
    );
    f.render_widget(table, area);
}

fn draw_alerts(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = ALERTS
        .iter()
        .map(|a| {
            let style = match a.status {
                AlertStatus::Critical => Style::default().bold().fg(Color::Red),
                AlertStatus::Warning => Style::default().fg(Color::Yellow),
                AlertStatus::Stable => Style::default().fg(Color::Green),
            };
            Row::new(vec![
                Cell::from(a.tree_id),
                Cell::from(a.location),
                Cell::from(format!("{}", a.risk)),
                Cell::from(format!("{:?}", a.status)).style(style),
                Cell::from(a.category),
                Cell::from(a.time),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(24),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["Tree", "Location", "Risk", "Status", "Category", "When"]).bold())
    .block(Block::default().borders(Borders::ALL).title(" Alerts "));
    f.render_widget(table, area);
}

fn draw_chat(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let engine = &app.engine;
    let mut lines: Vec<Line> = Vec::new();
    for msg in engine.messages() {
        let (who, style) = match msg.sender {
            Sender::User => ("you", Style::default().bold().fg(Color::Cyan)),
            Sender::Assistant => ("ai ", Style::default().bold().fg(Color::Green)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{who}: "), style),
            Span::raw(msg.body.clone()),
        ]));
    }
    if engine.composing() {
        lines.push(Line::from(Span::styled(
            "ai is composing…",
            Style::default().italic().fg(Color::DarkGray),
        )));
    }

    // Keep the tail visible; the demo script alone outgrows small panes.
    let inner_height = rows[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let history = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" GreenAI Assistant "),
        );
    f.render_widget(history, rows[0]);

    let input_style = if app.chat_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(format!("> {}", app.input))
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(if app.chat_focused {
            " message (enter: send, esc: done) "
        } else {
            " press / to chat "
        }));
    f.render_widget(input, rows[1]);
}

fn draw_keys(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let export = if engine.export_pending() {
        "  exporting…".to_string()
    } else if let Some(name) = engine.last_export() {
        format!("  exported {name}")
    } else {
        String::new()
    };
    let demo_hint = if engine.demo_mode() {
        format!("  demo tour: {} turns", SCRIPT.len())
    } else {
        String::new()
    };

    let line = Line::from(Span::styled(
        format!(" 1-5/tab: views   d: demo   /: chat   e: export   q: quit{export}{demo_hint}"),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(line), area);
}
