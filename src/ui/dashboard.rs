//! Trend dashboard rendering
//!
//! Renders the header with the current selectors, the tab bar, whichever panel
//! the tab controller marks active, and a key-hint footer. Each panel is drawn
//! from the app's current [`TrendReport`].

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::AqiCategory;
use crate::tabs::{Panel, Tab};
use crate::trends::{ForecastEntry, PatternEntry, TrendDirection, TrendReport};
use crate::ui::help_overlay;
use crate::ui::widgets::AqiSparkline;

/// Upper end of the sparkline and pattern bar scale
const SCALE_MAX: u32 = 300;

/// Colour for a trend direction (rising AQI is bad news)
fn direction_color(direction: TrendDirection) -> Color {
    match direction {
        TrendDirection::Increasing => Color::Red,
        TrendDirection::Decreasing => Color::Green,
        TrendDirection::Stable => Color::Cyan,
    }
}

/// Style for an AQI value, coloured by its category
fn aqi_style(aqi: u32) -> Style {
    Style::default().fg(AqiCategory::from_aqi(aqi).color())
}

/// Renders the whole dashboard for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(5),    // Active panel
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_tab_bar(frame, app, chunks[1]);

    match &app.report {
        Some(report) => match app.tabs.active_panel() {
            Panel::Timeline => render_timeline(frame, report, chunks[2]),
            Panel::Statistics => render_statistics(frame, report, chunks[2]),
            Panel::Patterns => render_patterns(frame, report, chunks[2]),
            Panel::Categories => render_categories(frame, chunks[2]),
            Panel::Forecast => render_forecast(frame, report, chunks[2]),
        },
        None => render_placeholder(frame, chunks[2]),
    }

    render_footer(frame, app, chunks[3]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders the title line with city, range and reference date
///
/// The date is the one the current report ends on, so it stays in step with
/// the timeline across midnight.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let city = app.city();
    let date = app
        .report
        .as_ref()
        .map_or_else(|| app.today(), |report| report.generated_for)
        .format("%a %b %d, %Y")
        .to_string();
    let width = area.width as usize;

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "AQITREND",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                city.name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.range.label(), Style::default().fg(Color::Yellow)),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(date, Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the tab bar with the active tab highlighted
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tabs.active_tab().index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs, area);
}

/// Renders the sparkline and the recent-history list, newest first
fn render_timeline(frame: &mut Frame, report: &TrendReport, area: Rect) {
    let block = Block::default()
        .title(format!(" Recent History · {} ", report.city.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Sparkline plus spacer
            Constraint::Min(1),    // List
        ])
        .split(inner);

    let values: Vec<u32> = report.samples.iter().map(|s| s.aqi).collect();
    let sparkline = AqiSparkline::new(&values, SCALE_MAX).highlight(values.len().saturating_sub(1));
    frame.render_widget(sparkline, chunks[0]);

    let lines: Vec<Line> = report
        .recent_first()
        .map(|sample| {
            let category = AqiCategory::from_aqi(sample.aqi);
            Line::from(vec![
                Span::styled(
                    sample.date.format("%a %d %b").to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(format!("{:>3}", sample.aqi), aqi_style(sample.aqi)),
                Span::raw(" "),
                Span::styled(sample.mark.glyph(), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(category.label(), Style::default().fg(category.color())),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

/// Renders min/avg/max, the trend direction and the analysis sentence
fn render_statistics(frame: &mut Frame, report: &TrendReport, area: Rect) {
    let summary = report.summary;
    let analysis = report.analysis;
    let trend_color = direction_color(analysis.direction);

    let stat_line = |label: &'static str, value: u32| {
        Line::from(vec![
            Span::styled(format!("  {:<9}", label), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>3}", value),
                aqi_style(value).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                AqiCategory::from_aqi(value).label(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    let lines = vec![
        stat_line("Average", summary.avg),
        stat_line("Minimum", summary.min),
        stat_line("Maximum", summary.max),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::raw(analysis.icon()),
            Span::raw(" "),
            Span::styled(
                analysis.direction.label(),
                Style::default()
                    .fg(trend_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — ", Style::default().fg(Color::DarkGray)),
            Span::styled(analysis.message(), Style::default().fg(trend_color)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", report.analysis_sentence()),
            Style::default().fg(Color::White),
        )),
    ];

    let block = Block::default()
        .title(format!(" Statistics · {} ", report.range.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Renders the weekday and hourly pattern rows side by side
fn render_patterns(frame: &mut Frame, report: &TrendReport, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_pattern_row(frame, " Weekly Pattern ", &report.weekly, columns[0]);
    render_pattern_row(frame, " Hourly Pattern ", &report.hourly, columns[1]);
}

fn render_pattern_row(frame: &mut Frame, title: &str, entries: &[PatternEntry], area: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Label, value and spacing take 13 columns; the bar gets what is left
    let bar_width = block.inner(area).width.saturating_sub(13) as u32;

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let filled = (entry.value.min(SCALE_MAX) * bar_width / SCALE_MAX) as usize;
            Line::from(vec![
                Span::styled(format!(" {:<6}", entry.label), Style::default().fg(Color::White)),
                Span::styled(format!("{:>3}", entry.value), aqi_style(entry.value)),
                Span::raw("  "),
                Span::styled("█".repeat(filled), aqi_style(entry.value)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the AQI category legend
fn render_categories(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = AqiCategory::ALL
        .iter()
        .map(|category| {
            let range = match category.range() {
                (low, Some(high)) => format!("{:>3}-{:<3}", low, high),
                (low, None) => format!("{:>3}+   ", low),
            };
            Line::from(vec![
                Span::styled("  ■ ", Style::default().fg(category.color())),
                Span::styled(range, Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(category.label(), Style::default().fg(category.color())),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" AQI Scale ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the 24-hour forecast in two columns of twelve hours
fn render_forecast(frame: &mut Frame, report: &TrendReport, area: Rect) {
    let latest = report.samples.last().map_or(report.summary.avg, |s| s.aqi);
    let block = Block::default()
        .title(format!(" 24-Hour Forecast · from {} ", latest))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let half = ((report.forecast.len() + 1) / 2).max(1);
    for (entries, column) in report.forecast.chunks(half).zip(columns.iter()) {
        let lines: Vec<Line> = entries.iter().map(forecast_line).collect();
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

fn forecast_line(entry: &ForecastEntry) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}", entry.hour), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(format!("{:>3}", entry.aqi), aqi_style(entry.aqi)),
        Span::raw("  "),
        Span::styled(
            entry.category.label(),
            Style::default().fg(entry.category.color()),
        ),
    ])
}

/// Shown before the first report exists
fn render_placeholder(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Generating trend data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Renders key hints plus either the last error or the data age
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Switch  "),
        Span::styled("c/C", Style::default().fg(Color::Yellow)),
        Span::raw(" City  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(" Range  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" Regenerate  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!(" │ Error: {}", error),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(last_refresh) = app.last_refresh {
        let secs = (Local::now() - last_refresh).num_seconds();
        let freshness = if secs < 60 {
            " │ Generated just now".to_string()
        } else {
            format!(" │ Generated {}m ago", secs / 60)
        };
        spans.push(Span::styled(freshness, Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StartupConfig;
    use crate::trends::ReplaySource;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    /// App with a flat series (every draw at the midpoint) and a fixed date
    fn create_test_app() -> App {
        let mut app = App::with_source(
            StartupConfig::default(),
            Box::new(ReplaySource::new(vec![0.5])),
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        );
        app.refresh_dashboard();
        app
    }

    /// Renders the app and returns the buffer as one string
    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_header_and_tabs_are_rendered() {
        let app = create_test_app();
        let content = render_to_string(&app);
        assert!(content.contains("AQITREND"));
        assert!(content.contains("Delhi"));
        assert!(content.contains("Last 7 days"));
        for tab in Tab::ALL {
            assert!(content.contains(tab.title()), "missing tab {}", tab.title());
        }
    }

    #[test]
    fn test_timeline_lists_newest_first() {
        let app = create_test_app();
        let content = render_to_string(&app);
        assert!(content.contains("Recent History"));
        let newest = content.find("Sat 01 Jun").expect("newest date rendered");
        let oldest = content.find("Sat 25 May").expect("oldest date rendered");
        assert!(newest < oldest);
        assert!(content.contains("180"));
    }

    #[test]
    fn test_statistics_panel() {
        let mut app = create_test_app();
        app.tabs.select(Tab::Statistics);
        let content = render_to_string(&app);
        assert!(content.contains("Average"));
        assert!(content.contains("Minimum"));
        assert!(content.contains("Maximum"));
        assert!(content.contains("Stable"));
        assert!(content.contains(TrendDirection::Stable.message()));
        assert!(!content.contains("Recent History"));
    }

    #[test]
    fn test_patterns_panel() {
        let mut app = create_test_app();
        app.tabs.select(Tab::Patterns);
        let content = render_to_string(&app);
        assert!(content.contains("Weekly Pattern"));
        assert!(content.contains("Hourly Pattern"));
        assert!(content.contains("Mon"));
        assert!(content.contains("Sun"));
        assert!(content.contains("20:00"));
    }

    #[test]
    fn test_categories_panel() {
        let mut app = create_test_app();
        app.tabs.select(Tab::Categories);
        let content = render_to_string(&app);
        assert!(content.contains("Good"));
        assert!(content.contains("Hazardous"));
        assert!(content.contains("301+"));
    }

    #[test]
    fn test_forecast_panel() {
        let mut app = create_test_app();
        app.tabs.select(Tab::Forecast);
        let content = render_to_string(&app);
        assert!(content.contains("24-Hour Forecast"));
        assert!(content.contains("from 180"));
        assert!(content.contains("01:00"));
        assert!(content.contains("12:00"));
        assert!(content.contains("13:00"));
        assert!(content.contains("24:00"));
        assert!(content.contains("Unhealthy"));
        assert!(!content.contains("Recent History"));
    }

    #[test]
    fn test_header_date_follows_report() {
        let mut app = create_test_app();
        let content = render_to_string(&app);
        assert!(content.contains("Sat Jun 01, 2024"));

        let report = app.report.as_mut().unwrap();
        report.generated_for = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let content = render_to_string(&app);
        assert!(content.contains("Fri May 31, 2024"));
        assert!(!content.contains("Sat Jun 01, 2024"));
    }

    #[test]
    fn test_placeholder_before_first_report() {
        let app = App::with_source(
            StartupConfig::default(),
            Box::new(ReplaySource::new(vec![0.5])),
            None,
        );
        let content = render_to_string(&app);
        assert!(content.contains("Generating trend data"));
    }

    #[test]
    fn test_footer_shows_error() {
        let mut app = create_test_app();
        app.last_error = Some("boom".to_string());
        let content = render_to_string(&app);
        assert!(content.contains("Error: boom"));
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let mut app = create_test_app();
        app.show_help = true;
        let content = render_to_string(&app);
        assert!(content.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_direction_colors() {
        assert_eq!(direction_color(TrendDirection::Increasing), Color::Red);
        assert_eq!(direction_color(TrendDirection::Decreasing), Color::Green);
        assert_eq!(direction_color(TrendDirection::Stable), Color::Cyan);
    }
}
