//! Rendering: HP gauges, battle log, status footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Gauge, List, ListItem, Paragraph};

use battle_core::{Combatant, Phase};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_combatants(frame, app, header);
    render_log(frame, app, body);
    render_footer(frame, app, footer);
}

fn render_combatants(frame: &mut Frame, app: &App, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let state = app.session().state();
    render_gauge(frame, &state.player, Color::Green, left);
    render_gauge(frame, &state.enemy, Color::Red, right);
}

fn render_gauge(frame: &mut Frame, combatant: &Combatant, color: Color, area: Rect) {
    let max_hp = combatant.stats().max_hp;
    let mut title = format!("{}  Lv {}", combatant.name(), combatant.level());
    if combatant.is_defending() {
        title.push_str("  [defending]");
    }

    let gauge = Gauge::default()
        .block(Block::bordered().title(title))
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(combatant.hp()) / f64::from(max_hp))
        .label(format!("{}/{}", combatant.hp(), max_hp));
    frame.render_widget(gauge, area);
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<&str> = app.log_lines().collect();
    let skip = lines.len().saturating_sub(visible);
    let items: Vec<ListItem> = lines[skip..]
        .iter()
        .map(|line| ListItem::new(Line::from(*line)))
        .collect();

    let list = List::new(items).block(Block::bordered().title("Battle log"));
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let phase = app.session().state().phase;
    let help = match phase {
        Phase::PlayerTurn => "[a] attack  [h] heal  [d] defend  [q] quit",
        Phase::Won => "[r] rematch  [q] quit",
        Phase::Lost => "[r] rematch  [x] abandon run  [q] quit",
        Phase::Setup | Phase::EnemyTurn => "[q] quit",
    };

    let best = app
        .session()
        .best_level()
        .map(|level| format!("best level {level}"))
        .unwrap_or_else(|_| "best level ?".to_owned());

    let status = match phase {
        Phase::Won => "VICTORY".green().bold(),
        Phase::Lost => "DEFEAT".red().bold(),
        _ => "your move".into(),
    };

    let line = Line::from(vec![
        status,
        "  ·  ".into(),
        best.into(),
        "  ·  ".into(),
        help.into(),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::bordered()),
        area,
    );
}
