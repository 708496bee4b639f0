//! Key loop and event replay glue between the session and the UI.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::sync::broadcast;

use battle_core::{ActionOutcome, BattleEvent, MatchResult, Phase, PlayerAction, Resolution, Side};
use runtime::{Event, MatchSession, SessionEvent, Topic};

use crate::ui;

const LOG_CAPACITY: usize = 200;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    session: MatchSession,
    battle_rx: broadcast::Receiver<Event>,
    session_rx: broadcast::Receiver<Event>,
    log: VecDeque<String>,
    should_quit: bool,
}

impl App {
    /// Wire up a new app around a freshly set-up session.
    ///
    /// The opening resolution seeds the log directly: those events were
    /// published before anyone could subscribe.
    pub fn new(session: MatchSession, opening: Resolution) -> Self {
        let battle_rx = session.subscribe(Topic::Battle);
        let session_rx = session.subscribe(Topic::Session);

        let mut app = Self {
            session,
            battle_rx,
            session_rx,
            log: VecDeque::new(),
            should_quit: false,
        };
        app.push_line(app.approach_line());
        for event in &opening.events {
            if let Some(line) = app.describe_battle_event(event) {
                app.push_line(line);
            }
        }
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self))?;
            if event::poll(POLL_INTERVAL)?
                && let TermEvent::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.on_key(key.code);
            }
        }
        Ok(())
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    pub fn log_lines(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.act(PlayerAction::Attack),
            KeyCode::Char('h') => self.act(PlayerAction::Heal),
            KeyCode::Char('d') => self.act(PlayerAction::Defend),
            KeyCode::Char('r') => self.rematch(),
            KeyCode::Char('x') => self.abandon_run(),
            _ => {}
        }
    }

    fn act(&mut self, action: PlayerAction) {
        match self.session.submit(action) {
            ActionOutcome::Resolved(resolution) => {
                if action == PlayerAction::Heal && resolution.events.is_empty() {
                    self.push_line("You are already at full health.".to_owned());
                }
                self.drain_events();
            }
            // Stale input between turns; nothing to show.
            ActionOutcome::OutOfPhase => {}
            ActionOutcome::MatchOver(_) => {
                self.push_line("The duel is over. Press r for a rematch.".to_owned());
            }
        }
    }

    fn rematch(&mut self) {
        if !self.session.state().phase.is_terminal() {
            return;
        }
        match self.session.rematch() {
            Ok(_) => self.drain_events(),
            Err(error) => {
                tracing::error!(%error, "rematch failed");
                self.push_line(format!("Rematch failed: {error}"));
            }
        }
    }

    /// Abandon the run after a loss: reset progress, start over at 1.
    fn abandon_run(&mut self) {
        if self.session.state().phase != Phase::Lost {
            return;
        }
        if let Err(error) = self.session.abandon_run() {
            tracing::error!(%error, "abandoning run failed");
            self.push_line(format!("Could not reset progress: {error}"));
            return;
        }
        match self.session.rematch() {
            Ok(_) => self.drain_events(),
            Err(error) => {
                tracing::error!(%error, "restart after reset failed");
                self.push_line(format!("Restart failed: {error}"));
            }
        }
    }

    fn drain_events(&mut self) {
        let mut lines = Vec::new();
        while let Ok(event) = self.session_rx.try_recv() {
            if let Event::Session(session_event) = event {
                lines.push(self.describe_session_event(&session_event));
            }
        }
        while let Ok(event) = self.battle_rx.try_recv() {
            if let Event::Battle(battle_event) = event
                && let Some(line) = self.describe_battle_event(&battle_event)
            {
                lines.push(line);
            }
        }
        for line in lines {
            self.push_line(line);
        }
    }

    fn push_line(&mut self, line: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }

    fn enemy_name(&self) -> &str {
        self.session.state().enemy.name()
    }

    fn approach_line(&self) -> String {
        format!(
            "A level {} {} approaches.",
            self.session.state().enemy.level(),
            self.enemy_name()
        )
    }

    fn describe_session_event(&self, event: &SessionEvent) -> String {
        match event {
            SessionEvent::MatchStarted { enemy_level, .. } => {
                format!("A level {} {} approaches.", enemy_level, self.enemy_name())
            }
            SessionEvent::ProgressReset => "The run is abandoned. Progress reset.".to_owned(),
        }
    }

    /// Turn one engine event into a log line; turn handoffs stay silent.
    fn describe_battle_event(&self, event: &BattleEvent) -> Option<String> {
        let enemy = self.enemy_name();
        let line = match event {
            BattleEvent::TurnChanged { .. } => return None,
            BattleEvent::Missed { side: Side::Player } => {
                format!("You swing at the {enemy} and miss.")
            }
            BattleEvent::Missed { side: Side::Enemy } => format!("The {enemy} misses you."),
            BattleEvent::Hit {
                side: Side::Player,
                amount,
                critical,
            } => {
                if *critical {
                    format!("Critical! You strike the {enemy} for {amount}.")
                } else {
                    format!("You strike the {enemy} for {amount}.")
                }
            }
            BattleEvent::Hit {
                side: Side::Enemy,
                amount,
                critical,
            } => {
                if *critical {
                    format!("Critical! The {enemy} hits you for {amount}.")
                } else {
                    format!("The {enemy} hits you for {amount}.")
                }
            }
            BattleEvent::Healed { amount, .. } => format!("You recover {amount} HP."),
            BattleEvent::DefendRaised { .. } => "You brace for the next blow.".to_owned(),
            BattleEvent::Defeated { side: Side::Enemy } => format!("The {enemy} falls!"),
            BattleEvent::Defeated { side: Side::Player } => "You collapse.".to_owned(),
            BattleEvent::LeveledUp { level, .. } => format!("You reach level {level}!"),
            BattleEvent::MatchEnded {
                result: MatchResult::Won,
            } => "Victory!".to_owned(),
            BattleEvent::MatchEnded {
                result: MatchResult::Lost,
            } => "Defeat.".to_owned(),
        };
        Some(line)
    }
}
