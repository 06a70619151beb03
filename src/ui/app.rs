//! UI-local state: latest roster snapshot, list selection, quit flag.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::watch;

use crate::ui::roster::RosterState;

/// Cards to jump per PageUp/PageDown press.
const PAGE_STEP: usize = 5;

pub struct App {
    roster_rx: watch::Receiver<RosterState>,
    roster: RosterState,
    selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(roster_rx: watch::Receiver<RosterState>) -> Self {
        let roster = roster_rx.borrow().clone();
        Self {
            roster_rx,
            roster,
            selected: 0,
            should_quit: false,
        }
    }

    /// Pull the latest published roster state, if it changed.
    pub fn on_tick(&mut self) {
        if self.roster_rx.has_changed().unwrap_or(false) {
            self.roster = self.roster_rx.borrow_and_update().clone();
            self.clamp_selection();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_forward(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_back(1),
            KeyCode::PageDown => self.select_forward(PAGE_STEP),
            KeyCode::PageUp => self.select_back(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => {
                self.selected = self.roster.characters.len().saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn select_forward(&mut self, step: usize) {
        self.selected = self.selected.saturating_add(step);
        self.clamp_selection();
    }

    fn select_back(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.roster.characters.len().saturating_sub(1));
    }
}
