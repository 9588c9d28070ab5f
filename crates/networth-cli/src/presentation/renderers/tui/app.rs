//! TUI application state.
//!
//! Owns the router and everything the renderer shows. Kept free of terminal
//! I/O so key handling and frames can be tested with ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use networth_router::{HistoryLocation, SectionRouter};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use std::sync::mpsc::Receiver;

use crate::config::Config;
use crate::listeners::{RedrawCounter, RedrawRequest};
use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::{PaneView, StatusBarView, TabsView};

/// User intent decoded from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Activate the n-th tab (0-based)
    ActivateTab(usize),
    NextTab,
    PreviousTab,
    Back,
    Forward,
    Quit,
}

/// Map a key press to an action. Releases and repeats of modifier chords are
/// ignored.
pub fn action_for_key(key: KeyEvent) -> Option<NavAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(NavAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(NavAction::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            c.to_digit(10).map(|d| NavAction::ActivateTab(d as usize - 1))
        }
        KeyCode::Tab => Some(NavAction::NextTab),
        KeyCode::BackTab => Some(NavAction::PreviousTab),
        KeyCode::Left | KeyCode::Char('h') => Some(NavAction::Back),
        KeyCode::Right | KeyCode::Char('l') => Some(NavAction::Forward),
        _ => None,
    }
}

pub struct App {
    router: SectionRouter<HistoryLocation>,
    config: Config,
    redraw_rx: Receiver<RedrawRequest>,
    redraws: RedrawCounter,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(
        router: SectionRouter<HistoryLocation>,
        config: Config,
        redraw_rx: Receiver<RedrawRequest>,
    ) -> Self {
        let mut app = Self {
            router,
            config,
            redraw_rx,
            redraws: RedrawCounter::default(),
            message: None,
            should_quit: false,
        };
        app.drain_redraws();
        app
    }

    pub fn router(&self) -> &SectionRouter<HistoryLocation> {
        &self.router
    }

    pub fn redraws(&self) -> &RedrawCounter {
        &self.redraws
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn apply(&mut self, action: NavAction) {
        self.message = None;

        match action {
            NavAction::Quit => self.should_quit = true,
            NavAction::ActivateTab(index) => self.activate_tab(index),
            NavAction::NextTab => self.step_tab(1),
            NavAction::PreviousTab => self.step_tab(-1),
            NavAction::Back => {
                if !self.router.history_back() {
                    self.message = Some("No earlier section".to_string());
                }
            }
            NavAction::Forward => {
                if !self.router.history_forward() {
                    self.message = Some("No later section".to_string());
                }
            }
        }

        self.drain_redraws();
    }

    fn activate_tab(&mut self, index: usize) {
        let Some(id) = self.router.registry().ids().nth(index).cloned() else {
            self.message = Some(format!("No section on key {}", index + 1));
            return;
        };
        self.router.activate_link(id.as_str());
    }

    fn step_tab(&mut self, delta: isize) {
        let len = self.router.registry().len() as isize;
        if len == 0 {
            return;
        }
        let current = self
            .router
            .registry()
            .ids()
            .position(|id| id == self.router.current_section())
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.activate_tab(next);
    }

    /// Apply redraw requests raised by chart listeners since the last call.
    pub fn drain_redraws(&mut self) {
        while let Ok(request) = self.redraw_rx.try_recv() {
            self.redraws.record(request);
        }
    }

    pub fn screen(&self) -> ScreenViewModel {
        build_screen_view_model(
            &self.router,
            &self.config,
            &self.redraws,
            self.message.as_deref(),
        )
    }

    /// Layout: [Tabs | Active pane | Status bar]
    pub fn draw(&self, f: &mut Frame) {
        let screen = self.screen();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(f.area());

        f.render_widget(TabsView::new(&screen.tabs), chunks[0]);
        f.render_widget(PaneView::new(&screen.pane), chunks[1]);
        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[2]);
    }
}
