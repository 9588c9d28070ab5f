//! TUI Renderer
//!
//! Sets up the terminal, then alternates between drawing the current
//! [`App`] frame, decoding key presses into navigation actions and applying
//! chart redraw requests. Navigation runs to completion inside one loop turn.

mod app;

pub use app::{App, NavAction, action_for_key};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn run(self, mut app: App) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut App,
    ) -> Result<()> {
        while !app.should_quit() {
            terminal.draw(|f| app.draw(f))?;

            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
                && let Some(action) = action_for_key(key)
            {
                log::debug!("Key action {:?}", action);
                app.apply(action);
            }

            app.drain_redraws();
        }

        Ok(())
    }
}
