//! Interactive section view.
//!
//! Builds the pane document from config, wires the chart listeners to the
//! renderer and hands the single router instance to the TUI loop.

use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use networth_router::{HistoryLocation, SectionRouter};

use crate::config::Config;
use crate::host::PaneDocument;
use crate::listeners::{Chart, ChartRefresher};
use crate::presentation::renderers::tui::{App, TuiRenderer};

pub fn handle(config: Config, fragment: Option<String>) -> Result<()> {
    let fragment = fragment
        .or_else(|| config.start_fragment.clone())
        .unwrap_or_default();

    let (redraw_tx, redraw_rx) = mpsc::channel();
    let mut document = PaneDocument::from_panes(&config.panes);
    let location = HistoryLocation::new(fragment).with_limit(config.history_limit);

    let router = SectionRouter::builder(location)
        .listener(ChartRefresher::new(Chart::Dashboard, redraw_tx.clone()))
        .listener(ChartRefresher::new(Chart::Trends, redraw_tx))
        .initialize(&mut document)?;

    log::info!(
        "Starting TUI on '{}' with listeners {:?}",
        router.current_section(),
        router.listener_names()
    );

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let app = App::new(router, config, redraw_rx);
    TuiRenderer::new(tick_rate).run(app)
}
