//! Headless routing: replay fragments through the router and report the
//! resulting state.

use std::sync::mpsc;

use anyhow::Result;
use networth_router::{HistoryLocation, SectionId, SectionRouter};

use crate::config::Config;
use crate::host::PaneDocument;
use crate::presentation::presenters::build_route_report;
use crate::presentation::renderers::console::ConsoleRenderer;
use crate::presentation::view_models::RouteReport;

/// The first fragment is the location at startup; every following fragment is
/// applied as a link activation.
pub fn route(config: &Config, fragments: &[String]) -> Result<RouteReport> {
    let (initial, rest) = match fragments.split_first() {
        Some((first, rest)) => (first.clone(), rest),
        None => (config.start_fragment.clone().unwrap_or_default(), &[][..]),
    };

    let (tx, rx) = mpsc::channel();
    let mut document = PaneDocument::from_panes(&config.panes);
    let location = HistoryLocation::new(initial).with_limit(config.history_limit);
    let mut router = SectionRouter::builder(location)
        .listener(tx)
        .initialize(&mut document)?;

    for fragment in rest {
        let id = SectionId::from_fragment(fragment);
        router.activate_link(id.as_str());
    }

    Ok(build_route_report(&router, rx.try_iter().collect()))
}

pub fn handle(config: &Config, fragments: &[String], renderer: &ConsoleRenderer) -> Result<()> {
    let report = route(config, fragments)?;
    renderer.render_route_report(&report)
}
