use anyhow::Result;
use networth_router::{HistoryLocation, SectionRouter};

use crate::config::Config;
use crate::host::PaneDocument;
use crate::presentation::presenters::build_section_listing;
use crate::presentation::renderers::console::ConsoleRenderer;

pub fn handle(config: &Config, renderer: &ConsoleRenderer) -> Result<()> {
    let mut document = PaneDocument::from_panes(&config.panes);
    let router = SectionRouter::builder(HistoryLocation::default()).initialize(&mut document)?;

    let listing = build_section_listing(&router, config);
    renderer.render_section_listing(&listing)
}
