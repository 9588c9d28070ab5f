//! Console renderer for the non-interactive commands.

use anyhow::Result;
use is_terminal::IsTerminal;
use networth_router::SectionState;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{RouteReport, SectionListing};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn render_route_report(&self, report: &RouteReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(report),
            OutputFormat::Plain => {
                print!("{}", format_route_report(report, self.color));
                Ok(())
            }
        }
    }

    pub fn render_section_listing(&self, listing: &SectionListing) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(listing),
            OutputFormat::Plain => {
                print!("{}", format_section_listing(listing, self.color));
                Ok(())
            }
        }
    }

    pub fn render_config(&self, config: &Config, path: &Path) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(config),
            OutputFormat::Plain => {
                println!("# {}", path.display());
                print!("{}", toml::to_string_pretty(config)?);
                Ok(())
            }
        }
    }

    pub fn render_config_written(&self, path: &Path) {
        let message = format!("Wrote default config to {}", path.display());
        if self.color {
            println!("{} {}", "✓".green(), message);
        } else {
            println!("{}", message);
        }
    }
}

fn paint_state(state: SectionState, color: bool) -> String {
    let label = format!("{:<6}", state.to_string());
    match (state, color) {
        (SectionState::Active, true) => label.green().bold().to_string(),
        (SectionState::Hidden, true) => label.dimmed().to_string(),
        (_, false) => label,
    }
}

pub fn format_route_report(report: &RouteReport, color: bool) -> String {
    let mut out = String::new();
    let fragment = if report.fragment.is_empty() {
        "(none)"
    } else {
        report.fragment.as_str()
    };

    out.push_str(&format!("Active section: {}\n", report.snapshot.active));
    out.push_str(&format!("Fragment: {}\n", fragment));
    out.push_str("Sections:\n");
    for (section, link) in report.snapshot.sections.iter().zip(&report.snapshot.links) {
        let marker = if link.active { "*" } else { " " };
        out.push_str(&format!(
            "  {} {:<20} {}\n",
            marker,
            section.id.as_str(),
            paint_state(section.state, color)
        ));
    }

    let notified: Vec<&str> = report
        .notifications
        .iter()
        .map(|n| n.section.as_str())
        .collect();
    out.push_str(&format!("Notifications: {}\n", notified.join(" -> ")));
    out
}

pub fn format_section_listing(listing: &SectionListing, color: bool) -> String {
    let mut out = String::new();
    for entry in &listing.sections {
        out.push_str(&format!(
            "{:<20} {:<22} {}\n",
            entry.id, entry.fragment, entry.title
        ));
    }
    for id in &listing.unregistered {
        let line = format!("{:<20} (not registered: no pane configured)", id);
        if color {
            out.push_str(&format!("{}\n", line.yellow()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::SectionEntry;
    use networth_router::{
        LinkSnapshot, NavigationChanged, RouterSnapshot, SectionId, SectionSnapshot,
    };

    fn report() -> RouteReport {
        RouteReport {
            fragment: "#trends".to_string(),
            history: vec![String::new(), "#trends".to_string()],
            snapshot: RouterSnapshot {
                active: SectionId::new("trends"),
                sections: vec![
                    SectionSnapshot {
                        id: SectionId::new("dashboard"),
                        state: SectionState::Hidden,
                    },
                    SectionSnapshot {
                        id: SectionId::new("trends"),
                        state: SectionState::Active,
                    },
                ],
                links: vec![
                    LinkSnapshot {
                        href: "#dashboard".to_string(),
                        active: false,
                    },
                    LinkSnapshot {
                        href: "#trends".to_string(),
                        active: true,
                    },
                ],
            },
            notifications: vec![
                NavigationChanged::new(SectionId::new("dashboard")),
                NavigationChanged::new(SectionId::new("trends")),
            ],
        }
    }

    #[test]
    fn test_format_route_report_plain() {
        let text = format_route_report(&report(), false);
        insta::assert_snapshot!(text, @r###"
        Active section: trends
        Fragment: #trends
        Sections:
            dashboard            hidden
          * trends               active
        Notifications: dashboard -> trends
        "###);
    }

    #[test]
    fn test_format_section_listing_plain() {
        let listing = SectionListing {
            sections: vec![SectionEntry {
                id: "dashboard".to_string(),
                title: "Dashboard".to_string(),
                fragment: "#dashboard".to_string(),
            }],
            unregistered: vec!["trends".to_string()],
        };

        let text = format_section_listing(&listing, false);
        assert_eq!(
            text,
            "dashboard            #dashboard             Dashboard\n\
             trends               (not registered: no pane configured)\n"
        );
    }
}
