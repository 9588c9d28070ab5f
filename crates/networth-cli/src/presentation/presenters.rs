//! Presenters: pure functions from router state to ViewModels.

use crate::config::Config;
use crate::listeners::{Chart, RedrawCounter};
use crate::presentation::view_models::{
    PaneViewModel, RouteReport, ScreenViewModel, SectionEntry, SectionListing,
    StatusBarViewModel, TabViewModel,
};
use networth_router::{
    HistoryLocation, KNOWN_SECTIONS, LocationProvider, NavigationChanged, SectionRouter,
};

fn section_summary(id: &str) -> &'static str {
    match id {
        "dashboard" => "Net worth, salary and savings at a glance.",
        "assets-liabilities" => "Recorded assets and liabilities.",
        "trends" => "Net worth over time.",
        _ => "",
    }
}

pub fn build_screen_view_model(
    router: &SectionRouter<HistoryLocation>,
    config: &Config,
    redraws: &RedrawCounter,
    message: Option<&str>,
) -> ScreenViewModel {
    let tabs = router
        .registry()
        .iter()
        .enumerate()
        .map(|(i, section)| TabViewModel {
            title: config.title_for(section.id().as_str()),
            href: section.href().to_string(),
            hotkey: char::from_digit((i + 1) as u32, 10).unwrap_or(' '),
            active: section.link_active(),
        })
        .collect();

    let current = router.current_section().as_str();
    let mut lines = vec![section_summary(current).to_string()];
    for chart in Chart::ALL {
        if chart.section() == current {
            lines.push(format!(
                "{} redrawn {} time(s)",
                chart,
                redraws.count(chart)
            ));
        }
    }

    let location = router.location();
    ScreenViewModel {
        tabs,
        pane: PaneViewModel {
            title: config.title_for(current),
            lines,
        },
        status_bar: StatusBarViewModel {
            fragment: location.fragment().to_string(),
            can_go_back: location.can_go_back(),
            can_go_forward: location.can_go_forward(),
            message: message.map(str::to_string),
        },
    }
}

pub fn build_route_report(
    router: &SectionRouter<HistoryLocation>,
    notifications: Vec<NavigationChanged>,
) -> RouteReport {
    let location = router.location();
    RouteReport {
        fragment: location.fragment().to_string(),
        history: location.entries().to_vec(),
        snapshot: router.snapshot(),
        notifications,
    }
}

pub fn build_section_listing(
    router: &SectionRouter<HistoryLocation>,
    config: &Config,
) -> SectionListing {
    let sections = router
        .registry()
        .iter()
        .map(|section| SectionEntry {
            id: section.id().to_string(),
            title: config.title_for(section.id().as_str()),
            fragment: section.href().to_string(),
        })
        .collect();

    let unregistered = KNOWN_SECTIONS
        .iter()
        .filter(|id| !router.registry().contains(id))
        .map(|id| id.to_string())
        .collect();

    SectionListing {
        sections,
        unregistered,
    }
}
