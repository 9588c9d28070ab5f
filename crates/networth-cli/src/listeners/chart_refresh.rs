use anyhow::{Result, anyhow};
use networth_router::{NavigationChanged, NavigationListener};
use std::collections::HashMap;
use std::fmt;
use std::sync::mpsc::Sender;

/// Chart groups that redraw when their section becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chart {
    /// Net-worth breakdown shown on the dashboard
    Dashboard,
    /// Historical series shown on the trends section
    Trends,
}

impl Chart {
    pub const ALL: [Chart; 2] = [Chart::Dashboard, Chart::Trends];

    /// Section whose activation triggers a redraw.
    pub fn section(self) -> &'static str {
        match self {
            Chart::Dashboard => "dashboard",
            Chart::Trends => "trends",
        }
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chart::Dashboard => write!(f, "dashboard charts"),
            Chart::Trends => write!(f, "trends chart"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest {
    pub chart: Chart,
}

/// Redraws applied per chart, kept on the renderer side.
#[derive(Debug, Default, Clone)]
pub struct RedrawCounter {
    counts: HashMap<Chart, usize>,
}

impl RedrawCounter {
    pub fn record(&mut self, request: RedrawRequest) {
        *self.counts.entry(request.chart).or_insert(0) += 1;
    }

    pub fn count(&self, chart: Chart) -> usize {
        self.counts.get(&chart).copied().unwrap_or(0)
    }
}

/// ChartRefresher - asks the renderer to redraw a chart when its section is shown
pub struct ChartRefresher {
    chart: Chart,
    name: String,
    tx: Sender<RedrawRequest>,
}

impl ChartRefresher {
    pub fn new(chart: Chart, tx: Sender<RedrawRequest>) -> Self {
        Self {
            chart,
            name: format!("ChartRefresher({})", chart.section()),
            tx,
        }
    }
}

impl NavigationListener for ChartRefresher {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_navigation(&mut self, event: &NavigationChanged) -> Result<()> {
        if event.section.as_str() != self.chart.section() {
            return Ok(());
        }

        self.tx
            .send(RedrawRequest { chart: self.chart })
            .map_err(|_| anyhow!("renderer is gone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use networth_router::SectionId;
    use std::sync::mpsc;

    fn changed(section: &str) -> NavigationChanged {
        NavigationChanged::new(SectionId::new(section))
    }

    #[test]
    fn test_redraws_only_for_own_section() {
        let (tx, rx) = mpsc::channel();
        let mut refresher = ChartRefresher::new(Chart::Trends, tx);

        refresher.on_navigation(&changed("dashboard")).unwrap();
        refresher.on_navigation(&changed("trends")).unwrap();
        refresher.on_navigation(&changed("trends")).unwrap();

        let requests: Vec<RedrawRequest> = rx.try_iter().collect();
        assert_eq!(
            requests,
            vec![
                RedrawRequest {
                    chart: Chart::Trends
                };
                2
            ]
        );
    }

    #[test]
    fn test_dropped_renderer_is_an_error() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut refresher = ChartRefresher::new(Chart::Dashboard, tx);

        assert!(refresher.on_navigation(&changed("dashboard")).is_err());
        assert!(refresher.on_navigation(&changed("trends")).is_ok());
    }

    #[test]
    fn test_counter_tracks_each_chart() {
        let mut counter = RedrawCounter::default();
        counter.record(RedrawRequest {
            chart: Chart::Trends,
        });
        counter.record(RedrawRequest {
            chart: Chart::Trends,
        });

        assert_eq!(counter.count(Chart::Trends), 2);
        assert_eq!(counter.count(Chart::Dashboard), 0);
    }

    #[test]
    fn test_name_includes_section() {
        let (tx, _rx) = mpsc::channel();
        let refresher = ChartRefresher::new(Chart::Dashboard, tx);
        assert_eq!(refresher.name(), "ChartRefresher(dashboard)");
    }
}
