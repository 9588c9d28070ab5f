mod chart_refresh;

pub use chart_refresh::{Chart, ChartRefresher, RedrawCounter, RedrawRequest};
