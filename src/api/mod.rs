pub mod bar_chart;
pub mod chart_config;
pub mod label_format;
pub mod nearest_point;
pub mod price_chart;

pub use bar_chart::{AxisTick, BarChart, BarGeometry};
pub use chart_config::{BarChartConfig, DEFAULT_VIEWPORT, PriceChartConfig, measured_or_default};
pub use nearest_point::{ResolvedPoint, nearest_index, nearest_index_bruteforce, resolve_nearest};
pub use price_chart::{PriceChart, ScreenPoint};
