pub mod band_scale;
pub mod mock_data;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use band_scale::BandScale;
pub use mock_data::apple_stock_sample;
pub use primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
pub use scale::LinearScale;
pub use series::{CategorySeries, Series};
pub use time_scale::TimeScale;
pub use types::{CategoryPoint, DataPoint, Viewport};
pub use value_scale::{ValueScale, ValueScaleTuning};
