pub mod categorical;
pub mod change_detection;
pub mod palette;
pub mod presence;
pub mod row;
pub mod time_series;
pub mod timestamp;
pub mod value;

pub use categorical::{CategoricalSeries, UNKNOWN_CATEGORY, prepare_categorical};
pub use change_detection::RefreshPolicy;
pub use palette::{SERIES_PALETTE, palette_color};
pub use presence::MissingValuePolicy;
pub use row::{Dataset, Row};
pub use time_series::{TimePoint, prepare_time_points, prepare_time_series};
pub use timestamp::parse_timestamp;
