//! Derived views over the persisted records.
//!
//! Everything here is a pure transform of a storage snapshot: callers
//! load the full record set, hand it in, and render the result. Nothing
//! is cached between invocations, so a fresh call always reflects the
//! store as it was read.

mod calendar;
mod chart;
mod progression;
mod records;
mod session;
mod trends;

pub use calendar::{marked_dates, CalendarMark};
pub use chart::{palette_color, ChartSeries, Dataset, CHART_COLORS, PRIMARY_COLOR};
pub use progression::exercise_progression;
pub use records::personal_records;
pub use session::reconcile_session;
pub use trends::{measurement_trends, TrendCharts};
