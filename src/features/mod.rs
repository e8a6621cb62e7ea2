//! Feature modules - downstream consumers of an extracted grid
//!
//! - `attendance`: presence/absence aggregation over one column
//! - `csv`: in-memory CSV rendering (feature `csv-render`)

pub mod attendance;

#[cfg(feature = "csv-render")]
pub mod csv;

// Re-export public API
pub use attendance::{count_attendance, AttendanceCount};

#[cfg(feature = "csv-render")]
pub use self::csv::grid_to_csv;
