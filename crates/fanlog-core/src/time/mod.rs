//! Time source used for timestamps and fragmented file names

mod formatter;

pub use formatter::{
    format_instant, ManualTimeFormatter, SystemTimeFormatter, TimeFormatter, INVALID_TIME_FORMAT,
};
