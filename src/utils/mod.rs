pub mod date;
pub mod duration;

pub use date::split_timezone;
pub use duration::parse_duration;
