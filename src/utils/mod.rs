//! Utility functions and helpers

pub mod atomic;
pub mod numeric;
pub mod time;

pub use atomic::{atomic_write_json_lines, atomic_write_with, cleanup_temp_files};
pub use numeric::{percentage, round_one_decimal};
pub use time::{current_time, season_for_date};
