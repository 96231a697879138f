//! Shared helpers for dates and text.

mod datetime;
mod string;

pub use datetime::{excel_serial_to_datetime, format_ymd, local_now, parse_date_string};
pub use string::{clean_header, header_matches};
