//! Small helpers shared across the pricing service.

pub mod datetime;
pub mod defaults;
pub mod json;
pub mod numeric;

pub use datetime::{
    DEFAULT_DATE_FORMAT, add_days, format_datetime, parse_datetime, parse_timestamp,
};
pub use defaults::{default_if_absent, false_if_absent, zero_if_absent};
pub use json::to_json_string;
pub use numeric::{decimal_format, round_half_up};
pub use rust_decimal::Decimal;
