//! sheet-export Common Library
//!
//! スプレッドシート取得処理から切り離した、I/Oを伴わない型とロジック

pub mod error;
pub mod prefix;
pub mod records;
pub mod types;

pub use error::{Error, Result};
pub use prefix::{literal_month_prefix, previous_calendar_month_prefix, PrefixMode, DEFAULT_YEAR};
pub use records::{duplicate_headers, grid_to_records};
pub use types::{RawGrid, Record, RecordSet, SheetMetadata};
