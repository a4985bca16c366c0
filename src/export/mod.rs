pub mod json;

pub use json::{export_json, write_json};

/// 既定の出力ファイル名
pub const DEFAULT_OUTPUT: &str = "expense.json";
