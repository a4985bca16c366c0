//! スプレッドシートサービス連携
//!
//! 収集処理が必要とするのは「シート名の一覧」と「セル範囲の取得」の2つだけ。
//! 実装は Google Sheets API v4（[`GoogleSheetsClient`]）。テストでは
//! メモリ上の実装に差し替える。

pub mod auth;
pub mod client;

pub use auth::{AccessToken, ServiceAccount};
pub use client::GoogleSheetsClient;

use crate::error::Result;
use sheet_export_common::RawGrid;

/// スプレッドシートサービス
#[allow(async_fn_in_trait)]
pub trait SheetService {
    /// シート名を返却順のまま列挙
    async fn list_sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>>;

    /// シート `sheet_title` のセル範囲 `cells`（例: `A1:E`）を取得
    async fn get_range(&self, spreadsheet_id: &str, sheet_title: &str, cells: &str) -> Result<RawGrid>;
}

/// シート名付きのA1表記範囲 (`'名前'!A1:E`)
///
/// シート名中の `'` は `''` にエスケープする。
pub fn range_ref(sheet_title: &str, cells: &str) -> String {
    format!("'{}'!{}", sheet_title.replace('\'', "''"), cells)
}
