//! 月次シート収集
//!
//! 接頭辞に一致するシートを返却順に1枚ずつ取得し、レコードへ変換して連結する。
//! シート単位の失敗はログに出して記録し、残りのシートの処理を続ける。

use crate::error::{Result, SheetExportError};
use crate::sheets::SheetService;
use sheet_export_common::{grid_to_records, RecordSet, SheetMetadata};

/// 各シートから取得するセル範囲（A〜E列の全行）
pub const SHEET_CELLS: &str = "A1:E";

/// 取得に失敗したシート
#[derive(Debug)]
pub struct SheetFailure {
    pub sheet: String,
    pub error: SheetExportError,
}

/// 収集結果
#[derive(Debug, Default)]
pub struct CollectReport {
    /// シート順・行順に連結したレコード
    pub records: RecordSet,
    /// 接頭辞に一致したシート（失敗したものも含む）
    pub matched_sheets: Vec<String>,
    pub failures: Vec<SheetFailure>,
}

impl CollectReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct SheetCollector<S> {
    service: S,
}

impl<S: SheetService> SheetCollector<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// 接頭辞に一致するシートを収集
    ///
    /// シート一覧の取得失敗はそのままエラーとして返す。
    pub async fn collect(&self, spreadsheet_id: &str, prefix: &str) -> Result<CollectReport> {
        let sheets: Vec<SheetMetadata> = self
            .service
            .list_sheet_titles(spreadsheet_id)
            .await?
            .into_iter()
            .map(SheetMetadata::new)
            .filter(|sheet| sheet.matches_prefix(prefix))
            .collect();

        tracing::debug!(prefix, matched = sheets.len(), "selected sheets");

        let mut report = CollectReport::default();
        for sheet in sheets {
            match self.collect_sheet(spreadsheet_id, &sheet).await {
                Ok(records) => {
                    tracing::debug!(sheet = %sheet.title, records = records.len(), "sheet collected");
                    report.records.extend(records);
                }
                Err(error) => {
                    tracing::warn!(sheet = %sheet.title, %error, "skipping sheet");
                    report.failures.push(SheetFailure {
                        sheet: sheet.title.clone(),
                        error,
                    });
                }
            }
            report.matched_sheets.push(sheet.title);
        }

        Ok(report)
    }

    /// 1シート分。変換に失敗した場合は部分的なレコードも返さない
    async fn collect_sheet(&self, spreadsheet_id: &str, sheet: &SheetMetadata) -> Result<RecordSet> {
        let grid = self
            .service
            .get_range(spreadsheet_id, &sheet.title, SHEET_CELLS)
            .await?;
        Ok(grid_to_records(&grid)?)
    }
}
