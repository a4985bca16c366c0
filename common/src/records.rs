//! セル範囲からレコードへの変換
//!
//! 先頭行をヘッダ（フィールド名）として扱い、2行目以降を
//! ヘッダ名→セル値のマッピングに変換する。

use crate::error::{Error, Result};
use crate::types::{RawGrid, Record, RecordSet};

/// セル範囲をレコード列に変換
///
/// - 空のグリッドは空のレコード列になる
/// - ヘッダより短い行は、足りない末尾のキーを持たないレコードになる
/// - ヘッダより長い行はキーを割り当てられないためエラー
/// - ヘッダ名が重複した場合は後の列の値で上書きされる（位置は最初の列のまま）
pub fn grid_to_records(grid: &RawGrid) -> Result<RecordSet> {
    let Some((header, rows)) = grid.split_first() else {
        return Ok(Vec::new());
    };

    let duplicates = duplicate_headers(header);
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "duplicate header names, later columns overwrite earlier ones");
    }

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            if row.len() > header.len() {
                // シート上の行番号（1始まり、ヘッダが1行目）
                return Err(Error::RowWiderThanHeader {
                    row: idx + 2,
                    cells: row.len(),
                    columns: header.len(),
                });
            }
            Ok(row_to_record(header, row))
        })
        .collect()
}

fn row_to_record(header: &[String], row: &[String]) -> Record {
    header
        .iter()
        .zip(row)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// 重複しているヘッダ名（出現順、重複なし）
pub fn duplicate_headers(header: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for name in header {
        if !seen.insert(name.as_str()) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    duplicates
}
