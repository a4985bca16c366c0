//! シートデータの型定義
//!
//! - SheetMetadata: スプレッドシート内のシート（タブ）情報
//! - RawGrid: 取得したセル範囲（先頭行がヘッダ）
//! - Record: 1行分をヘッダ名→セル値に変換したもの
//! - RecordSet: 全シート分のRecordを順序通りに連結したもの

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// シートのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMetadata {
    pub title: String,
}

impl SheetMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// タイトルが接頭辞で始まるか（大文字小文字を区別）
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.title.starts_with(prefix)
    }
}

/// 取得したセル範囲（行の並び、各行はセル文字列の並び）
pub type RawGrid = Vec<Vec<String>>;

/// 1行分のレコード
///
/// キー順はヘッダの列順を保持する。行ごとにキー集合が異なってもよい。
pub type Record = IndexMap<String, String>;

/// 全シート分のレコード
pub type RecordSet = Vec<Record>;
