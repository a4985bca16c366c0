//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    /// ヘッダより列数の多いデータ行（キーを割り当てられない）
    #[error("Row {row} has {cells} cells but header has only {columns} columns")]
    RowWiderThanHeader {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
