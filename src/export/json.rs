//! JSON出力
//!
//! インデント4スペース、非ASCII文字はエスケープせずそのまま書く。
//! 一時ファイル経由の置き換えはしないため、書き込み中に落ちると
//! 途中までのファイルが残りうる。

use crate::error::{Result, SheetExportError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sheet_export_common::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// レコード列をJSONとして書き出す
pub fn write_json<W: Write>(writer: W, data: &[Record]) -> serde_json::Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)
}

/// ファイルへ出力（既存内容は切り詰める）
pub fn export_json(path: &Path, data: &[Record]) -> Result<()> {
    let to_error = |source: std::io::Error| SheetExportError::Export {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, data).map_err(|e| {
        if e.is_io() {
            to_error(e.into())
        } else {
            SheetExportError::JsonParse(e)
        }
    })?;
    writer.flush().map_err(to_error)?;
    Ok(())
}
