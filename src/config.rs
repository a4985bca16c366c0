use crate::error::{Result, SheetExportError};
use std::fmt;
use std::path::Path;

/// スプレッドシートID
pub const SPREADSHEET_ID_ENV: &str = "SPREAD_SHEET_ID";
/// サービスアカウントJSON（本文そのもの、またはファイルパス）
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// Sheets APIのベースURL（テスト・プロキシ用）
pub const API_BASE_ENV: &str = "SHEETS_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// 実行時設定
///
/// 起動時に一度だけ環境変数から組み立て、クライアント生成時に渡す。
#[derive(Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    /// サービスアカウントJSON本文
    pub credentials: String,
    pub api_base: String,
}

impl Config {
    /// `.env` を読み込んだうえで環境変数から設定を作る
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            // .envが無いのは正常
            if !e.not_found() {
                return Err(SheetExportError::Config(format!(".env の読み込みに失敗: {}", e)));
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let spreadsheet_id = lookup(SPREADSHEET_ID_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or(SheetExportError::MissingEnv(SPREADSHEET_ID_ENV))?;

        let raw_credentials = lookup(CREDENTIALS_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or(SheetExportError::MissingEnv(CREDENTIALS_ENV))?;
        let credentials = resolve_credentials(&raw_credentials)?;

        let api_base = lookup(API_BASE_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            spreadsheet_id: spreadsheet_id.trim().to_string(),
            credentials,
            api_base,
        })
    }
}

// 認証情報は表示しない
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("credentials", &"***")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// JSON本文ならそのまま、既存ファイルのパスならその内容を返す
fn resolve_credentials(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }

    let path = Path::new(trimmed);
    if path.is_file() {
        return Ok(std::fs::read_to_string(path)?);
    }

    Err(SheetExportError::Credentials(format!(
        "{} はJSONでも既存ファイルのパスでもありません",
        CREDENTIALS_ENV
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (SPREADSHEET_ID_ENV, " sheet-id-123 "),
            (CREDENTIALS_ENV, r#"{"client_email":"a@b"}"#),
        ]))
        .unwrap();

        assert_eq!(config.spreadsheet_id, "sheet-id-123");
        assert_eq!(config.credentials, r#"{"client_email":"a@b"}"#);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_api_base_override() {
        let config = Config::from_lookup(lookup_from(&[
            (SPREADSHEET_ID_ENV, "id"),
            (CREDENTIALS_ENV, "{}"),
            (API_BASE_ENV, "http://127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_missing_spreadsheet_id() {
        let result = Config::from_lookup(lookup_from(&[(CREDENTIALS_ENV, "{}")]));
        assert!(matches!(result, Err(SheetExportError::MissingEnv(SPREADSHEET_ID_ENV))));
    }

    #[test]
    fn test_blank_credentials_is_missing() {
        let result = Config::from_lookup(lookup_from(&[
            (SPREADSHEET_ID_ENV, "id"),
            (CREDENTIALS_ENV, "   "),
        ]));
        assert!(matches!(result, Err(SheetExportError::MissingEnv(CREDENTIALS_ENV))));
    }

    #[test]
    fn test_credentials_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service-account.json");
        std::fs::write(&path, r#"{"client_email":"file@example"}"#).unwrap();

        let config = Config::from_lookup(lookup_from(&[
            (SPREADSHEET_ID_ENV, "id"),
            (CREDENTIALS_ENV, path.to_str().unwrap()),
        ]))
        .unwrap();

        assert!(config.credentials.contains("file@example"));
    }

    #[test]
    fn test_credentials_neither_json_nor_file() {
        let result = Config::from_lookup(lookup_from(&[
            (SPREADSHEET_ID_ENV, "id"),
            (CREDENTIALS_ENV, "/nonexistent/credentials.json"),
        ]));
        assert!(matches!(result, Err(SheetExportError::Credentials(_))));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = Config {
            spreadsheet_id: "id".to_string(),
            credentials: "SECRET-KEY".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("SECRET-KEY"));
        assert!(debug.contains("***"));
    }
}
