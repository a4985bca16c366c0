//! Google Sheets API v4 クライアント

use super::auth::ServiceAccount;
use super::{range_ref, SheetService};
use crate::config::Config;
use crate::error::{Result, SheetExportError};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sheet_export_common::RawGrid;

/// スプレッドシートのメタデータ応答（必要な項目のみ）
#[derive(Debug, Deserialize)]
struct SpreadsheetResponse {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

/// values.get 応答。値の無い範囲では `values` が省略される
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

pub struct GoogleSheetsClient {
    http: reqwest::Client,
    api_base: Url,
    access_token: String,
}

impl GoogleSheetsClient {
    /// 設定のサービスアカウントで認証してクライアントを作る
    pub async fn connect(config: &Config) -> Result<Self> {
        let account = ServiceAccount::try_from_str(&config.credentials)?;
        let http = reqwest::Client::new();

        tracing::debug!(client_email = %account.client_email, "fetching access token");
        let token = account.fetch_access_token(&http).await?;
        tracing::debug!(expires_in = token.expires_in, "access token acquired");

        Self::with_token(http, &config.api_base, token.access_token)
    }

    /// 取得済みのアクセストークンで作る
    pub fn with_token(http: reqwest::Client, api_base: &str, access_token: String) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| SheetExportError::Config(format!("APIのURLが不正 {}: {}", api_base, e)))?;
        Ok(Self {
            http,
            api_base,
            access_token,
        })
    }

    /// `{base}/v4/spreadsheets/{id}/...` を組み立てる（各セグメントはパーセントエンコード）
    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, String> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| format!("ベースURLにパスを追加できません: {}", self.api_base))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets"])
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, String> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("{}: {}", status, body.trim()));
        }

        response.json::<T>().await.map_err(|e| e.to_string())
    }
}

impl SheetService for GoogleSheetsClient {
    async fn list_sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let url = self
            .endpoint(&[spreadsheet_id])
            .map_err(SheetExportError::Service)?;
        let spreadsheet: SpreadsheetResponse = self
            .get_json(url, &[("fields", "sheets.properties.title")])
            .await
            .map_err(SheetExportError::Service)?;

        Ok(spreadsheet
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    async fn get_range(&self, spreadsheet_id: &str, sheet_title: &str, cells: &str) -> Result<RawGrid> {
        let range = range_ref(sheet_title, cells);
        let to_error = |message: String| SheetExportError::RangeFetch {
            sheet: sheet_title.to_string(),
            message,
        };

        let url = self
            .endpoint(&[spreadsheet_id, "values", &range])
            .map_err(to_error)?;
        let value_range: ValueRange = self.get_json(url, &[]).await.map_err(to_error)?;

        Ok(value_range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }
}

/// セル値を文字列に（既定の FORMATTED_VALUE では常に文字列で返る）
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
