use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetExportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("環境変数 {0} が設定されていません（.env でも指定できます）")]
    MissingEnv(&'static str),

    #[error("サービスアカウント情報が不正: {0}")]
    Credentials(String),

    #[error("認証エラー: {0}")]
    Auth(String),

    #[error("シート一覧の取得に失敗: {0}")]
    Service(String),

    #[error("シート「{sheet}」の取得に失敗: {message}")]
    RangeFetch { sheet: String, message: String },

    #[error("出力ファイルに書き込めません {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] sheet_export_common::Error),
}

pub type Result<T> = std::result::Result<T, SheetExportError>;
