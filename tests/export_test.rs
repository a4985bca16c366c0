//! JSON出力の統合テスト

use sheet_export::error::SheetExportError;
use sheet_export::export::export_json;
use sheet_export_common::{grid_to_records, Record};
use tempfile::tempdir;

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn create_test_records() -> Vec<Record> {
    vec![
        record(&[("日付", "2024-03-01"), ("品目", "コーヒー"), ("金額", "450")]),
        record(&[("日付", "2024-03-02"), ("品目", "Café au lait")]),
        record(&[("Date", "2024-03-03"), ("Amount", "1,200"), ("Memo", "\"quoted\"\nnewline")]),
    ]
}

/// 出力したJSONを読み戻すと同じレコード列になる
#[test]
fn test_export_and_parse_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("expense.json");
    let records = create_test_records();

    export_json(&output_path, &records).expect("JSON出力に失敗");

    let content = std::fs::read_to_string(&output_path).expect("読み込み失敗");
    let parsed: Vec<Record> = serde_json::from_str(&content).expect("JSON解析失敗");
    assert_eq!(parsed, records);

    // キー順も保持される
    let keys: Vec<&str> = parsed[0].keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["日付", "品目", "金額"]);
}

/// 非ASCII文字はUTF-8のまま書かれる
#[test]
fn test_export_writes_utf8_literally() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("expense.json");

    export_json(&output_path, &create_test_records()).unwrap();

    let bytes = std::fs::read(&output_path).unwrap();
    let content = String::from_utf8(bytes).expect("UTF-8ではない");
    assert!(content.contains("\"品目\": \"コーヒー\""));
    assert!(content.contains("Café au lait"));
    assert!(!content.contains("\\u"));
    assert!(content.starts_with("[\n    {\n        \"日付\""));
}

/// 既存ファイルは切り詰めて上書きされる
#[test]
fn test_export_truncates_existing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("expense.json");
    std::fs::write(&output_path, "x".repeat(10_000)).unwrap();

    export_json(&output_path, &[record(&[("Date", "2024-03-01")])]).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "[\n    {\n        \"Date\": \"2024-03-01\"\n    }\n]");
}

/// 空のレコード列は空配列
#[test]
fn test_export_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.json");

    export_json(&output_path, &[]).unwrap();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "[]");
}

/// 書き込めないパスはエラー
#[test]
fn test_export_unwritable_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("missing-dir").join("expense.json");

    let result = export_json(&output_path, &create_test_records());

    match result {
        Err(SheetExportError::Export { path, .. }) => assert!(path.contains("missing-dir")),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!output_path.exists());
}

/// 欠けた列はnullではなくキー自体が無い
#[test]
fn test_ragged_rows_have_no_placeholders() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("ragged.json");
    let grid = vec![
        vec!["Date".to_string(), "Amount".to_string(), "Memo".to_string()],
        vec!["2024-03-01".to_string()],
    ];
    let records = grid_to_records(&grid).unwrap();

    export_json(&output_path, &records).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(parsed, serde_json::json!([{ "Date": "2024-03-01" }]));
}
