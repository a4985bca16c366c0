use chrono::Local;
use clap::Parser;
use sheet_export::collector::SheetCollector;
use sheet_export::sheets::GoogleSheetsClient;
use sheet_export::{cli, config, error, export, logging};
use cli::Cli;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::from_env()?;
    let prefix = cli.resolve_prefix(Local::now().date_naive())?;

    println!("📊 sheet-export - 月次シート出力\n");

    // 1. 認証
    println!("[1/3] Google Sheets APIに接続中...");
    let client = GoogleSheetsClient::connect(&config).await?;
    println!("✔ 接続完了\n");

    // 2. 収集
    println!("[2/3] 「{}」で始まるシートを取得中...", prefix);
    let collector = SheetCollector::new(client);
    let report = collector.collect(&config.spreadsheet_id, &prefix).await?;
    println!(
        "✔ {}シート中{}シートから{}件を取得\n",
        report.matched_sheets.len(),
        report.matched_sheets.len() - report.failures.len(),
        report.records.len()
    );

    // 3. 出力
    println!("[3/3] 結果を保存中...");
    export::export_json(&cli.output, &report.records)?;
    println!("✔ 結果を保存: {}", cli.output.display());

    if report.has_failures() {
        println!("\n⚠ 取得できなかったシート: {}件", report.failures.len());
        for failure in &report.failures {
            println!("  - {}: {}", failure.sheet, failure.error);
        }
    }

    println!("\n✅ 完了");
    Ok(())
}
