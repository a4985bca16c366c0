use crate::error::Result;
use crate::export::DEFAULT_OUTPUT;
use chrono::NaiveDate;
use clap::Parser;
use sheet_export_common::{PrefixMode, DEFAULT_YEAR};
use std::path::PathBuf;

/// 引数なしで実行すると、前月分のシートを expense.json に出力する
#[derive(Parser, Debug)]
#[command(name = "sheet-export")]
#[command(about = "月次シートをGoogleスプレッドシートから取得しJSONへ出力", long_about = None)]
pub struct Cli {
    /// 出力JSONファイル
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 接頭辞に使う年（4桁）
    #[arg(long, default_value = DEFAULT_YEAR)]
    pub year: String,

    /// 前の暦月で接頭辞を作る（1月なら前年12月）
    #[arg(long)]
    pub calendar: bool,

    /// 接頭辞を直接指定（年・月の計算をしない）
    #[arg(long, conflicts_with_all = ["calendar", "year"])]
    pub prefix: Option<String>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn prefix_mode(&self) -> PrefixMode {
        if self.calendar {
            PrefixMode::Calendar
        } else {
            PrefixMode::Literal {
                year: self.year.clone(),
            }
        }
    }

    /// シート名の接頭辞
    pub fn resolve_prefix(&self, today: NaiveDate) -> Result<String> {
        match &self.prefix {
            Some(prefix) => Ok(prefix.clone()),
            None => Ok(self.prefix_mode().prefix_for(today)?),
        }
    }
}
