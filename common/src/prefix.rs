//! 月次シート名の接頭辞
//!
//! シート名は `YYYYMM` で始まる。既定では固定の年リテラルに
//! 「今月 - 1」を2桁で付ける。1月に実行すると月が `00` になる点に注意
//! （前年12月には繰り下がらない）。繰り下げが必要な場合は
//! [`PrefixMode::Calendar`] を明示的に選ぶ。

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// 既定の年リテラル
pub const DEFAULT_YEAR: &str = "2024";

/// 接頭辞の計算方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixMode {
    /// 固定の年 + (今月 - 1)。1月は `00` になる
    Literal { year: String },
    /// 前の暦月（1月なら前年12月）
    Calendar,
}

impl Default for PrefixMode {
    fn default() -> Self {
        PrefixMode::Literal {
            year: DEFAULT_YEAR.to_string(),
        }
    }
}

impl PrefixMode {
    /// 指定日を基準に接頭辞を計算
    pub fn prefix_for(&self, today: NaiveDate) -> Result<String> {
        match self {
            PrefixMode::Literal { year } => {
                validate_year(year)?;
                Ok(literal_month_prefix(year, today))
            }
            PrefixMode::Calendar => Ok(previous_calendar_month_prefix(today)),
        }
    }
}

/// `year` + 2桁の (今月 - 1)
pub fn literal_month_prefix(year: &str, today: NaiveDate) -> String {
    format!("{}{:02}", year, today.month() - 1)
}

/// 前の暦月の `YYYYMM`
pub fn previous_calendar_month_prefix(today: NaiveDate) -> String {
    let (year, month) = match today.month() {
        1 => (today.year() - 1, 12),
        m => (today.year(), m - 1),
    };
    format!("{:04}{:02}", year, month)
}

fn validate_year(year: &str) -> Result<()> {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::Config(format!("year must be four digits: {:?}", year)))
    }
}
