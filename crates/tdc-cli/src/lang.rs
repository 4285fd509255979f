//! Output languages and their labels.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ko,
    /// Korean with Sino-Korean words written in hanja.
    KoHanja,
    /// Traditional Chinese.
    Zh,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::En => "en",
            Self::Ko => "ko",
            Self::KoHanja => "ko-hanja",
            Self::Zh => "zh",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ko" => Ok(Self::Ko),
            "ko-hanja" => Ok(Self::KoHanja),
            "zh" => Ok(Self::Zh),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Error type for unknown language strings.
#[derive(Debug, Clone)]
pub struct UnknownLanguage(String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown language: {} (expected en, ko, ko-hanja or zh)",
            self.0
        )
    }
}

impl std::error::Error for UnknownLanguage {}

/// Which side of the home border a line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Inside,
    Outside,
}

impl Language {
    /// Report title and the "N countries visited until DATE" line.
    pub fn header(self, countries: usize, as_of: NaiveDate) -> (&'static str, String) {
        match self {
            Self::En => (
                "Travel Day Counter",
                format!("{countries} countries visited until {as_of}"),
            ),
            Self::Ko => (
                "방문한 나라에 체류 기간",
                format!("{as_of}까지 방문한 {countries}개의 국가"),
            ),
            Self::KoHanja => (
                "訪問한 나라에 滯留期間",
                format!("{as_of}까지 訪問한 {countries}個의 國家"),
            ),
            Self::Zh => (
                "到訪國家停留紀錄",
                format!("至{as_of}已訪問{countries}個國家"),
            ),
        }
    }

    /// One line of the home/abroad section. `years` and `pct` arrive
    /// already rounded for display.
    pub fn home_line(self, side: Side, name: &str, days: i64, years: &str, pct: &str) -> String {
        match (self, side) {
            (Self::En, Side::Inside) => {
                format!("Inside {name}: {days} days ({years} years, {pct}%)")
            }
            (Self::En, Side::Outside) => {
                format!("Outside {name}: {days} days ({years} years, {pct}%)")
            }
            (Self::Ko, Side::Inside) => format!("{name} 내: {days} 일 ({years} 년, {pct}%)"),
            (Self::Ko, Side::Outside) => format!("{name} 외: {days} 일 ({years} 년, {pct}%)"),
            (Self::KoHanja, Side::Inside) => format!("{name} 內: {days} 日 ({years} 年, {pct}%)"),
            (Self::KoHanja, Side::Outside) => {
                format!("{name} 外: {days} 日 ({years} 年, {pct}%)")
            }
            (Self::Zh, Side::Inside) => format!("{name}內 {days} 天（{years}年，{pct}%）"),
            (Self::Zh, Side::Outside) => format!("{name}外 {days} 天（{years}年，{pct}%）"),
        }
    }

    /// The residency duration line.
    pub fn residency_line(self, name: &str, years: u32, days: i64) -> String {
        match self {
            Self::En => format!("Residency in {name}: {years} year(s) {days} day(s)"),
            Self::Ko => format!("{name}에 합법적 거주기간: {years} 년 {days} 일"),
            Self::KoHanja => format!("{name}에 合法的居住期間: {years} 年 {days} 日"),
            Self::Zh => format!("{name}合法居留時間 {years} 年 {days} 天"),
        }
    }

    /// Shown instead of the duration when residency starts after the as-of date.
    pub fn residency_pending_line(self, name: &str, begin: NaiveDate) -> String {
        match self {
            Self::En => format!("Residency in {name}: not started (begins {begin})"),
            Self::Ko => format!("{name}에 합법적 거주기간: 시작 전 ({begin}부터)"),
            Self::KoHanja => format!("{name}에 合法的居住期間: 始作 前 ({begin}부터)"),
            Self::Zh => format!("{name}合法居留時間 尚未開始（{begin}起）"),
        }
    }

    /// Country table column titles.
    pub const fn table_headers(self) -> [&'static str; 6] {
        match self {
            Self::En => ["COUNTRY", "DAYS", "%", "RANK", "FIRST VISIT", "LAST VISIT"],
            Self::Ko => ["국가", "일수", "퍼센트", "순위", "처음 방문 날짜", "마지막 방문 날짜"],
            Self::KoHanja => ["國家", "日數", "퍼센트", "順位", "처음 訪問 날짜", "마지막 訪問 날짜"],
            Self::Zh => ["國家", "天數", "百分比", "排名", "最初訪問日", "最近訪問日"],
        }
    }

    /// Suffix appended to rank numbers.
    pub const fn rank_suffix(self) -> &'static str {
        match self {
            Self::En | Self::Zh => "",
            Self::Ko => "위",
            Self::KoHanja => "位",
        }
    }

    /// Label of the grouped short-table row.
    pub const fn other_label(self) -> &'static str {
        match self {
            Self::En => "OTHER",
            Self::Ko => "기타",
            Self::KoHanja | Self::Zh => "其他",
        }
    }

    /// Title of the year-by-year section.
    pub const fn chrono_title(self) -> &'static str {
        match self {
            Self::En => "Chronological Report",
            Self::Ko => "연대순 방문 기록",
            Self::KoHanja => "年代順訪問記錄",
            Self::Zh => "年度訪問紀錄",
        }
    }
}
