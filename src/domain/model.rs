use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 支援的顯示語系，`Zh` 為預設
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::Zh, Locale::En];

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// 語系切換按鈕的行為：在兩個語系之間來回
    pub const fn toggled(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    /// 不分大小寫，接受 `zh-CN`、`en_US` 這類帶地區的標籤
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| format!("unsupported locale '{}', expected zh or en", s))
    }
}

/// 已登入使用者的本地紀錄，序列化格式與前端 `localStorage["user"]` 相同
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub phone: String,
    /// 剩餘可用分鐘數
    pub remaining_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_info: Option<PackageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,
    pub total_time: u32,
    pub used_time: u32,
    pub expiry_date: NaiveDate,
}

impl PackageInfo {
    pub fn remaining_minutes(&self) -> u32 {
        self.total_time.saturating_sub(self.used_time)
    }

    pub fn usage_percentage(&self) -> u32 {
        if self.total_time == 0 {
            return 0;
        }
        (f64::from(self.used_time) / f64::from(self.total_time) * 100.0).round() as u32
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

/// 以語系慣用格式顯示分鐘數
pub fn format_minutes(locale: Locale, minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (locale, hours > 0) {
        (Locale::Zh, true) => format!("{}小时{}分钟", hours, mins),
        (Locale::Zh, false) => format!("{}分钟", mins),
        (Locale::En, true) => format!("{}h {}m", hours, mins),
        (Locale::En, false) => format!("{}m", mins),
    }
}
