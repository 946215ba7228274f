use crate::domain::model::Locale;
use crate::utils::error::{AppError, Result};
use std::fmt;

/// 手機號最少位數，短於此長度直接視為格式錯誤
pub const MIN_PHONE_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub dial_code: &'static str,
    pub name_zh: &'static str,
    pub name_en: &'static str,
    pub max_length: usize,
}

impl CountryCode {
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name_zh,
            Locale::En => self.name_en,
        }
    }
}

const fn country(
    dial_code: &'static str,
    name_zh: &'static str,
    name_en: &'static str,
    max_length: usize,
) -> CountryCode {
    CountryCode {
        dial_code,
        name_zh,
        name_en,
        max_length,
    }
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    country("+86", "中国", "China", 11),
    country("+852", "香港", "Hong Kong", 8),
    country("+853", "澳门", "Macao", 8),
    country("+886", "台湾", "Taiwan", 9),
    country("+1", "美国", "United States", 10),
    country("+44", "英国", "United Kingdom", 11),
    country("+81", "日本", "Japan", 11),
    country("+82", "韩国", "South Korea", 11),
    country("+65", "新加坡", "Singapore", 8),
    country("+60", "马来西亚", "Malaysia", 10),
    country("+66", "泰国", "Thailand", 9),
    country("+84", "越南", "Vietnam", 10),
    country("+91", "印度", "India", 10),
    country("+61", "澳大利亚", "Australia", 9),
    country("+49", "德国", "Germany", 11),
    country("+33", "法国", "France", 10),
    country("+39", "意大利", "Italy", 10),
    country("+34", "西班牙", "Spain", 9),
    country("+7", "俄罗斯", "Russia", 10),
    country("+55", "巴西", "Brazil", 11),
];

pub fn default_country() -> &'static CountryCode {
    &COUNTRY_CODES[0]
}

pub fn find_country(dial_code: &str) -> Option<&'static CountryCode> {
    let normalized = dial_code.trim().trim_start_matches('+');
    COUNTRY_CODES
        .iter()
        .find(|c| c.dial_code.trim_start_matches('+') == normalized)
}

/// 經過格式檢查的手機號：國碼加上純數字的本地號碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    country: &'static CountryCode,
    digits: String,
}

impl Contact {
    /// 去掉空白、括號、連字號等非數字字元後檢查長度
    pub fn parse(country: &'static CountryCode, raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() < MIN_PHONE_DIGITS {
            return Err(AppError::InvalidContact {
                contact: raw.to_string(),
                reason: format!("expected at least {} digits", MIN_PHONE_DIGITS),
            });
        }

        if digits.len() > country.max_length {
            return Err(AppError::InvalidContact {
                contact: raw.to_string(),
                reason: format!(
                    "{} numbers have at most {} digits",
                    country.name_en, country.max_length
                ),
            });
        }

        Ok(Self { country, digits })
    }

    /// 本地號碼，不含國碼
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// 國碼加本地號碼，寫入 session 的 phone 欄位與送往簡訊通道的都是這個格式
    pub fn international(&self) -> String {
        format!("{}{}", self.country.dial_code, self.digits)
    }

    pub fn display(&self) -> String {
        format!(
            "{} {}",
            self.country.dial_code,
            format_national(self.country, &self.digits)
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.international())
    }
}

/// 依國家慣例分組顯示號碼
pub fn format_national(country: &CountryCode, digits: &str) -> String {
    let numbers: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
    if numbers.len() > country.max_length {
        return digits.to_string();
    }

    let n = numbers.len();
    match country.dial_code {
        "+86" => match n {
            0..=3 => numbers,
            4..=7 => format!("{} {}", &numbers[..3], &numbers[3..]),
            _ => format!("{} {} {}", &numbers[..3], &numbers[3..7], &numbers[7..]),
        },
        "+1" => match n {
            0..=3 => numbers,
            4..=6 => format!("({}) {}", &numbers[..3], &numbers[3..]),
            _ => format!("({}) {}-{}", &numbers[..3], &numbers[3..6], &numbers[6..]),
        },
        _ => match n {
            0..=4 => numbers,
            5..=8 => format!("{} {}", &numbers[..4], &numbers[4..]),
            _ => format!("{} {} {}", &numbers[..4], &numbers[4..8], &numbers[8..]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_country() {
        assert_eq!(find_country("+86").unwrap().name_en, "China");
        assert_eq!(find_country("852").unwrap().max_length, 8);
        assert!(find_country("+999").is_none());
        assert_eq!(default_country().dial_code, "+86");
        assert_eq!(COUNTRY_CODES.len(), 20);
    }

    #[test]
    fn test_parse_contact() {
        let china = default_country();
        let contact = Contact::parse(china, "138 0013 8000").unwrap();
        assert_eq!(contact.digits(), "13800138000");
        assert_eq!(contact.international(), "+8613800138000");
        assert_eq!(contact.display(), "+86 138 0013 8000");

        assert!(matches!(
            Contact::parse(china, "12345"),
            Err(AppError::InvalidContact { .. })
        ));
        assert!(Contact::parse(china, "138001380001").is_err());

        let hk = find_country("+852").unwrap();
        assert!(Contact::parse(hk, "912345678").is_err());
        assert!(Contact::parse(hk, "91234567").is_ok());
    }

    #[test]
    fn test_format_national() {
        let us = find_country("+1").unwrap();
        assert_eq!(format_national(us, "5551234567"), "(555) 123-4567");
        assert_eq!(format_national(us, "5551"), "(555) 1");

        let sg = find_country("+65").unwrap();
        assert_eq!(format_national(sg, "91234567"), "9123 4567");

        let uk = find_country("+44").unwrap();
        assert_eq!(format_national(uk, "07911123456"), "0791 1123 456");
    }

    #[test]
    fn test_country_name_by_locale() {
        let jp = find_country("+81").unwrap();
        assert_eq!(jp.name(Locale::Zh), "日本");
        assert_eq!(jp.name(Locale::En), "Japan");
    }
}
