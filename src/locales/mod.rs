// 內建文本資源，每個語系一個檔案
pub mod en;
pub mod zh;

use crate::domain::model::Locale;

/// 取得指定語系的內建鍵值表
pub fn entries(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Zh => zh::ENTRIES,
        Locale::En => en::ENTRIES,
    }
}
