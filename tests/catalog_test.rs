use interview_helper::domain::model::SUPPORTED_LOCALES;
use interview_helper::{Catalog, Locale, Translator};

#[test]
fn test_builtin_catalog_is_complete() {
    let catalog = Catalog::builtin();
    let report = catalog.coverage();

    assert!(report.is_complete(), "missing keys: {:?}", report.missing);
    assert_eq!(catalog.len(Locale::Zh), catalog.len(Locale::En));
    assert_eq!(report.total_keys, catalog.len(Locale::Zh));
}

#[test]
fn test_every_key_resolves_to_non_empty_text() {
    let catalog = Catalog::builtin();
    let report = catalog.coverage();
    assert!(report.total_keys > 0);

    for locale in SUPPORTED_LOCALES {
        for key in interview_helper::locales::entries(*locale).iter().map(|(k, _)| *k) {
            let text = catalog.resolve(*locale, key);
            assert!(!text.is_empty(), "{} empty for {}", key, locale);
            assert_ne!(text, key, "{} unresolved for {}", key, locale);
        }
    }
}

#[test]
fn test_locales_differ_where_templates_differ() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.resolve(Locale::Zh, "login.verify.button"), "登录");
    assert_eq!(catalog.resolve(Locale::En, "login.verify.button"), "Login");
    assert_ne!(
        catalog.resolve(Locale::Zh, "ielts.radar.fluency"),
        catalog.resolve(Locale::En, "ielts.radar.fluency")
    );
}

#[test]
fn test_unknown_keys_fall_back_to_key() {
    let catalog = Catalog::builtin();

    // 頁面引用但目錄裡沒有的鍵
    for key in ["interview.roles.frontend", "questions.title", "questions.no_results"] {
        assert_eq!(catalog.resolve(Locale::Zh, key), key);
        assert_eq!(catalog.resolve(Locale::En, key), key);
    }
}

#[test]
fn test_welcome_message_interpolation() {
    let mut t = Translator::builtin(Locale::Zh);
    assert_eq!(
        t.t_with("interview.welcome_message", &[("position", "前端工程师")]),
        "您好！我是您的AI面试官。今天我们将进行前端工程师岗位的面试。请先简单介绍一下自己。"
    );

    t.toggle();
    let english = t.t_with("interview.welcome_message", &[("position", "Frontend Engineer")]);
    assert!(english.contains("for the Frontend Engineer position"));

    let untouched = t.t("interview.welcome_message");
    assert!(untouched.contains("{position}"));
}

#[test]
fn test_default_translator_uses_chinese() {
    let t = Translator::default();
    assert_eq!(t.locale(), Locale::Zh);
    assert_eq!(t.t("footer.rights"), "版权所有");
}
