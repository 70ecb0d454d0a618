// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持德语（默认）和英语
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["de", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言（不支持的语言回退为德语）
///
/// # 参数
/// - locale: 语言代码（"de" 或 "en"）
pub fn set_locale(locale: &str) {
    let locale = if SUPPORTED_LOCALES.contains(&locale) {
        locale
    } else {
        tracing::warn!("不支持的语言: {}，使用 de", locale);
        "de"
    };
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use paket_konfigurator::i18n::t;
/// let msg = t("summary.subtotal");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use paket_konfigurator::i18n::t_with_args;
/// let msg = t_with_args("catalog.load_failed", &[("path", "Miete.xlsx")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale("fr");
        assert_eq!(current_locale(), "de");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("de");
        assert_eq!(t("summary.title"), "Paket-Zusammenfassung");

        set_locale("en");
        assert_eq!(t("summary.title"), "Package summary");

        set_locale("de");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("de");
        let msg = t_with_args("upload.saved", &[("path", "/tmp/Miete_uploaded.xlsx")]);
        assert!(msg.contains("/tmp/Miete_uploaded.xlsx"));
        assert!(msg.contains("Neustart"));
    }
}
