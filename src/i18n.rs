// ==========================================
// Internacionalização (i18n)
// ==========================================
// Usa rust-i18n; pt-BR (padrão) e en
// ==========================================
// Nota: o macro rust_i18n::i18n! é inicializado em lib.rs
// ==========================================

/// Idioma padrão e de fallback
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Idioma atual (estado global do rust-i18n)
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Troca o idioma global
///
/// # Parâmetros
/// - locale: "pt-BR" ou "en"
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Traduz no idioma global
///
/// # Exemplo
/// ```no_run
/// use desenrola_dcl::i18n::t;
/// let msg = t("days.today");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Traduz no idioma global, substituindo `%{nome}`
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key).to_string(), args)
}

/// Traduz num idioma explícito, sem tocar no estado global
pub fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// Traduz num idioma explícito, substituindo `%{nome}`
pub fn t_in_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn interpolate(mut text: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        text = text.replace(&placeholder, v);
    }
    text
}
