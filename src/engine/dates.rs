// ==========================================
// Desenrola DCL - Datas: leitura e formatação
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Lê uma data em qualquer formato que chega do frontend/banco
///
/// Aceita `aaaa-mm-dd`, RFC 3339 (data no fuso do próprio timestamp),
/// `aaaa-mm-dd HH:MM:SS` e `dd/mm/aaaa`. Qualquer outra coisa → `None`.
pub fn parse_date_like(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// dd/mm/aaaa
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// aaaa-mm-dd (valor de `<input type="date">`)
pub fn format_date_for_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverso de `format_date_for_input`
pub fn parse_date_from_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
