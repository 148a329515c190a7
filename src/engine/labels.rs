// ==========================================
// Desenrola DCL - Rótulos e formatação
// ==========================================
// Textos vêm de locales/*.yml; o padrão é pt-BR
// ==========================================

use crate::domain::types::DeadlineBucket;
use crate::i18n::{t_in, t_in_with_args, DEFAULT_LOCALE};

/// Dias restantes em texto: "2 dias ATRASADO", "HOJE", "AMANHÃ", "5 dias"
pub fn format_days_remaining(days: i64) -> String {
    format_days_remaining_in(days, DEFAULT_LOCALE)
}

pub fn format_days_remaining_in(days: i64, locale: &str) -> String {
    match days {
        d if d < 0 => {
            let late = d.unsigned_abs();
            let key = if late == 1 {
                "days.overdue_one"
            } else {
                "days.overdue_other"
            };
            let count = late.to_string();
            t_in_with_args(key, locale, &[("count", count.as_str())])
        }
        0 => t_in("days.today", locale),
        1 => t_in("days.tomorrow", locale),
        d => {
            let count = d.to_string();
            t_in_with_args("days.remaining", locale, &[("count", count.as_str())])
        }
    }
}

/// Rótulo do filtro; sem filtro → "Todos"
pub fn bucket_label(bucket: Option<DeadlineBucket>) -> String {
    bucket_label_in(bucket, DEFAULT_LOCALE)
}

pub fn bucket_label_in(bucket: Option<DeadlineBucket>, locale: &str) -> String {
    let key = match bucket {
        Some(DeadlineBucket::Vencido) => "bucket.vencido",
        Some(DeadlineBucket::Hoje) => "bucket.hoje",
        Some(DeadlineBucket::Amanha) => "bucket.amanha",
        Some(DeadlineBucket::Proximos3Dias) => "bucket.proximos_3_dias",
        Some(DeadlineBucket::EstaSemana) => "bucket.esta_semana",
        None => "common.all",
    };
    t_in(key, locale)
}

/// Rótulo a partir do nome; nome desconhecido → "Todos"
pub fn bucket_label_for_name(name: Option<&str>) -> String {
    bucket_label(name.and_then(DeadlineBucket::parse))
}
