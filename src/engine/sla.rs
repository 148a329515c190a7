// ==========================================
// Desenrola DCL - Calculadora de SLA (dias úteis)
// ==========================================
// Usada na criação do pedido: data do SLA do laboratório e data prometida
// ao cliente. Sábado e domingo não contam.
// ==========================================

use crate::config::urgency_config::{UrgencyConfig, DEFAULT_CUSTOMER_MARGIN_DAYS};
use crate::domain::sla::SlaCalculation;
use crate::domain::types::{ManualDateAlert, SlaAlertColor};
use crate::engine::dates::format_date_br;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Avança `days` dias úteis a partir de `date` (a própria data não conta)
pub fn add_business_days(date: NaiveDate, days: i64) -> NaiveDate {
    let mut result = date;
    let mut added = 0;
    while added < days {
        result = result + Duration::days(1);
        if is_business_day(result) {
            added += 1;
        }
    }
    result
}

/// Dias úteis em `[start, end)`
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> i64 {
    start
        .iter_days()
        .take_while(|d| *d < end)
        .filter(|d| is_business_day(*d))
        .count() as i64
}

/// Dias úteis de hoje até a data; 0 se já passou
pub fn business_days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    if target <= today {
        return 0;
    }
    count_business_days(today, target)
}

/// Verde: 5+ dias, amarelo: 2-4, vermelho: 0-1
pub fn sla_alert_color(days_remaining: i64) -> SlaAlertColor {
    if days_remaining >= 5 {
        SlaAlertColor::Success
    } else if days_remaining >= 2 {
        SlaAlertColor::Warning
    } else {
        SlaAlertColor::Error
    }
}

// ==========================================
// SlaCalculator
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct SlaCalculator {
    customer_margin_days: i64,
}

impl Default for SlaCalculator {
    fn default() -> Self {
        Self {
            customer_margin_days: DEFAULT_CUSTOMER_MARGIN_DAYS,
        }
    }
}

impl SlaCalculator {
    pub fn new(customer_margin_days: i64) -> Self {
        Self {
            customer_margin_days: customer_margin_days.max(0),
        }
    }

    /// Usa a margem do cliente resolvida na configuração
    pub fn from_config(config: &UrgencyConfig) -> Self {
        Self::new(config.customer_margin_days)
    }

    pub fn customer_margin_days(&self) -> i64 {
        self.customer_margin_days
    }

    /// Calcula SLA do laboratório e promessa ao cliente
    ///
    /// # Parâmetros
    /// - base: data base (normalmente hoje)
    /// - lab_days: prazo informado pelo laboratório, em dias úteis
    /// - manual_promise: data prometida digitada pelo usuário
    pub fn calculate(
        &self,
        base: NaiveDate,
        lab_days: i64,
        manual_promise: Option<NaiveDate>,
    ) -> SlaCalculation {
        let lab_sla_date = add_business_days(base, lab_days);

        let customer_promise_days = lab_days + self.customer_margin_days;
        let recommended = add_business_days(base, customer_promise_days);

        let manual_date_alert = manual_promise.and_then(|manual| {
            if manual < lab_sla_date {
                Some(ManualDateAlert::ManualBeforeLabSla)
            } else if manual < recommended {
                Some(ManualDateAlert::ManualBetweenSlaAndRecommended)
            } else {
                None
            }
        });

        let customer_promise_date = manual_promise.unwrap_or(recommended);

        debug!(
            %base,
            lab_days,
            %lab_sla_date,
            %customer_promise_date,
            alert = ?manual_date_alert,
            "SLA calculado"
        );

        SlaCalculation {
            lab_sla_days: lab_days,
            lab_sla_date,
            lab_sla_date_formatted: format_date_br(lab_sla_date),
            customer_promise_days,
            customer_promise_date,
            customer_promise_date_formatted: format_date_br(customer_promise_date),
            safety_margin_days: self.customer_margin_days,
            is_manual_before_lab_sla: manual_date_alert
                == Some(ManualDateAlert::ManualBeforeLabSla),
            manual_date_alert,
        }
    }
}
