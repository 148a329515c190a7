// ==========================================
// Desenrola DCL - Cálculo de SLA (criação do pedido)
// ==========================================
// Dias úteis (seg-sex); o classificador de urgência usa dias corridos
// ==========================================

use crate::domain::types::ManualDateAlert;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlaCalculation {
    // SLA do laboratório (prazo real de produção)
    pub lab_sla_days: i64,
    pub lab_sla_date: NaiveDate,
    pub lab_sla_date_formatted: String,

    // Data prometida ao cliente (SLA + margem de segurança)
    pub customer_promise_days: i64,
    pub customer_promise_date: NaiveDate,
    pub customer_promise_date_formatted: String,

    pub safety_margin_days: i64,

    pub is_manual_before_lab_sla: bool,
    pub manual_date_alert: Option<ManualDateAlert>,
}
