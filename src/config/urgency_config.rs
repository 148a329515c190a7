// ==========================================
// Desenrola DCL - Parâmetros resolvidos de urgência
// ==========================================
// Passados explicitamente para as engines (sem singleton global)
// ==========================================

use serde::{Deserialize, Serialize};

/// Margem de segurança padrão (montagem na loja)
pub const DEFAULT_SAFETY_MARGIN_DAYS: i64 = 3;

/// SLA do laboratório quando não há data do pedido
pub const DEFAULT_FALLBACK_LAB_SLA_DAYS: i64 = 7;

/// Margem usada na promessa ao cliente na criação do pedido
pub const DEFAULT_CUSTOMER_MARGIN_DAYS: i64 = 2;

/// Limite superior aceito para qualquer parâmetro em dias
pub const MAX_CONFIG_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyConfig {
    pub safety_margin_days: i64,
    pub fallback_lab_sla_days: i64,
    pub customer_margin_days: i64,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            safety_margin_days: DEFAULT_SAFETY_MARGIN_DAYS,
            fallback_lab_sla_days: DEFAULT_FALLBACK_LAB_SLA_DAYS,
            customer_margin_days: DEFAULT_CUSTOMER_MARGIN_DAYS,
        }
    }
}
