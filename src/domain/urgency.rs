// ==========================================
// Desenrola DCL - Resultado de urgência de pagamento
// ==========================================
// Objeto de valor recalculado a cada render; não é persistido
// ==========================================

use crate::domain::types::UrgencyTier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dias restantes do resultado neutro (pedido sem data prometida)
pub const NEUTRAL_DAYS_REMAINING: i64 = 999;

// ==========================================
// UrgencyInput - dados do pedido consumidos
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyInput {
    /// Data prometida ao cliente; `None` é válido (pedido sem data)
    pub promised_date: Option<NaiveDate>,
    /// Data do pedido; usada só para derivar o SLA do laboratório
    pub order_date: Option<NaiveDate>,
    /// Margem para montagem na loja depois do retorno do laboratório
    pub safety_margin_days: i64,
}

impl UrgencyInput {
    pub fn new(
        promised_date: Option<NaiveDate>,
        order_date: Option<NaiveDate>,
        safety_margin_days: i64,
    ) -> Self {
        Self {
            promised_date,
            order_date,
            safety_margin_days,
        }
    }
}

// ==========================================
// TierPresentation - metadados visuais da faixa
// ==========================================
// Tabela estática: classes Tailwind, rótulo e ícone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPresentation {
    pub text_color_class: &'static str,
    pub background_color_class: &'static str,
    pub gradient_class: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl TierPresentation {
    /// Apresentação do estado neutro
    pub const NEUTRAL: TierPresentation = TierPresentation {
        text_color_class: "text-gray-500",
        background_color_class: "bg-gray-100",
        gradient_class: "from-gray-400 to-gray-500",
        label: "SLA não definido",
        icon: "❓",
    };
}

// ==========================================
// UrgencyResult - saída do classificador
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyResult {
    /// Dias (com sinal) de hoje até o prazo de pagamento; negativo = vencido
    pub days_remaining: i64,
    /// Quanto da janela total já passou, em [0, 100]
    pub urgency_percent: u8,
    pub tier: UrgencyTier,

    pub text_color_class: String,
    pub background_color_class: String,
    pub gradient_class: String,
    pub label: String,
    pub icon: String,
    pub should_pulse: bool,

    pub payment_deadline: Option<NaiveDate>,
    pub promised_date_normalized: Option<NaiveDate>,
    pub lab_sla_days: i64,
}

impl UrgencyResult {
    /// Resultado neutro: pedido ainda sem data prometida
    pub fn neutral(fallback_lab_sla_days: i64) -> Self {
        Self::with_presentation(
            NEUTRAL_DAYS_REMAINING,
            0,
            UrgencyTier::Indefinido,
            &TierPresentation::NEUTRAL,
            false,
            None,
            None,
            fallback_lab_sla_days.max(1),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn with_presentation(
        days_remaining: i64,
        urgency_percent: u8,
        tier: UrgencyTier,
        presentation: &TierPresentation,
        should_pulse: bool,
        payment_deadline: Option<NaiveDate>,
        promised_date_normalized: Option<NaiveDate>,
        lab_sla_days: i64,
    ) -> Self {
        Self {
            days_remaining,
            urgency_percent,
            tier,
            text_color_class: presentation.text_color_class.to_string(),
            background_color_class: presentation.background_color_class.to_string(),
            gradient_class: presentation.gradient_class.to_string(),
            label: presentation.label.to_string(),
            icon: presentation.icon.to_string(),
            should_pulse,
            payment_deadline,
            promised_date_normalized,
            lab_sla_days,
        }
    }

    /// true quando o pedido não tem data prometida
    pub fn is_neutral(&self) -> bool {
        self.tier == UrgencyTier::Indefinido
    }
}
