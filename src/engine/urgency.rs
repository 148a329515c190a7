// ==========================================
// Desenrola DCL - Engine de urgência de pagamento
// ==========================================
// Entrada: data prometida + data do pedido (opcional) + margem de segurança
// Saída: prazo de pagamento, dias restantes, percentual e faixa de urgência
// ==========================================
// Regra: dias corridos (sem pular fim de semana)
// Regra: faixas fixas por dias restantes, avaliadas em ordem
// Regra: nunca falha; entrada ausente ou inválida vira resultado neutro
// ==========================================

use crate::config::urgency_config::{UrgencyConfig, MAX_CONFIG_DAYS};
use crate::domain::types::UrgencyTier;
use crate::domain::urgency::{TierPresentation, UrgencyInput, UrgencyResult};
use crate::engine::dates::parse_date_like;
use chrono::{Duration, Local, NaiveDate};
use tracing::{debug, warn};

// ==========================================
// Faixas de dias restantes
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRange {
    Below(i64),
    Exactly(i64),
    Between(i64, i64), // inclusivo
    AtLeast(i64),
}

impl DayRange {
    pub fn contains(&self, days: i64) -> bool {
        match *self {
            DayRange::Below(limit) => days < limit,
            DayRange::Exactly(value) => days == value,
            DayRange::Between(lo, hi) => days >= lo && days <= hi,
            DayRange::AtLeast(limit) => days >= limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyBand {
    pub range: DayRange,
    pub tier: UrgencyTier,
    pub pulse: bool,
    pub presentation: TierPresentation,
}

/// Tabela de faixas, primeira que casar vence.
///
/// 2 e 3 dias são ambos URGENTE, mas só 2 dias pulsa.
pub const URGENCY_BANDS: [UrgencyBand; 7] = [
    UrgencyBand {
        range: DayRange::Below(0),
        tier: UrgencyTier::Critico,
        pulse: true,
        presentation: TierPresentation {
            text_color_class: "text-red-700",
            background_color_class: "bg-red-100 border-red-300",
            gradient_class: "from-red-600 to-red-800",
            label: "VENCIDO",
            icon: "🚨",
        },
    },
    UrgencyBand {
        range: DayRange::Exactly(0),
        tier: UrgencyTier::Critico,
        pulse: true,
        presentation: TierPresentation {
            text_color_class: "text-red-600",
            background_color_class: "bg-red-50 border-red-400",
            gradient_class: "from-red-500 to-red-700",
            label: "PAGAR HOJE!",
            icon: "🔥",
        },
    },
    UrgencyBand {
        range: DayRange::Exactly(1),
        tier: UrgencyTier::Critico,
        pulse: true,
        presentation: TierPresentation {
            text_color_class: "text-red-600",
            background_color_class: "bg-red-50 border-red-300",
            gradient_class: "from-red-500 to-orange-600",
            label: "CRÍTICO",
            icon: "⚠️",
        },
    },
    UrgencyBand {
        range: DayRange::Exactly(2),
        tier: UrgencyTier::Urgente,
        pulse: true,
        presentation: TierPresentation {
            text_color_class: "text-orange-600",
            background_color_class: "bg-orange-50 border-orange-300",
            gradient_class: "from-orange-500 to-red-500",
            label: "URGENTE",
            icon: "⏰",
        },
    },
    UrgencyBand {
        range: DayRange::Exactly(3),
        tier: UrgencyTier::Urgente,
        pulse: false,
        presentation: TierPresentation {
            text_color_class: "text-orange-600",
            background_color_class: "bg-orange-50 border-orange-200",
            gradient_class: "from-orange-400 to-orange-600",
            label: "URGENTE",
            icon: "⏰",
        },
    },
    UrgencyBand {
        range: DayRange::Between(4, 5),
        tier: UrgencyTier::Atencao,
        pulse: false,
        presentation: TierPresentation {
            text_color_class: "text-yellow-700",
            background_color_class: "bg-yellow-50 border-yellow-200",
            gradient_class: "from-yellow-400 to-orange-400",
            label: "ATENÇÃO",
            icon: "🟡",
        },
    },
    UrgencyBand {
        range: DayRange::AtLeast(6),
        tier: UrgencyTier::Folga,
        pulse: false,
        presentation: TierPresentation {
            text_color_class: "text-green-700",
            background_color_class: "bg-green-50 border-green-200",
            gradient_class: "from-green-400 to-emerald-500",
            label: "NO PRAZO",
            icon: "✅",
        },
    },
];

/// Faixa para um número de dias restantes
pub fn band_for_days(days_remaining: i64) -> &'static UrgencyBand {
    URGENCY_BANDS
        .iter()
        .find(|band| band.range.contains(days_remaining))
        // AtLeast(6) fecha a tabela; nunca chega aqui
        .unwrap_or(&URGENCY_BANDS[URGENCY_BANDS.len() - 1])
}

/// Percentual da janela já consumido, em [0, 100]
///
/// Janela <= 0 é tratada como 1 dia.
pub fn urgency_percent(total_window_days: i64, days_remaining: i64) -> u8 {
    let window = total_window_days.max(1);
    let elapsed = window.saturating_sub(days_remaining);
    let pct = (elapsed as f64 / window as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

// ==========================================
// UrgencyEngine
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyEngine {
    config: UrgencyConfig,
}

impl UrgencyEngine {
    /// Engine com os parâmetros padrão (margem 3, SLA reserva 7)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UrgencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UrgencyConfig {
        &self.config
    }

    // ==========================================
    // Métodos principais
    // ==========================================

    /// Classifica usando a margem de segurança da configuração
    pub fn classify(
        &self,
        promised_date: Option<NaiveDate>,
        order_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> UrgencyResult {
        self.evaluate(
            &UrgencyInput::new(promised_date, order_date, self.config.safety_margin_days),
            today,
        )
    }

    /// Classifica com margem explícita
    pub fn classify_with_margin(
        &self,
        promised_date: Option<NaiveDate>,
        order_date: Option<NaiveDate>,
        safety_margin_days: i64,
        today: NaiveDate,
    ) -> UrgencyResult {
        self.evaluate(
            &UrgencyInput::new(promised_date, order_date, safety_margin_days),
            today,
        )
    }

    /// Classifica a partir de texto (ISO, RFC 3339 ou dd/mm/aaaa)
    ///
    /// Texto que não é data vira `None`: promessa inválida dá o resultado neutro
    /// e data de pedido inválida cai no SLA reserva.
    pub fn classify_str(
        &self,
        promised_date: Option<&str>,
        order_date: Option<&str>,
        today: NaiveDate,
    ) -> UrgencyResult {
        let promised = promised_date.and_then(|raw| {
            let parsed = parse_date_like(raw);
            if parsed.is_none() {
                warn!(raw, "data prometida não reconhecida, usando resultado neutro");
            }
            parsed
        });
        let ordered = order_date.and_then(parse_date_like);
        self.classify(promised, ordered, today)
    }

    /// Classifica relativo ao relógio local
    pub fn classify_now(
        &self,
        promised_date: Option<NaiveDate>,
        order_date: Option<NaiveDate>,
    ) -> UrgencyResult {
        self.classify(promised_date, order_date, Local::now().date_naive())
    }

    /// Cálculo completo
    ///
    /// 1) sem data prometida → neutro
    /// 2) SLA lab = max(1, (prometida - pedido) - margem), ou reserva sem data do pedido
    /// 3) prazo de pagamento = prometida - SLA lab - margem
    /// 4) dias restantes = prazo - hoje
    /// 5) janela total = prazo - pedido, ou SLA lab + margem
    /// 6) faixa pela tabela `URGENCY_BANDS`
    pub fn evaluate(&self, input: &UrgencyInput, today: NaiveDate) -> UrgencyResult {
        let Some(promised) = input.promised_date else {
            debug!("pedido sem data prometida, resultado neutro");
            return UrgencyResult::neutral(self.config.fallback_lab_sla_days);
        };

        let margin = Self::sanitize_margin(input.safety_margin_days);

        let lab_sla_days = match input.order_date {
            Some(order_date) => (promised - order_date)
                .num_days()
                .saturating_sub(margin)
                .max(1),
            None => self.config.fallback_lab_sla_days.clamp(1, MAX_CONFIG_DAYS),
        };

        let Some(payment_deadline) = lab_sla_days
            .checked_add(margin)
            .and_then(Duration::try_days)
            .and_then(|offset| promised.checked_sub_signed(offset))
        else {
            warn!(%promised, lab_sla_days, margin, "prazo de pagamento fora do calendário");
            return UrgencyResult::neutral(self.config.fallback_lab_sla_days);
        };

        let days_remaining = (payment_deadline - today).num_days();

        let total_window_days = match input.order_date {
            Some(order_date) => (payment_deadline - order_date).num_days(),
            None => lab_sla_days + margin,
        };

        let percent = urgency_percent(total_window_days, days_remaining);
        let band = band_for_days(days_remaining);

        debug!(
            %promised,
            %payment_deadline,
            lab_sla_days,
            days_remaining,
            percent,
            tier = %band.tier,
            "urgência calculada"
        );

        UrgencyResult::with_presentation(
            days_remaining,
            percent,
            band.tier,
            &band.presentation,
            band.pulse,
            Some(payment_deadline),
            Some(promised),
            lab_sla_days,
        )
    }

    // ==========================================
    // Auxiliares
    // ==========================================

    fn sanitize_margin(margin: i64) -> i64 {
        if margin < 0 {
            warn!(margin, "margem de segurança negativa, usando 0");
            0
        } else {
            margin
        }
    }
}

// ==========================================
// Testes unitários
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Data base: 2026-03-10 (terça)
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn days(n: i64) -> NaiveDate {
        today() + Duration::days(n)
    }

    // ==========================================
    // Parte 1: cenários de referência
    // ==========================================

    #[test]
    fn test_scenario_a_promise_in_10_days() {
        let engine = UrgencyEngine::new();
        let r = engine.classify_with_margin(Some(days(10)), Some(today()), 3, today());

        assert_eq!(r.lab_sla_days, 7);
        assert_eq!(r.payment_deadline, Some(today()));
        assert_eq!(r.days_remaining, 0);
        assert_eq!(r.tier, UrgencyTier::Critico);
        assert_eq!(r.label, "PAGAR HOJE!");
        assert!(r.should_pulse);
    }

    #[test]
    fn test_scenario_b_promise_in_20_days() {
        let engine = UrgencyEngine::new();
        let r = engine.classify_with_margin(Some(days(20)), Some(today()), 3, today());

        assert_eq!(r.lab_sla_days, 17);
        assert_eq!(r.payment_deadline, Some(today()));
        assert_eq!(r.tier, UrgencyTier::Critico);
        assert!(r.should_pulse);
    }

    #[test]
    fn test_scenario_c_no_promised_date() {
        let engine = UrgencyEngine::new();
        let r = engine.classify(None, Some(today()), today());

        assert_eq!(r.tier, UrgencyTier::Indefinido);
        assert_eq!(r.icon, "❓");
        assert!(!r.should_pulse);
        assert_eq!(r.days_remaining, 999);
        assert_eq!(r.urgency_percent, 0);
        assert!(r.payment_deadline.is_none());
        assert!(r.is_neutral());
    }

    #[test]
    fn test_scenario_d_two_days_overdue() {
        // sem data do pedido: SLA 7 + margem 3 → prazo = prometida - 10
        let engine = UrgencyEngine::new();
        let r = engine.classify(Some(days(8)), None, today());

        assert_eq!(r.days_remaining, -2);
        assert_eq!(r.tier, UrgencyTier::Critico);
        assert_eq!(r.label, "VENCIDO");
        assert!(r.should_pulse);
    }

    #[test]
    fn test_scenario_e_pulse_asymmetry() {
        let engine = UrgencyEngine::new();

        let three = engine.classify(Some(days(13)), None, today());
        assert_eq!(three.days_remaining, 3);
        assert_eq!(three.tier, UrgencyTier::Urgente);
        assert!(!three.should_pulse);

        let two = engine.classify(Some(days(12)), None, today());
        assert_eq!(two.days_remaining, 2);
        assert_eq!(two.tier, UrgencyTier::Urgente);
        assert!(two.should_pulse);
    }

    // ==========================================
    // Parte 2: limites das faixas
    // ==========================================

    #[test]
    fn test_band_boundaries() {
        let expected = [
            (-30, UrgencyTier::Critico, true, "VENCIDO"),
            (-1, UrgencyTier::Critico, true, "VENCIDO"),
            (0, UrgencyTier::Critico, true, "PAGAR HOJE!"),
            (1, UrgencyTier::Critico, true, "CRÍTICO"),
            (2, UrgencyTier::Urgente, true, "URGENTE"),
            (3, UrgencyTier::Urgente, false, "URGENTE"),
            (4, UrgencyTier::Atencao, false, "ATENÇÃO"),
            (5, UrgencyTier::Atencao, false, "ATENÇÃO"),
            (6, UrgencyTier::Folga, false, "NO PRAZO"),
            (400, UrgencyTier::Folga, false, "NO PRAZO"),
        ];

        for (d, tier, pulse, label) in expected {
            let band = band_for_days(d);
            assert_eq!(band.tier, tier, "dias={}", d);
            assert_eq!(band.pulse, pulse, "dias={}", d);
            assert_eq!(band.presentation.label, label, "dias={}", d);
        }
    }

    #[test]
    fn test_tier_depends_only_on_days_remaining() {
        let engine = UrgencyEngine::new();
        // mesma distância até o prazo, janelas diferentes
        let short = engine.classify_with_margin(Some(days(14)), Some(today()), 3, today());
        let long = engine.classify(Some(days(14)), None, today());

        assert_eq!(short.days_remaining, 0);
        assert_eq!(long.days_remaining, 4);
        assert_eq!(band_for_days(4).tier, long.tier);
    }

    // ==========================================
    // Parte 3: SLA e percentual
    // ==========================================

    #[test]
    fn test_lab_sla_never_below_one() {
        let engine = UrgencyEngine::new();

        // prometida no mesmo dia do pedido
        let same_day = engine.classify_with_margin(Some(today()), Some(today()), 3, today());
        assert_eq!(same_day.lab_sla_days, 1);

        // prometida antes do pedido
        let inverted = engine.classify_with_margin(Some(days(-5)), Some(today()), 3, today());
        assert_eq!(inverted.lab_sla_days, 1);
        assert_eq!(inverted.payment_deadline, Some(days(-9)));
        assert!(inverted.urgency_percent <= 100);
    }

    #[test]
    fn test_percent_window_guards() {
        assert_eq!(urgency_percent(0, 0), 100);
        assert_eq!(urgency_percent(-4, 3), 0);
        assert_eq!(urgency_percent(10, 10), 0);
        assert_eq!(urgency_percent(10, 5), 50);
        assert_eq!(urgency_percent(10, -3), 100);
        assert_eq!(urgency_percent(10, 25), 0);
        assert_eq!(urgency_percent(3, 2), 33);
    }

    #[test]
    fn test_percent_without_order_date_uses_sla_plus_margin() {
        let engine = UrgencyEngine::new();
        // janela = 7 + 3 = 10, restante 5
        let r = engine.classify(Some(days(15)), None, today());
        assert_eq!(r.days_remaining, 5);
        assert_eq!(r.urgency_percent, 50);
    }

    #[test]
    fn test_days_remaining_decreases_one_per_day() {
        let engine = UrgencyEngine::new();
        let promised = Some(days(30));
        let ordered = Some(days(-5));

        let mut previous = engine.classify(promised, ordered, today());
        for step in 1..40 {
            let r = engine.classify(promised, ordered, days(step));
            assert_eq!(r.days_remaining, previous.days_remaining - 1);
            assert!(r.urgency_percent >= previous.urgency_percent);
            previous = r;
        }
    }

    #[test]
    fn test_negative_margin_clamped_to_zero() {
        let engine = UrgencyEngine::new();
        let r = engine.classify_with_margin(Some(days(10)), None, -4, today());
        // SLA 7, margem 0
        assert_eq!(r.payment_deadline, Some(days(3)));
        assert_eq!(r.days_remaining, 3);
    }

    #[test]
    fn test_large_margin_is_not_capped() {
        let engine = UrgencyEngine::new();
        let r = engine.classify_with_margin(Some(days(10)), None, 400, today());
        // 10 - 7 - 400
        assert_eq!(r.payment_deadline, Some(days(-397)));
        assert_eq!(r.days_remaining, -397);
        assert_eq!(r.tier, UrgencyTier::Critico);

        let huge = engine.classify_with_margin(Some(days(10)), None, i64::MAX, today());
        assert!(huge.is_neutral());
    }

    #[test]
    fn test_custom_config_fallback_sla() {
        let engine = UrgencyEngine::with_config(UrgencyConfig {
            safety_margin_days: 2,
            fallback_lab_sla_days: 5,
            ..UrgencyConfig::default()
        });
        let r = engine.classify(Some(days(10)), None, today());
        assert_eq!(r.lab_sla_days, 5);
        assert_eq!(r.days_remaining, 3);
    }

    // ==========================================
    // Parte 4: entrada em texto
    // ==========================================

    #[test]
    fn test_classify_str_formats() {
        let engine = UrgencyEngine::new();

        let iso = engine.classify_str(Some("2026-03-20"), None, today());
        let br = engine.classify_str(Some("20/03/2026"), None, today());
        let ts = engine.classify_str(Some("2026-03-20T15:45:00-03:00"), None, today());

        assert_eq!(iso.days_remaining, 0);
        assert_eq!(iso, br);
        assert_eq!(iso, ts);
    }

    #[test]
    fn test_classify_str_garbage_is_neutral() {
        let engine = UrgencyEngine::new();
        let r = engine.classify_str(Some("amanhã cedo"), Some("2026-03-01"), today());
        assert!(r.is_neutral());
        assert!(!r.should_pulse);
    }
}
