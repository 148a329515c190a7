// ==========================================
// Desenrola DCL - Quadro de urgência (Kanban)
// ==========================================
// Consumidor em lote do classificador: cabeçalhos de coluna (contadores),
// lista de pedidos (filtro) e ordenação "mais urgente primeiro"
// ==========================================

use crate::config::urgency_config::UrgencyConfig;
use crate::domain::order::{ClassifiedOrder, OrderSnapshot};
use crate::domain::types::{DeadlineBucket, UrgencyTier};
use crate::engine::deadline_filter::matches;
use crate::engine::priority::sort_priority;
use crate::engine::sla::SlaCalculator;
use crate::engine::urgency::UrgencyEngine;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

/// Contadores por filtro; um pedido pode contar em mais de um filtro
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub vencido: usize,
    pub hoje: usize,
    pub amanha: usize,
    pub proximos_3_dias: usize,
    pub esta_semana: usize,
    pub total: usize,
}

impl BucketCounts {
    pub fn get(&self, bucket: DeadlineBucket) -> usize {
        match bucket {
            DeadlineBucket::Vencido => self.vencido,
            DeadlineBucket::Hoje => self.hoje,
            DeadlineBucket::Amanha => self.amanha,
            DeadlineBucket::Proximos3Dias => self.proximos_3_dias,
            DeadlineBucket::EstaSemana => self.esta_semana,
        }
    }

    fn bump(&mut self, bucket: DeadlineBucket) {
        match bucket {
            DeadlineBucket::Vencido => self.vencido += 1,
            DeadlineBucket::Hoje => self.hoje += 1,
            DeadlineBucket::Amanha => self.amanha += 1,
            DeadlineBucket::Proximos3Dias => self.proximos_3_dias += 1,
            DeadlineBucket::EstaSemana => self.esta_semana += 1,
        }
    }
}

// ==========================================
// UrgencyBoard
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct UrgencyBoard {
    config: UrgencyConfig,
    /// margem de segurança por loja
    store_margins: HashMap<String, i64>,
    /// SLA reserva por laboratório
    lab_fallback_sla: HashMap<String, i64>,
}

impl UrgencyBoard {
    pub fn new(config: UrgencyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_store_margin(mut self, store_id: impl Into<String>, days: i64) -> Self {
        self.store_margins.insert(store_id.into(), days);
        self
    }

    pub fn with_lab_fallback_sla(mut self, lab_id: impl Into<String>, days: i64) -> Self {
        self.lab_fallback_sla.insert(lab_id.into(), days);
        self
    }

    /// Calculadora de SLA com a margem do cliente desta configuração
    pub fn sla_calculator(&self) -> SlaCalculator {
        SlaCalculator::from_config(&self.config)
    }

    /// Parâmetros efetivos para um pedido (loja/laboratório sobrepõem o global)
    pub fn effective_config(&self, order: &OrderSnapshot) -> UrgencyConfig {
        let mut config = self.config;
        if let Some(days) = order
            .store_id
            .as_ref()
            .and_then(|id| self.store_margins.get(id))
        {
            config.safety_margin_days = *days;
        }
        if let Some(days) = order
            .lab_id
            .as_ref()
            .and_then(|id| self.lab_fallback_sla.get(id))
        {
            config.fallback_lab_sla_days = *days;
        }
        config
    }

    pub fn classify_order(&self, order: OrderSnapshot, today: NaiveDate) -> ClassifiedOrder {
        let engine = UrgencyEngine::with_config(self.effective_config(&order));
        let urgency = engine.classify(order.promised_date, order.order_date, today);
        let sort_priority = sort_priority(urgency.tier);
        ClassifiedOrder {
            order,
            urgency,
            sort_priority,
        }
    }

    /// Classifica todos os pedidos
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn evaluate_batch(
        &self,
        orders: Vec<OrderSnapshot>,
        today: NaiveDate,
    ) -> Vec<ClassifiedOrder> {
        let classified: Vec<ClassifiedOrder> = orders
            .into_iter()
            .map(|order| self.classify_order(order, today))
            .collect();

        debug!(
            neutral = classified.iter().filter(|c| c.urgency.is_neutral()).count(),
            "lote classificado"
        );
        classified
    }
}

// ==========================================
// Operações sobre pedidos classificados
// ==========================================

/// Ordena: prioridade, dias restantes, id do pedido (estável)
pub fn sort_urgent_first(orders: &mut [ClassifiedOrder]) {
    orders.sort_by(|a, b| {
        a.sort_priority
            .cmp(&b.sort_priority)
            .then(a.urgency.days_remaining.cmp(&b.urgency.days_remaining))
            .then_with(|| a.order.order_id.cmp(&b.order.order_id))
    });
}

pub fn filter_by_bucket(
    orders: &[ClassifiedOrder],
    bucket: Option<DeadlineBucket>,
) -> Vec<ClassifiedOrder> {
    orders
        .iter()
        .filter(|c| matches(&c.urgency, bucket))
        .cloned()
        .collect()
}

pub fn bucket_counts(orders: &[ClassifiedOrder]) -> BucketCounts {
    let mut counts = BucketCounts {
        total: orders.len(),
        ..BucketCounts::default()
    };
    for order in orders {
        for bucket in DeadlineBucket::ALL {
            if matches(&order.urgency, Some(bucket)) {
                counts.bump(bucket);
            }
        }
    }
    counts
}

pub fn tier_counts(orders: &[ClassifiedOrder]) -> BTreeMap<UrgencyTier, usize> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.urgency.tier).or_insert(0) += 1;
    }
    counts
}
