// ==========================================
// Desenrola DCL - Pedido (visão mínima para urgência)
// ==========================================
// Os dados vêm do armazenamento de pedidos externo; aqui só o que o
// classificador de urgência precisa
// ==========================================

use crate::domain::urgency::UrgencyResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub order_id: String,
    pub store_id: Option<String>,
    pub lab_id: Option<String>,
    /// Coluna do Kanban (status do pedido)
    pub status: Option<String>,
    pub promised_date: Option<NaiveDate>,
    pub order_date: Option<NaiveDate>,
}

impl OrderSnapshot {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            store_id: None,
            lab_id: None,
            status: None,
            promised_date: None,
            order_date: None,
        }
    }
}

/// Pedido com o resultado de urgência já calculado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedOrder {
    pub order: OrderSnapshot,
    pub urgency: UrgencyResult,
    pub sort_priority: u8,
}
