// ==========================================
// Desenrola DCL - Prioridade de ordenação
// ==========================================
// Menor = mais urgente; usado como chave de ordenação nas listas
// ==========================================

use crate::domain::types::UrgencyTier;

/// Prioridade dos níveis não reconhecidos
pub const UNKNOWN_PRIORITY: u8 = 5;

pub fn sort_priority(tier: UrgencyTier) -> u8 {
    match tier {
        UrgencyTier::Critico => 1,
        UrgencyTier::Urgente => 2,
        UrgencyTier::Atencao => 3,
        UrgencyTier::Folga => 4,
        UrgencyTier::Indefinido => UNKNOWN_PRIORITY,
    }
}

/// Prioridade a partir do nome do nível; texto desconhecido → 5
pub fn sort_priority_from_str(tier: &str) -> u8 {
    sort_priority(UrgencyTier::from_str(tier))
}
