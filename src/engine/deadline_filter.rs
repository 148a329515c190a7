// ==========================================
// Desenrola DCL - Filtro por prazo de pagamento
// ==========================================
// Predicado puro sobre o resultado de urgência
// Sem filtro (ou filtro desconhecido) → casa tudo
// ==========================================

use crate::domain::types::DeadlineBucket;
use crate::domain::urgency::UrgencyResult;

/// Verifica se o resultado pertence ao filtro
pub fn matches(result: &UrgencyResult, bucket: Option<DeadlineBucket>) -> bool {
    let Some(bucket) = bucket else {
        return true;
    };

    let days = result.days_remaining;
    match bucket {
        DeadlineBucket::Vencido => days < 0,
        DeadlineBucket::Hoje => days == 0,
        DeadlineBucket::Amanha => days == 1,
        DeadlineBucket::Proximos3Dias => (0..=3).contains(&days),
        DeadlineBucket::EstaSemana => (0..=7).contains(&days),
    }
}

/// Mesmo predicado, recebendo o nome vindo da querystring
pub fn matches_name(result: &UrgencyResult, bucket: Option<&str>) -> bool {
    matches(result, bucket.and_then(DeadlineBucket::parse))
}
