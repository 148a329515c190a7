// ==========================================
// Desenrola DCL - Tipos de domínio
// ==========================================
// Escopo: níveis de urgência de pagamento, filtros de prazo, alertas de SLA
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Nível de urgência (Urgency Tier)
// ==========================================
// Faixas fixas por dias restantes; não é escore proporcional
// Ordem: Critico < Urgente < Atencao < Folga < Indefinido (mais urgente primeiro)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    Critico,    // vencido, hoje ou amanhã
    Urgente,    // 2-3 dias
    Atencao,    // 4-5 dias
    Folga,      // 6+ dias
    Indefinido, // sem data prometida
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyTier::Critico => write!(f, "CRITICO"),
            UrgencyTier::Urgente => write!(f, "URGENTE"),
            UrgencyTier::Atencao => write!(f, "ATENCAO"),
            UrgencyTier::Folga => write!(f, "FOLGA"),
            UrgencyTier::Indefinido => write!(f, "INDEFINIDO"),
        }
    }
}

impl UrgencyTier {
    /// Converte texto vindo do banco/frontend; valores desconhecidos viram `Indefinido`
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "CRITICO" => UrgencyTier::Critico,
            "URGENTE" => UrgencyTier::Urgente,
            "ATENCAO" => UrgencyTier::Atencao,
            "FOLGA" => UrgencyTier::Folga,
            _ => UrgencyTier::Indefinido,
        }
    }

    /// Todos os níveis reais (sem o neutro)
    pub fn real_tiers() -> [UrgencyTier; 4] {
        [
            UrgencyTier::Critico,
            UrgencyTier::Urgente,
            UrgencyTier::Atencao,
            UrgencyTier::Folga,
        ]
    }
}

// ==========================================
// Filtro de prazo (Deadline Bucket)
// ==========================================
// Janelas relativas usadas nos cabeçalhos do Kanban e na lista de pedidos
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlineBucket {
    Vencido,
    Hoje,
    Amanha,
    #[serde(rename = "proximos-3-dias")]
    Proximos3Dias,
    EstaSemana,
}

impl DeadlineBucket {
    pub const ALL: [DeadlineBucket; 5] = [
        DeadlineBucket::Vencido,
        DeadlineBucket::Hoje,
        DeadlineBucket::Amanha,
        DeadlineBucket::Proximos3Dias,
        DeadlineBucket::EstaSemana,
    ];

    /// Nome usado na URL/querystring do frontend
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineBucket::Vencido => "vencido",
            DeadlineBucket::Hoje => "hoje",
            DeadlineBucket::Amanha => "amanha",
            DeadlineBucket::Proximos3Dias => "proximos-3-dias",
            DeadlineBucket::EstaSemana => "esta-semana",
        }
    }

    /// Interpreta o nome do filtro
    ///
    /// Nome desconhecido retorna `None`, que equivale a "sem filtro".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vencido" => Some(DeadlineBucket::Vencido),
            "hoje" => Some(DeadlineBucket::Hoje),
            "amanha" => Some(DeadlineBucket::Amanha),
            "proximos-3-dias" => Some(DeadlineBucket::Proximos3Dias),
            "esta-semana" => Some(DeadlineBucket::EstaSemana),
            _ => None,
        }
    }
}

impl fmt::Display for DeadlineBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Cor de alerta do SLA (dias úteis restantes)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaAlertColor {
    Success, // 5+ dias
    Warning, // 2-4 dias
    Error,   // 0-1 dia
}

impl fmt::Display for SlaAlertColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaAlertColor::Success => write!(f, "success"),
            SlaAlertColor::Warning => write!(f, "warning"),
            SlaAlertColor::Error => write!(f, "error"),
        }
    }
}

// ==========================================
// Alerta de data prometida manual
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManualDateAlert {
    ManualBeforeLabSla,             // antes do SLA do laboratório: risco de atraso
    ManualBetweenSlaAndRecommended, // entre o SLA do laboratório e a data recomendada
}

impl ManualDateAlert {
    pub fn message(&self) -> &'static str {
        match self {
            ManualDateAlert::ManualBeforeLabSla => {
                "⚠️ Data prometida manual é ANTERIOR ao SLA do laboratório! Risco de atraso."
            }
            ManualDateAlert::ManualBetweenSlaAndRecommended => {
                "ℹ️ Data prometida manual está entre o SLA lab e a data recomendada."
            }
        }
    }
}
