// ==========================================
// Desenrola DCL - Camada de domínio
// ==========================================
// Responsabilidade: tipos e objetos de valor
// Sem acesso a dados, sem regra de engine
// ==========================================

pub mod order;
pub mod sla;
pub mod types;
pub mod urgency;

pub use order::{ClassifiedOrder, OrderSnapshot};
pub use sla::SlaCalculation;
pub use types::{DeadlineBucket, ManualDateAlert, SlaAlertColor, UrgencyTier};
pub use urgency::{TierPresentation, UrgencyInput, UrgencyResult, NEUTRAL_DAYS_REMAINING};
