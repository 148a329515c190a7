// ==========================================
// Desenrola DCL - Camada de engines
// ==========================================
// Responsabilidade: regras puras (urgência, filtros, ordenação, SLA)
// Regra: sem I/O; "hoje" sempre entra como parâmetro
// ==========================================

pub mod board;
pub mod dates;
pub mod deadline_filter;
pub mod labels;
pub mod priority;
pub mod sla;
pub mod urgency;

pub use board::{
    bucket_counts, filter_by_bucket, sort_urgent_first, tier_counts, BucketCounts, UrgencyBoard,
};
pub use dates::{format_date_br, format_date_for_input, parse_date_from_input, parse_date_like};
pub use deadline_filter::{matches, matches_name};
pub use labels::{bucket_label, bucket_label_for_name, format_days_remaining};
pub use priority::{sort_priority, sort_priority_from_str};
pub use sla::{
    add_business_days, business_days_remaining, count_business_days, is_business_day,
    sla_alert_color, SlaCalculator,
};
pub use urgency::{band_for_days, urgency_percent, UrgencyEngine, URGENCY_BANDS};
