// ==========================================
// Desenrola DCL - Biblioteca principal
// ==========================================
// Urgência de pagamento dos pedidos de lentes: prazo de pagamento derivado
// da data prometida, SLA do laboratório e margem de segurança
// ==========================================

// Inicializa i18n
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Módulos
// ==========================================

// Domínio - tipos e objetos de valor
pub mod domain;

// Engines - regras puras
pub mod engine;

// Importação - snapshot de pedidos
pub mod importer;

// Configuração - parâmetros por escopo
pub mod config;

// SQLite (PRAGMAs, schema de configuração)
pub mod db;

// Logs
pub mod logging;

// Internacionalização
pub mod i18n;

// ==========================================
// Reexportações
// ==========================================

pub use domain::{
    ClassifiedOrder, DeadlineBucket, OrderSnapshot, SlaCalculation, UrgencyInput,
    UrgencyResult, UrgencyTier,
};

pub use engine::{SlaCalculator, UrgencyBoard, UrgencyEngine};

pub use config::{ConfigManager, UrgencyConfig, UrgencyConfigReader};

// ==========================================
// Constantes
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Desenrola DCL";
