// ==========================================
// Desenrola DCL - Camada de importação
// ==========================================
// Responsabilidade: snapshot de pedidos vindo de fora (CSV)
// ==========================================

pub mod error;
pub mod order_csv;

pub use error::{ImportError, ImportResult};
pub use order_csv::{CsvParser, OrderCsvImporter};
