// ==========================================
// Desenrola DCL - Erros de importação de pedidos
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    // ===== arquivo =====
    #[error("arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("formato não suportado: {0} (apenas .csv)")]
    UnsupportedFormat(String),

    #[error("falha ao ler arquivo: {0}")]
    FileReadError(String),

    #[error("falha ao interpretar CSV: {0}")]
    CsvParseError(String),

    // ===== dados =====
    #[error("order_id vazio (linha {0})")]
    PrimaryKeyMissing(usize),

    #[error("coluna obrigatória ausente: {0}")]
    MissingColumn(String),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
