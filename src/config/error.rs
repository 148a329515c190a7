// ==========================================
// Desenrola DCL - Erros da camada de configuração
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("falha no banco de configuração: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("falha ao obter lock da conexão: {0}")]
    LockError(String),

    #[error("valor inválido para {key} (escopo {scope_id}): {value}")]
    InvalidValue {
        scope_id: String,
        key: String,
        value: String,
    },

    #[error("falha ao serializar configuração: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
