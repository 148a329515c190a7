// ==========================================
// Desenrola DCL - Camada de configuração
// ==========================================
// Responsabilidade: parâmetros de urgência/SLA com sobreposição por escopo
// Armazenamento: tabela config_kv
// ==========================================

pub mod config_manager;
pub mod error;
pub mod urgency_config;
pub mod urgency_config_trait;

pub use config_manager::{config_keys, ConfigManager, ConfigScope};
pub use error::{ConfigError, ConfigResult};
pub use urgency_config::UrgencyConfig;
pub use urgency_config_trait::UrgencyConfigReader;

/// Caminho padrão do banco de configuração
///
/// `DESENROLA_DCL_DB_PATH` tem precedência; senão, diretório de dados do usuário.
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("DESENROLA_DCL_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./desenrola_dcl.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("desenrola-dcl");
        // sem diretório, fica o caminho relativo
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("desenrola_dcl.db");
        }
    }

    path.to_string_lossy().to_string()
}
