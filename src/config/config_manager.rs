// ==========================================
// Desenrola DCL - Gerenciador de configuração
// ==========================================
// Armazenamento: tabela config_kv (key-value + escopo)
// Escopos: global, store/<id>, lab/<id>
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::urgency_config::{
    DEFAULT_CUSTOMER_MARGIN_DAYS, DEFAULT_FALLBACK_LAB_SLA_DAYS, DEFAULT_SAFETY_MARGIN_DAYS,
    MAX_CONFIG_DAYS,
};
use crate::config::urgency_config_trait::UrgencyConfigReader;
use crate::db::{configure_sqlite_connection, ensure_config_schema, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

// ==========================================
// ConfigScope - escopo de configuração
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Store { store_id: String },
    Lab { lab_id: String },
}

impl ConfigScope {
    pub fn scope_id(&self) -> String {
        match self {
            ConfigScope::Global => "global".to_string(),
            ConfigScope::Store { store_id } => format!("store/{}", store_id),
            ConfigScope::Lab { lab_id } => format!("lab/{}", lab_id),
        }
    }

    fn scope_type(&self) -> &'static str {
        match self {
            ConfigScope::Global => "GLOBAL",
            ConfigScope::Store { .. } => "STORE",
            ConfigScope::Lab { .. } => "LAB",
        }
    }

    fn scope_key(&self) -> &str {
        match self {
            ConfigScope::Global => "global",
            ConfigScope::Store { store_id } => store_id,
            ConfigScope::Lab { lab_id } => lab_id,
        }
    }
}

// ==========================================
// Chaves de configuração
// ==========================================
pub mod config_keys {
    // margem para montagem na loja (classificador de urgência)
    pub const SAFETY_MARGIN_DAYS: &str = "safety_margin_days";
    // SLA do laboratório quando o pedido não tem data
    pub const FALLBACK_LAB_SLA_DAYS: &str = "fallback_lab_sla_days";
    // margem da promessa ao cliente (calculadora de SLA)
    pub const CUSTOMER_MARGIN_DAYS: &str = "customer_margin_days";
}

/// Menor valor aceito para a chave
fn min_days_for(key: &str) -> i64 {
    if key == config_keys::FALLBACK_LAB_SLA_DAYS {
        1
    } else {
        0
    }
}

/// Converte o texto gravado em dias, dentro de [mínimo da chave, MAX_CONFIG_DAYS]
fn parse_days(scope_id: &str, key: &str, raw: &str) -> ConfigResult<i64> {
    let invalid = || ConfigError::InvalidValue {
        scope_id: scope_id.to_string(),
        key: key.to_string(),
        value: raw.to_string(),
    };

    let days: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if days < min_days_for(key) || days > MAX_CONFIG_DAYS {
        return Err(invalid());
    }
    Ok(days)
}

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Abre o banco e garante o schema de configuração
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;
        info!(db_path, "configuração carregada");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// A partir de conexão existente (PRAGMAs reaplicadas, idempotente)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| ConfigError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    fn lock(&self) -> ConfigResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    /// Valor bruto de um escopo
    pub fn get_value(&self, scope: &ConfigScope, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![scope.scope_id(), key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Grava um valor em dias, validando a faixa
    pub fn set_days(&self, scope: &ConfigScope, key: &str, days: i64) -> ConfigResult<()> {
        let scope_id = scope.scope_id();
        if days < min_days_for(key) || days > MAX_CONFIG_DAYS {
            return Err(ConfigError::InvalidValue {
                scope_id,
                key: key.to_string(),
                value: days.to_string(),
            });
        }

        let conn = self.lock()?;
        conn.execute(
            "INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key) VALUES (?1, ?2, ?3)",
            params![scope_id, scope.scope_type(), scope.scope_key()],
        )?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value, updated_at) VALUES (?1, ?2, ?3, datetime('now'))
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![scope_id, key, days.to_string()],
        )?;

        debug!(scope_id = %scope_id, key, days, "configuração gravada");
        Ok(())
    }

    /// Lê um valor em dias; ausente → None, inválido → erro
    fn get_days(&self, scope: &ConfigScope, key: &str) -> ConfigResult<Option<i64>> {
        match self.get_value(scope, key)? {
            Some(raw) => parse_days(&scope.scope_id(), key, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Escopo específico → global → padrão
    fn resolve_days(
        &self,
        specific: Option<ConfigScope>,
        key: &str,
        default: i64,
    ) -> ConfigResult<i64> {
        if let Some(scope) = specific {
            if let Some(days) = self.get_days(&scope, key)? {
                return Ok(days);
            }
        }
        Ok(self
            .get_days(&ConfigScope::Global, key)?
            .unwrap_or(default))
    }

    /// Sobreposições de uma chave por tipo de escopo: id → dias
    fn overrides(&self, prefix: &str, key: &str) -> ConfigResult<HashMap<String, i64>> {
        let rows: Vec<(String, String)> = {
            let conn = self.lock()?;
            let mut stmt = conn.prepare(
                "SELECT scope_id, value FROM config_kv WHERE key = ?1 AND scope_id LIKE ?2 ORDER BY scope_id",
            )?;
            let mapped = stmt.query_map(params![key, format!("{}/%", prefix)], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            let collected: Vec<(String, String)> = mapped.collect::<Result<_, _>>()?;
            collected
        };

        let mut result = HashMap::new();
        for (scope_id, raw) in rows {
            let id = scope_id[prefix.len() + 1..].to_string();
            let days = parse_days(&scope_id, key, &raw)?;
            result.insert(id, days);
        }
        Ok(result)
    }

    /// Margem de segurança por loja
    pub fn store_margin_overrides(&self) -> ConfigResult<HashMap<String, i64>> {
        self.overrides("store", config_keys::SAFETY_MARGIN_DAYS)
    }

    /// SLA reserva por laboratório
    pub fn lab_sla_overrides(&self) -> ConfigResult<HashMap<String, i64>> {
        self.overrides("lab", config_keys::FALLBACK_LAB_SLA_DAYS)
    }

    /// Snapshot de toda a configuração em JSON: { scope_id: { key: value } }
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT scope_id, key, value FROM config_kv ORDER BY scope_id, key")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut snapshot: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for row in rows {
            let (scope_id, key, value) = row?;
            snapshot.entry(scope_id).or_default().insert(key, value);
        }

        Ok(serde_json::to_string(&json!(snapshot))?)
    }
}

// ==========================================
// UrgencyConfigReader
// ==========================================
#[async_trait]
impl UrgencyConfigReader for ConfigManager {
    async fn get_safety_margin_days(&self, store_id: Option<&str>) -> ConfigResult<i64> {
        self.resolve_days(
            store_id.map(|id| ConfigScope::Store {
                store_id: id.to_string(),
            }),
            config_keys::SAFETY_MARGIN_DAYS,
            DEFAULT_SAFETY_MARGIN_DAYS,
        )
    }

    async fn get_fallback_lab_sla_days(&self, lab_id: Option<&str>) -> ConfigResult<i64> {
        self.resolve_days(
            lab_id.map(|id| ConfigScope::Lab {
                lab_id: id.to_string(),
            }),
            config_keys::FALLBACK_LAB_SLA_DAYS,
            DEFAULT_FALLBACK_LAB_SLA_DAYS,
        )
    }

    async fn get_customer_margin_days(&self) -> ConfigResult<i64> {
        self.resolve_days(
            None,
            config_keys::CUSTOMER_MARGIN_DAYS,
            DEFAULT_CUSTOMER_MARGIN_DAYS,
        )
    }
}
