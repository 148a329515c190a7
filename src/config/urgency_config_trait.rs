// ==========================================
// Desenrola DCL - Trait de leitura de configuração de urgência
// ==========================================
// Só leitura; escrita fica no ConfigManager
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::urgency_config::UrgencyConfig;
use async_trait::async_trait;

// ==========================================
// UrgencyConfigReader
// ==========================================
// Implementação: ConfigManager (tabela config_kv)
#[async_trait]
pub trait UrgencyConfigReader: Send + Sync {
    /// Margem de segurança da loja, ou a global
    ///
    /// # Padrão
    /// - 3
    async fn get_safety_margin_days(&self, store_id: Option<&str>) -> ConfigResult<i64>;

    /// SLA reserva do laboratório (pedido sem data), ou o global
    ///
    /// # Padrão
    /// - 7
    async fn get_fallback_lab_sla_days(&self, lab_id: Option<&str>) -> ConfigResult<i64>;

    /// Margem da promessa ao cliente (criação do pedido)
    ///
    /// # Padrão
    /// - 2
    async fn get_customer_margin_days(&self) -> ConfigResult<i64>;

    /// Parâmetros globais resolvidos
    async fn load_urgency_config(&self) -> ConfigResult<UrgencyConfig> {
        Ok(UrgencyConfig {
            safety_margin_days: self.get_safety_margin_days(None).await?,
            fallback_lab_sla_days: self.get_fallback_lab_sla_days(None).await?,
            customer_margin_days: self.get_customer_margin_days().await?,
        })
    }
}
