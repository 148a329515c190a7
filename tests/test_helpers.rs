// ==========================================
// Auxiliares de teste
// ==========================================
// Banco temporário de configuração, pedidos de exemplo e CSV em disco
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use desenrola_dcl::db::{ensure_config_schema, open_sqlite_connection};
use desenrola_dcl::domain::OrderSnapshot;
use rusqlite::{params, Connection};
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// Cria banco temporário com o schema de configuração
///
/// # Retorno
/// - NamedTempFile: arquivo temporário (manter vivo durante o teste)
/// - String: caminho do banco
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = open_sqlite_connection(&db_path)?;
    ensure_config_schema(&conn)?;

    Ok((temp_file, db_path))
}

pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(open_sqlite_connection(db_path)?)
}

/// Grava um valor cru em config_kv, criando o escopo se preciso
pub fn insert_config_value(
    conn: &Connection,
    scope_type: &str,
    scope_key: &str,
    key: &str,
    value: &str,
) -> Result<(), Box<dyn Error>> {
    let scope_id = match scope_type {
        "GLOBAL" => "global".to_string(),
        "STORE" => format!("store/{}", scope_key),
        _ => format!("lab/{}", scope_key),
    };

    conn.execute(
        "INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key) VALUES (?1, ?2, ?3)",
        params![scope_id, scope_type, scope_key],
    )?;
    conn.execute(
        "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)",
        params![scope_id, key, value],
    )?;
    Ok(())
}

/// Configuração de referência:
/// - global: margem 2, SLA reserva 5, margem cliente 1
/// - loja "shopping": margem 4
/// - laboratório "essilor": SLA reserva 10
pub fn insert_test_config(conn: &Connection) -> Result<(), Box<dyn Error>> {
    insert_config_value(conn, "GLOBAL", "global", "safety_margin_days", "2")?;
    insert_config_value(conn, "GLOBAL", "global", "fallback_lab_sla_days", "5")?;
    insert_config_value(conn, "GLOBAL", "global", "customer_margin_days", "1")?;
    insert_config_value(conn, "STORE", "shopping", "safety_margin_days", "4")?;
    insert_config_value(conn, "LAB", "essilor", "fallback_lab_sla_days", "10")?;
    Ok(())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Pedido com datas; loja e laboratório opcionais
pub fn order(
    id: &str,
    promised: Option<NaiveDate>,
    ordered: Option<NaiveDate>,
    store_id: Option<&str>,
    lab_id: Option<&str>,
) -> OrderSnapshot {
    OrderSnapshot {
        store_id: store_id.map(str::to_string),
        lab_id: lab_id.map(str::to_string),
        status: Some("AG_PAGAMENTO".to_string()),
        promised_date: promised,
        order_date: ordered,
        ..OrderSnapshot::new(id)
    }
}

/// Grava o conteúdo num arquivo temporário com a extensão dada
pub fn write_temp_file(content: &str, suffix: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
