// ==========================================
// Desenrola DCL - Importação de pedidos (CSV)
// ==========================================
// Cabeçalho: order_id,store_id,lab_id,status,promised_date,order_date
// Data inválida não é erro: vira None (resultado neutro na urgência)
// ==========================================

use crate::domain::order::OrderSnapshot;
use crate::engine::dates::parse_date_like;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub mod columns {
    pub const ORDER_ID: &str = "order_id";
    pub const STORE_ID: &str = "store_id";
    pub const LAB_ID: &str = "lab_id";
    pub const STATUS: &str = "status";
    pub const PROMISED_DATE: &str = "promised_date";
    pub const ORDER_DATE: &str = "order_date";
}

// ==========================================
// CsvParser - linhas brutas
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// Lê o arquivo em linhas cabeçalho → valor
    pub fn parse_to_raw_records(&self, path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        self.parse_reader(file)
    }

    pub fn parse_reader<R: Read>(&self, reader: R) -> ImportResult<Vec<HashMap<String, String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // linhas com tamanhos diferentes
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // linha totalmente vazia
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row);
        }

        Ok(records)
    }
}

// ==========================================
// OrderCsvImporter - linhas → OrderSnapshot
// ==========================================
pub struct OrderCsvImporter {
    parser: CsvParser,
}

impl Default for OrderCsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderCsvImporter {
    pub fn new() -> Self {
        Self { parser: CsvParser }
    }

    pub fn import_file(&self, path: &Path) -> ImportResult<Vec<OrderSnapshot>> {
        let rows = self.parser.parse_to_raw_records(path)?;
        let orders = self.map_rows(rows)?;
        info!(path = %path.display(), count = orders.len(), "pedidos importados");
        Ok(orders)
    }

    pub fn import_reader<R: Read>(&self, reader: R) -> ImportResult<Vec<OrderSnapshot>> {
        let rows = self.parser.parse_reader(reader)?;
        self.map_rows(rows)
    }

    fn map_rows(&self, rows: Vec<HashMap<String, String>>) -> ImportResult<Vec<OrderSnapshot>> {
        if let Some(first) = rows.first() {
            if !first.contains_key(columns::ORDER_ID) {
                return Err(ImportError::MissingColumn(columns::ORDER_ID.to_string()));
            }
        }

        rows.into_iter()
            .enumerate()
            // linha 1 é o cabeçalho
            .map(|(idx, row)| Self::map_row(idx + 2, row))
            .collect()
    }

    fn map_row(line: usize, mut row: HashMap<String, String>) -> ImportResult<OrderSnapshot> {
        let order_id = row
            .remove(columns::ORDER_ID)
            .filter(|v| !v.is_empty())
            .ok_or(ImportError::PrimaryKeyMissing(line))?;

        let mut text = |key: &str| row.remove(key).filter(|v| !v.is_empty());

        let store_id = text(columns::STORE_ID);
        let lab_id = text(columns::LAB_ID);
        let status = text(columns::STATUS);
        let promised_raw = text(columns::PROMISED_DATE);
        let order_raw = text(columns::ORDER_DATE);

        Ok(OrderSnapshot {
            promised_date: Self::date_field(line, columns::PROMISED_DATE, promised_raw),
            order_date: Self::date_field(line, columns::ORDER_DATE, order_raw),
            order_id,
            store_id,
            lab_id,
            status,
        })
    }

    fn date_field(line: usize, field: &str, raw: Option<String>) -> Option<chrono::NaiveDate> {
        let raw = raw?;
        let parsed = parse_date_like(&raw);
        if parsed.is_none() {
            warn!(line, field, value = %raw, "data inválida ignorada");
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_import_reader_maps_fields() {
        let csv = "order_id , store_id,lab_id,status,promised_date,order_date\n\
                   P-100,centro,hoya,AG_PAGAMENTO,2026-04-20,2026-04-01\n\
                   P-101,,,,,\n\
                   ,,,,,\n";
        let orders = OrderCsvImporter::new().import_reader(csv.as_bytes()).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, "P-100");
        assert_eq!(orders[0].store_id.as_deref(), Some("centro"));
        assert_eq!(orders[0].status.as_deref(), Some("AG_PAGAMENTO"));
        assert_eq!(
            orders[0].promised_date,
            NaiveDate::from_ymd_opt(2026, 4, 20)
        );
        assert_eq!(orders[1].store_id, None);
        assert_eq!(orders[1].promised_date, None);
    }

    #[test]
    fn test_invalid_date_becomes_none() {
        let csv = "order_id,promised_date,order_date\nP-1,ontem,01/04/2026\n";
        let orders = OrderCsvImporter::new().import_reader(csv.as_bytes()).unwrap();
        assert_eq!(orders[0].promised_date, None);
        assert_eq!(orders[0].order_date, NaiveDate::from_ymd_opt(2026, 4, 1));
    }

    #[test]
    fn test_missing_order_id_reports_line() {
        let csv = "order_id,promised_date\nP-1,2026-04-20\n,2026-04-21\n";
        let err = OrderCsvImporter::new().import_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::PrimaryKeyMissing(3)));
    }

    #[test]
    fn test_missing_order_id_column() {
        let csv = "pedido,promised_date\nP-1,2026-04-20\n";
        let err = OrderCsvImporter::new().import_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(_)));
    }
}
