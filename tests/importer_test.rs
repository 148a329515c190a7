// ==========================================
// Importação de pedidos (CSV) - testes de integração
// ==========================================

mod test_helpers;

use desenrola_dcl::domain::UrgencyTier;
use desenrola_dcl::engine::UrgencyBoard;
use desenrola_dcl::importer::{ImportError, OrderCsvImporter};
use std::path::Path;
use test_helpers::{date, write_temp_file};

const ORDERS_CSV: &str = "\
order_id,store_id,lab_id,status,promised_date,order_date
DCL-100,centro,hoya,AG_PAGAMENTO,2026-03-20,2026-03-01
DCL-101,shopping,,AG_PAGAMENTO,24/03/2026,
DCL-102,centro,zeiss,AG_PAGAMENTO,,2026-03-02
DCL-103,centro,zeiss,AG_PAGAMENTO,amanhã,2026-03-02
,,,,,
";

#[test]
fn test_import_file_maps_orders() {
    let file = write_temp_file(ORDERS_CSV, ".csv").expect("Failed to write csv");
    let orders = OrderCsvImporter::new()
        .import_file(file.path())
        .expect("import should succeed");

    // linha totalmente vazia é ignorada
    assert_eq!(orders.len(), 4);

    assert_eq!(orders[0].order_id, "DCL-100");
    assert_eq!(orders[0].store_id.as_deref(), Some("centro"));
    assert_eq!(orders[0].lab_id.as_deref(), Some("hoya"));
    assert_eq!(orders[0].promised_date, Some(date(2026, 3, 20)));
    assert_eq!(orders[0].order_date, Some(date(2026, 3, 1)));

    assert_eq!(orders[1].lab_id, None);
    assert_eq!(orders[1].promised_date, Some(date(2026, 3, 24)));
    assert_eq!(orders[1].order_date, None);

    assert_eq!(orders[2].promised_date, None);
    // data inválida vira None
    assert_eq!(orders[3].promised_date, None);
}

#[test]
fn test_imported_orders_feed_the_board() {
    let file = write_temp_file(ORDERS_CSV, ".csv").expect("Failed to write csv");
    let orders = OrderCsvImporter::new().import_file(file.path()).unwrap();

    let classified = UrgencyBoard::default().evaluate_batch(orders, date(2026, 3, 10));

    // DCL-100: prazo = data do pedido (01/03) → 9 dias vencido
    assert_eq!(classified[0].urgency.days_remaining, -9);
    assert_eq!(classified[0].urgency.tier, UrgencyTier::Critico);
    // DCL-101: sem data do pedido → 24/03 - 10 = 14/03
    assert_eq!(classified[1].urgency.days_remaining, 4);
    assert_eq!(classified[1].urgency.tier, UrgencyTier::Atencao);
    assert!(classified[2].urgency.is_neutral());
    assert!(classified[3].urgency.is_neutral());
}

#[test]
fn test_file_not_found() {
    let result = OrderCsvImporter::new().import_file(Path::new("/nao/existe/pedidos.csv"));
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp_file(ORDERS_CSV, ".xlsx").expect("Failed to write file");
    let result = OrderCsvImporter::new().import_file(file.path());
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_order_id_column() {
    let csv = "store_id,promised_date\ncentro,2026-03-20\n";
    let result = OrderCsvImporter::new().import_reader(csv.as_bytes());
    assert!(matches!(result, Err(ImportError::MissingColumn(_))));
}

#[test]
fn test_empty_order_id_reports_line() {
    let csv = "order_id,promised_date\nDCL-1,2026-03-20\n,2026-03-21\n";
    let result = OrderCsvImporter::new().import_reader(csv.as_bytes());
    assert!(matches!(result, Err(ImportError::PrimaryKeyMissing(3))));
}
