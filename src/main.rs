// ==========================================
// Desenrola DCL - CLI de urgência de pagamento
// ==========================================
// Uso:
//   desenrola-dcl <pedidos.csv> [--bucket NOME] [--today AAAA-MM-DD]
//                 [--db CAMINHO] [--locale pt-BR|en] [--lab-days N] [--json]
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use desenrola_dcl::config::{get_default_db_path, ConfigManager, UrgencyConfigReader};
use desenrola_dcl::domain::{ClassifiedOrder, DeadlineBucket, SlaCalculation};
use desenrola_dcl::engine::labels::{bucket_label_in, format_days_remaining_in};
use desenrola_dcl::engine::{
    bucket_counts, filter_by_bucket, format_date_br, parse_date_from_input, sort_urgent_first,
    BucketCounts, UrgencyBoard,
};
use desenrola_dcl::i18n::{t_in, t_in_with_args, DEFAULT_LOCALE};
use desenrola_dcl::importer::OrderCsvImporter;
use desenrola_dcl::logging;
use std::path::PathBuf;
use tracing::{info, warn};

struct CliArgs {
    csv_path: PathBuf,
    bucket: Option<String>,
    today: Option<NaiveDate>,
    db_path: Option<String>,
    locale: String,
    lab_days: Option<i64>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut csv_path = None;
    let mut bucket = None;
    let mut today = None;
    let mut db_path = None;
    let mut locale = DEFAULT_LOCALE.to_string();
    let mut lab_days = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bucket" => bucket = Some(args.next().context("--bucket sem valor")?),
            "--today" => {
                let raw = args.next().context("--today sem valor")?;
                today = Some(
                    parse_date_from_input(&raw)
                        .with_context(|| format!("--today inválido: {}", raw))?,
                );
            }
            "--db" => db_path = Some(args.next().context("--db sem valor")?),
            "--locale" => locale = args.next().context("--locale sem valor")?,
            "--lab-days" => {
                let raw = args.next().context("--lab-days sem valor")?;
                lab_days = Some(
                    raw.parse::<i64>()
                        .with_context(|| format!("--lab-days inválido: {}", raw))?,
                );
            }
            "--json" => json = true,
            other if other.starts_with("--") => bail!("opção desconhecida: {}", other),
            other => csv_path = Some(PathBuf::from(other)),
        }
    }

    Ok(CliArgs {
        csv_path: csv_path.context("informe o arquivo CSV de pedidos")?,
        bucket,
        today,
        db_path,
        locale,
        lab_days,
        json,
    })
}

/// Monta o quadro com a configuração global e as sobreposições por loja/laboratório
async fn load_board(db_path: &str) -> Result<UrgencyBoard> {
    let manager = ConfigManager::new(db_path)
        .with_context(|| format!("falha ao abrir configuração em {}", db_path))?;
    let config = manager.load_urgency_config().await?;

    let mut board = UrgencyBoard::new(config);
    for (store_id, days) in manager.store_margin_overrides()? {
        board = board.with_store_margin(store_id, days);
    }
    for (lab_id, days) in manager.lab_sla_overrides()? {
        board = board.with_lab_fallback_sla(lab_id, days);
    }

    info!(?config, "parâmetros de urgência");
    Ok(board)
}

fn print_report(
    orders: &[ClassifiedOrder],
    counts: &BucketCounts,
    bucket: Option<DeadlineBucket>,
    locale: &str,
) {
    println!(
        "{} - {}",
        t_in("report.header", locale),
        bucket_label_in(bucket, locale)
    );

    for c in orders {
        let deadline = c
            .urgency
            .payment_deadline
            .map(format_date_br)
            .unwrap_or_else(|| "-".to_string());
        let days = if c.urgency.is_neutral() {
            "-".to_string()
        } else {
            format_days_remaining_in(c.urgency.days_remaining, locale)
        };

        println!(
            "{:<14} {} {:<16} {:<18} {:<10} {:>3}%{}",
            c.order.order_id,
            c.urgency.icon,
            c.urgency.label,
            days,
            deadline,
            c.urgency.urgency_percent,
            if c.urgency.should_pulse { " *" } else { "" }
        );
    }

    let values = [
        counts.vencido,
        counts.hoje,
        counts.amanha,
        counts.proximos_3_dias,
        counts.esta_semana,
        counts.total,
    ]
    .map(|v| v.to_string());
    let names = ["vencido", "hoje", "amanha", "proximos", "semana", "total"];
    let args: Vec<(&str, &str)> = names
        .iter()
        .zip(values.iter())
        .map(|(k, v)| (*k, v.as_str()))
        .collect();

    println!("{}", t_in_with_args("report.counts", locale, &args));
}

fn print_sla(sla: &SlaCalculation, locale: &str) {
    let days = sla.customer_promise_days.to_string();
    let args = [
        ("lab", sla.lab_sla_date_formatted.as_str()),
        ("promise", sla.customer_promise_date_formatted.as_str()),
        ("days", days.as_str()),
    ];
    println!("{}", t_in_with_args("report.sla", locale, &args));
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args = parse_args(std::env::args().skip(1))?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let db_path = args.db_path.clone().unwrap_or_else(get_default_db_path);
    let board = load_board(&db_path).await?;

    let orders = OrderCsvImporter::new().import_file(&args.csv_path)?;
    let mut classified = board.evaluate_batch(orders, today);
    sort_urgent_first(&mut classified);

    let bucket = args.bucket.as_deref().and_then(DeadlineBucket::parse);
    if let (Some(raw), None) = (args.bucket.as_deref(), bucket) {
        warn!(bucket = raw, "filtro desconhecido, mostrando todos");
    }

    let counts = bucket_counts(&classified);
    let visible = filter_by_bucket(&classified, bucket);

    // SLA de um pedido novo, com a margem do cliente da configuração
    let sla = args
        .lab_days
        .map(|days| board.sla_calculator().calculate(today, days, None));

    if args.json {
        let output = match &sla {
            Some(sla) => serde_json::json!({ "orders": visible, "sla": sla }),
            None => serde_json::json!(visible),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&visible, &counts, bucket, &args.locale);
        if let Some(sla) = &sla {
            print_sla(sla, &args.locale);
        }
    }

    Ok(())
}
