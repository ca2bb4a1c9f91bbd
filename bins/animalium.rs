use dotenvy::dotenv;
use tracing::{error, info};

use common::pagination::Pagination;
use common::utils::logging::{init_logging as init_subscriber, LogFormat};
use service::dashboard::dashboard_metrics;
use service::ClientManager;

fn init_logging() {
    // Load .env first so RUST_LOG, LOG_FORMAT and DATABASE_URL apply.
    dotenv().ok();
    let format = LogFormat::from_env();
    init_subscriber(format);
    info!(service = "animalium", event = "logger_init", ?format, "tracing subscriber initialized");
}

async fn run(cfg: configs::AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_and_migrate(&cfg.database).await?;

    let metrics = dashboard_metrics(&db).await?;
    info!(
        clients = metrics.clients,
        products = metrics.products,
        services = metrics.services,
        invoices = metrics.invoices,
        "dashboard"
    );

    let page = ClientManager::new(db).list(Pagination::new(0, cfg.paging.page_size)).await?;
    for c in &page.records {
        info!(id = c.id, name = %c.name, phone = %c.phone, address = %c.address, "client");
    }
    info!(
        page = page.info.page + 1,
        total_pages = page.info.total_pages(),
        total = page.info.total,
        "clients listed"
    );
    Ok(())
}

fn main() -> std::process::ExitCode {
    init_logging();
    let version = env!("CARGO_PKG_VERSION");

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "animalium", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    // Every database call runs on this one thread, in order.
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "animalium", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "animalium", event = "start", version, url = %cfg.database.url, "starting");

    match rt.block_on(run(cfg)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "animalium", event = "run_failed", error = %e, "bootstrap failed");
            std::process::ExitCode::FAILURE
        }
    }
}
