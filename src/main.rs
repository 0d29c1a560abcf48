use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spa_compliance::config::{Config, LogFormat};
use spa_compliance::middleware::{json_error_handler, query_error_handler, AdminAuth, RequestId};
use spa_compliance::modules::faf::{FafExporter, MySqlFafRepository};
use spa_compliance::modules::reports::VatReportService;
use spa_compliance::modules::test_data::{MySqlTestDataRepository, TestDataImporter};
use spa_compliance::modules::{faf, health, reports, test_data, vat};

fn init_tracing(format: LogFormat, fallback_filter: String) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.app.log_format, config.app.log_filter());
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting spa compliance service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let exporter = Arc::new(
        FafExporter::new(Arc::new(MySqlFafRepository::new(db_pool.clone())))
            .with_query_timeout(config.app.export_timeout()),
    );
    let importer = Arc::new(TestDataImporter::new(Arc::new(
        MySqlTestDataRepository::new(db_pool.clone()),
    )));
    let vat_reports = Arc::new(VatReportService::new(exporter.clone()));

    let admin_key_hash = config.security.admin_api_key_hash.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(exporter.clone()))
            .app_data(web::Data::new(importer.clone()))
            .app_data(web::Data::new(vat_reports.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(health::controllers::configure)
            .service(
                web::scope("/api/admin")
                    .wrap(AdminAuth::new(admin_key_hash.clone()))
                    .configure(vat::controllers::configure)
                    .configure(test_data::controllers::configure)
                    .configure(faf::controllers::configure)
                    .configure(reports::controllers::configure),
            )
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
