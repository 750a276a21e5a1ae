use crate::cli::ServeArgs;
use crate::infra::{AppState, DiscoveryState, InMemoryAccountStore};
use crate::routes::with_discovery_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillup::accounts::{AccountService, AccountStore, JsonFileStore};
use skillup::config::AppConfig;
use skillup::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let discovery = DiscoveryState::load(&config.catalog)?;
    info!(
        jobs = discovery.jobs.len(),
        courses = discovery.courses.len(),
        "listing catalogs loaded"
    );

    if args.ephemeral_accounts {
        serve(config, discovery, InMemoryAccountStore::default()).await
    } else {
        info!(path = %config.accounts.store_path.display(), "using account file");
        let store = JsonFileStore::new(config.accounts.store_path.clone());
        serve(config, discovery, store).await
    }
}

async fn serve<S>(config: AppConfig, discovery: DiscoveryState, store: S) -> Result<(), AppError>
where
    S: AccountStore + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let accounts = Arc::new(AccountService::new(Arc::new(store)));

    let app = with_discovery_routes(accounts)
        .layer(Extension(discovery))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skillup discovery service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
