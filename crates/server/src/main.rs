use database::{SeaOrmRepository, db::create_connection};
use log::{error, info, warn};
use migration::{Migrator, MigratorTrait};
use server::{app, config::Config, state::AppState, utils::shutdown::shutdown_signal};
use std::process;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Migrations applied");
    }

    let auth = match &config.oidc_issuer_url {
        Some(issuer_url) => {
            let mut builder = <OAuth2ResourceServer>::builder().issuer_url(issuer_url.as_str());
            if let Some(audience) = &config.oidc_audience {
                builder = builder.audiences(&[audience.as_str()]);
            }
            let server = builder
                .build()
                .await
                .map_err(|e| format!("Failed to build OAuth2ResourceServer: {e:?}"))?;
            Some(server)
        }
        None => {
            warn!("OIDC_ISSUER_URL not set, API routes are not authenticated");
            None
        }
    };

    let router = app(AppState::new(SeaOrmRepository::new(db)), auth);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
