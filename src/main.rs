use catalog_backend::AppData;
use catalog_backend::api::build_app;
use catalog_backend::cli::{Cli, Commands};
use catalog_backend::config::{
    BootstrapSettings, LoggingConfig, connect_database, init_logging, migrate_database,
};
use clap::Parser;
use poem::{Server, listener::TcpListener};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&LoggingConfig::from_env())?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("{:?}", settings);

    let db = connect_database(&settings).await?;
    migrate_database(&db).await?;

    if *cli.command() == Commands::Migrate {
        tracing::info!("All migrations completed successfully");
        db.close().await?;
        return Ok(());
    }

    let app_data = AppData::init(db);

    let server_url = format!("http://localhost:{}/api", settings.server_port());
    let app = build_app(&app_data, &server_url);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", settings.server_port());

    Server::new(TcpListener::bind(settings.server_address()))
        .run_with_graceful_shutdown(
            app,
            async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => tracing::info!("Shutdown signal received"),
                    Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
                }
            },
            None,
        )
        .await?;

    app_data.close().await?;

    Ok(())
}
