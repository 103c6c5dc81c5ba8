use clap::Parser;
use pdf_watch::{Args, Monitor};
use tracing::debug;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let config = Args::parse().into_config();
    debug!("{:?}", config.target);

    let outcome = Monitor::with_http(config).run().await?;
    debug!("Finished with {:?}", outcome);

    Ok(())
}
