mod cli;
mod commands;

use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;

use esplorer_core::HttpEsploraClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    let default_filter = if args.debug { "info,esplorer_core=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let client = build_client(&args)?;
    tracing::info!(url = client.base_url(), "using explorer");

    let value = commands::run(&client, args.command).await?;
    println!("{}", commands::render(&value)?);
    Ok(())
}

/// Use reqwest's defaults unless a timeout was asked for.
fn build_client(args: &cli::Cli) -> eyre::Result<HttpEsploraClient> {
    if args.connect_timeout_secs.is_none() && args.timeout_secs.is_none() {
        return HttpEsploraClient::new(&args.url, args.debug)
            .wrap_err("while configuring the explorer client");
    }

    let mut builder = HttpEsploraClient::transport_builder();
    if let Some(secs) = args.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let transport = builder.build().wrap_err("build HTTP transport")?;

    HttpEsploraClient::with_transport(&args.url, args.debug, transport)
        .wrap_err("while configuring the explorer client")
}
