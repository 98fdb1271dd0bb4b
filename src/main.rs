use anyhow::Context;
use catalog_browser::api::HttpProductSource;
use catalog_browser::catalog::PageFetcher;
use catalog_browser::cli::Cli;
use catalog_browser::logging::init_tracing;
use catalog_browser::ui::runtime;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing();
    tracing::info!(base_url = %config.api.base_url, page_size = config.api.page_size, "Starting catalog browser");

    let source = HttpProductSource::new(&config.api).context("Failed to build HTTP client")?;
    let fetcher = PageFetcher::new(source, &config.api);

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(&config, fetcher, tokio_runtime.handle()).context("Terminal UI failed")?;

    tokio_runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}
