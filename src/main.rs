use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use log::{debug, info};

use github_repository_list::{
    GITHUB_API_ENDPOINT, HtmlFileRenderTarget, MemoryRenderTarget, RepositoryListLoader,
    RepositoryListWidget, RestFetcher, StdResult,
};

/// Command line arguments for the GitHub repository list
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Login of the GitHub user whose public repositories are listed
    username: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_API_ENDPOINT)]
    api_endpoint: String,

    /// HTML page rewritten with the list (printed to standard output when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Id of the container element of the HTML page
    #[arg(long, default_value = "repositories")]
    container_id: String,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");
    info!("Listing repositories of {}", args.username);

    let loader = build_loader(&args)?;
    match &args.output {
        Some(path) => {
            let target = Arc::new(HtmlFileRenderTarget::new(path, &args.container_id));
            loader
                .load_repositories(&args.username, target.clone())
                .await?
                .await??;
            info!("Repositories written to {}", target.path().display());
        }
        None => {
            let target = Arc::new(MemoryRenderTarget::default());
            loader
                .load_repositories(&args.username, target.clone())
                .await?
                .await??;
            println!("{}", target.to_html().await);
        }
    }

    Ok(())
}

fn build_loader(args: &Args) -> StdResult<Arc<dyn RepositoryListLoader>> {
    let fetcher = Arc::new(RestFetcher::try_new(&args.api_endpoint)?);

    Ok(Arc::new(RepositoryListWidget::new(fetcher)))
}
