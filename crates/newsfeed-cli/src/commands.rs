use std::sync::Arc;

use newsfeed_core::{
    DefaultConfiguration, Endpoint, NewsClient, ReqwestHttpClient, RequestConfig,
};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let mut client = NewsClient::new(
        Arc::new(ReqwestHttpClient::new()),
        DefaultConfiguration::from_env(),
    );
    if let Some(timeout_ms) = cli.timeout_ms {
        client = client.with_timeout_ms(timeout_ms);
    }

    match &cli.command {
        Command::Everything(args) => {
            search(&client, args.to_config(Endpoint::Everything), cli).await
        }
        Command::TopHeadlines(args) => {
            search(&client, args.to_config(Endpoint::TopHeadlines), cli).await
        }
        Command::Url(args) => {
            let request = client.prepare(args.query.to_config(args.endpoint))?;
            println!("{}", request.redacted_url());
            Ok(())
        }
    }
}

async fn search(client: &NewsClient, config: RequestConfig, cli: &Cli) -> Result<(), CliError> {
    let data = client.fetch(config).await?;

    if let Some((code, message)) = data.upstream_error() {
        return Err(CliError::Upstream {
            code: code.to_owned(),
            message: message.to_owned(),
        });
    }

    info!(
        total = data.total_results,
        shown = data.articles.len(),
        "fetched articles"
    );
    output::render(&data, cli.format, cli.pretty)
}
