use crate::{
    args::InspectArgs, client::ClientConfig, json, sources::SourceResolver, utils, Client, Config,
};
use log::debug;

/// Extract and print the metadata of a url.
pub async fn inspect(config: &Config, args: &InspectArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let client = Client::new(&ClientConfig::new(&config.settings))?;
    let resolver = SourceResolver::new(client, &config.settings.sources)?;
    let output = inspect_url(&resolver, &args.url).await?;
    println!("{output}");

    Ok(())
}

pub async fn inspect_url(resolver: &SourceResolver, url: &str) -> Result<String, anyhow::Error> {
    let url = utils::parse_url(url)?;
    let resolved = resolver.resolve(&url).await?;

    Ok(format!(
        "Source: {}\n{}",
        resolved.kind,
        json::to_pretty_string(&resolved.metadata)?
    ))
}
