use crate::config::SiteConfig;
use crate::io::{LocalPageWriter, LocalTemplateStore};
use crate::services::build::SiteBuilder;
use crate::services::contentful::ContentfulClient;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod io;
mod logging;
mod parser;
mod render;
mod services;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // pick up CONTENTFUL_* and SITE_* from a local .env when present
    dotenv::dotenv().ok();

    logging::init_logging()?;

    // load centralized config
    let config = Arc::new(SiteConfig::from_env().context("Failed to load configuration")?);

    let source = ContentfulClient::new(config.contentful.clone())?;
    let templates = LocalTemplateStore::new(config.template_dir.clone());
    let writer = LocalPageWriter::new(config.public_dir.clone());

    let builder = SiteBuilder::new(
        Box::new(source),
        Box::new(templates),
        Box::new(writer),
        config.clone(),
    );

    let report = builder.build().await.context("Site build failed")?;

    info!(
        public_dir = %config.public_dir.display(),
        pages = report.pages_written + report.pages_unchanged,
        "done"
    );

    Ok(())
}
