use crate::review::launch;
use anyhow::Result;
use clap::Parser;

mod arxiv;
mod cli;
mod config;
mod exports;
mod llm;
mod review;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let (config, request) = args.into_config();

    launch(&config, &request).await
}
