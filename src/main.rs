use anyhow::Context;
use cd_inventory::{
    cli::{self, parsers::CliParser},
    config::Config,
};
use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _cli = CliParser::parse();

    let config = Config::from_env();
    info!("using inventory file '{}'", config.inventory_file.display());

    cli::run_client(&config).context("the inventory session ended with an error")
}
