use clap::Parser;

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    log::debug!("{cfg:?}");
    cli::run(cfg, args.command)
}
