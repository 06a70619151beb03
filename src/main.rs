use clap::Parser;

use hogdex::args::CliArgs;
use hogdex::config::Config;
use hogdex::logging::init_tracing;
use hogdex::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    runtime::run(config)
}
