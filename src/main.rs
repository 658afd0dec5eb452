mod cli;

use clap::Parser;
use xbm_color_rs::logger;

use tracing::error;

fn main() {
    let cli = cli::Cli::parse();
    logger::init(cli.log_level());

    if let Err(e) = cli::execute(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
