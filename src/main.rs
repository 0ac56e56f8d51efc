use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Chess;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Chess::from_args().execute();
}
