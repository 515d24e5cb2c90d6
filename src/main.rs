use std::env;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
