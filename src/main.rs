use clap::Parser;
use sigengine::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    sigengine::cli::init_tracing(cli.verbose);
    run(cli)
}
