use clap::Parser;
use compose_migrate::cli::args::Cli;
use compose_migrate::cli::dispatch::handle;
use compose_migrate::executor::GENERIC_FAILURE;
use compose_migrate::logger::setup_logger;

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        // Help and version are not errors.
        if !e.use_stderr() {
            e.exit();
        }
        eprint!("{e}");
        std::process::exit(GENERIC_FAILURE);
    });

    setup_logger(cli.verbose);
    std::process::exit(handle(cli));
}
