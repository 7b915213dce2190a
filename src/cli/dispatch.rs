use crate::cli::args::Cli;
use crate::executor::{self, GENERIC_FAILURE};
use crate::model::ExecTarget;
use crate::orchestrator::{self, probe};
use log::{debug, error, warn};

/// Resolve, probe, route, and run a parsed command line, returning the exit code.
pub fn handle(cli: Cli) -> i32 {
    let args = cli.command_args();
    let command = match orchestrator::resolve(cli.command_name(), args) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            return GENERIC_FAILURE;
        }
    };
    debug!("Resolved command: {:?}", command);

    let used = usize::from(command.takes_arg());
    if args.len() > used {
        warn!("Ignoring extra arguments: {}", args[used..].join(" "));
    }

    let variant = match probe::detect() {
        Ok(variant) => variant,
        Err(e) => {
            error!("{}", e);
            return GENERIC_FAILURE;
        }
    };

    let target = ExecTarget::new(variant)
        .with_service(cli.service.as_str())
        .with_compose_file(cli.file.clone());
    debug!("Exec target: {:?}", target);

    let argv = orchestrator::route(&command, &target);

    if cli.dry_run {
        println!("Dry run: {}", argv.join(" "));
        return 0;
    }

    executor::run(&argv)
}
