//! Process-level plumbing shared by the `json2js` and `gen-manifest` binaries.

use clap::Parser;
use std::fmt::Display;
use std::process::ExitCode;

/// Parse arguments, exiting with status 1 on usage errors.
///
/// clap's own exit code for usage errors is 2; both tools report every
/// failure as 1. `--help` and `--version` still print and exit 0.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

/// Install the `env_logger` backend on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Map a run result to the process exit status, printing the error.
pub fn finish<E: Display>(result: Result<(), E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
