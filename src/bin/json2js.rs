use clap::Parser;
use gallery_tools::{cli, config, convert, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "json2js")]
#[command(about = "Wrap a JSON array file as a window-global script")]
#[command(long_about = "\
Wrap a JSON array file as a window-global script

Reads a JSON file whose top-level value is an array and writes

  window.SIMILARITY_DATA = [
    ...
  ];

so the data can be loaded with a plain <script src> tag. The output path
defaults to the input path with a .js extension. Anything other than an
array at the top level is rejected and no file is written.")]
#[command(version)]
struct Cli {
    /// JSON file whose top-level value is an array
    input: PathBuf,

    /// Output script (default: input path with its extension replaced by .js)
    output: Option<PathBuf>,

    /// Global assigned on `window` (overrides script.global)
    #[arg(long)]
    global: Option<String>,

    /// Config file (default: ./gallery-tools.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Cli = cli::parse_args();
    cli::init_logging(args.verbose);
    cli::finish(run(args))
}

fn run(args: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut tools = config::load_config(args.config.as_deref())?;
    if let Some(global) = args.global {
        tools.script.global = global;
    }
    tools.validate()?;

    let written = convert::convert(&args.input, args.output.as_deref(), &tools.script)?;
    output::print_convert_output(&written);
    Ok(())
}
