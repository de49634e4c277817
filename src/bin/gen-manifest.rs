use clap::Parser;
use gallery_tools::{cli, config, manifest, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gen-manifest")]
#[command(about = "List gallery images into images/manifest.json")]
#[command(long_about = "\
List gallery images into images/manifest.json

Run from the site root. Every regular file directly inside images/ with a
.jpg, .jpeg, .png, .webp or .gif extension (any case) is listed by name,
sorted, as a JSON array:

  images/
  ├── manifest.json    # Output (never lists itself)
  ├── a.jpg            # listed
  ├── b.PNG            # listed
  └── notes.txt        # skipped

Run 'gen-manifest --gen-config' to print a documented gallery-tools.toml.")]
#[command(version)]
struct Cli {
    /// Directory to scan (overrides manifest.dir)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Manifest filename inside the directory (overrides manifest.output)
    #[arg(long)]
    output: Option<String>,

    /// Also write the manifest as a window.LOCAL_IMAGE_MANIFEST script
    #[arg(long)]
    js: bool,

    /// Print each listed filename
    #[arg(long)]
    list: bool,

    /// Print a stock gallery-tools.toml with all options documented and exit
    #[arg(long)]
    gen_config: bool,

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
    if args.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let mut tools = config::load_config(args.config.as_deref())?;
    if let Some(dir) = args.dir {
        tools.manifest.dir = dir;
    }
    if let Some(name) = args.output {
        tools.manifest.output = name;
    }
    tools.manifest.emit_js |= args.js;
    tools.validate()?;

    let summary = manifest::build(&tools.manifest)?;
    output::print_manifest_output(&summary, args.list);
    Ok(())
}
