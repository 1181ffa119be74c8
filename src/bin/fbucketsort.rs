use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bucketsort_rs::common::reset_sigpipe;
use bucketsort_rs::shell::{DEFAULT_DIR, Shell, ShellConfig};

#[derive(Parser)]
#[command(
    name = "fbucketsort",
    version,
    about = "Sort a list of names by first-letter buckets"
)]
struct Cli {
    /// Directory holding the name lists
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = DEFAULT_DIR)]
    dir: PathBuf,

    /// Number of the file to sort, instead of prompting
    #[arg(short = 's', long = "select", value_name = "N")]
    select: Option<String>,

    /// Base name of the sorted file, instead of prompting (empty for the default)
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    output: Option<String>,

    /// Do not list records or narrate bucket steps
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fbucketsort=warn,bucketsort_rs=warn".into()),
        )
        .init();
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();
    init_logging();

    let config = ShellConfig {
        dir: cli.dir,
        selection: cli.select,
        output_name: cli.output,
        quiet: cli.quiet,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, stdin.lock(), stdout.lock());

    let result = shell.run();
    drop(shell);

    if let Err(e) = result {
        eprintln!("fbucketsort: {}", e);
        process::exit(1);
    }
}
