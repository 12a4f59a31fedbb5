use clap::Parser;
use owo_colors::OwoColorize;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::Path;

use repo_opener::browser::SystemBrowser;
use repo_opener::build_info::BuildInfo;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "repo-opener")]
#[command(about = "Open the current git repository's origin remote in a web browser", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version information and exit
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Accept the single-dash `-version` spelling alongside `--version`
fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-version" {
                OsString::from("--version")
            } else {
                arg
            }
        })
        .collect()
}

fn error_prefix() -> String {
    if std::io::stderr().is_terminal() {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

fn main() {
    let cli = Cli::parse_from(rewrite_legacy_flags(std::env::args_os()));

    if cli.version {
        println!("{}", BuildInfo::current().render());
        std::process::exit(EXIT_SUCCESS);
    }

    if let Err(e) = repo_opener::logging::init_logging(cli.verbose) {
        eprintln!("Logging disabled: {:#}", e);
    }

    match repo_opener::app::run(Path::new("."), &SystemBrowser) {
        Ok(url) => {
            println!("Opened repository URL: {}", url);
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}
