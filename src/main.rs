use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use semver_tool::cli::{run_request, Request};
use semver_tool::error::{SemverError, EXIT_OTHER};
use semver_tool::{config, ui};

#[derive(Parser)]
#[command(
    name = "semver-tool",
    about = "Validate, compare, diff, bump and extract identifiers of semantic versions",
    after_help = "See also: https://semver.org"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a semantic version; prints "valid" or "invalid"
    Validate {
        #[arg(help = "Version to check, or '-' to read it from stdin")]
        version: String,
    },

    /// Compare two versions; prints -1, 0 or 1 (build metadata is ignored)
    Compare {
        #[arg(
            num_args = 1..=2,
            required = true,
            help = "Two versions, or one argument ('-' for stdin) holding both separated by a space"
        )]
        versions: Vec<String>,
    },

    /// Print the most significant differing identifier of two versions
    Diff {
        #[arg(
            num_args = 1..=2,
            required = true,
            help = "Two versions, or one argument ('-' for stdin) holding both separated by a space"
        )]
        versions: Vec<String>,
    },

    /// Extract one identifier (major|minor|patch|prerelease|build|release|json)
    Get {
        field: String,
        #[arg(help = "Version, or '-' to read it from stdin")]
        version: String,
    },

    /// Increment one identifier (major|minor|patch|prerelease|build|release)
    Bump {
        field: String,
        #[arg(help = "Version, or '-' to read it from stdin")]
        version: String,

        #[arg(
            short,
            long,
            help = "Add or replace the prerelease ID, valid only with the 'prerelease' field"
        )]
        prerelease: Option<String>,

        #[arg(
            short = 'm',
            long,
            help = "Add or replace the build metadata ID, valid only with the 'build' field"
        )]
        build: Option<String>,
    },

    /// Show version and build information
    Version,
}

impl From<Command> for Request {
    fn from(command: Command) -> Self {
        match command {
            Command::Validate { version } => Request::Validate { version },
            Command::Compare { versions } => Request::Compare { versions },
            Command::Diff { versions } => Request::Diff { versions },
            Command::Get { field, version } => Request::Get { field, version },
            Command::Bump {
                field,
                version,
                prerelease,
                build,
            } => Request::Bump {
                field,
                version,
                prerelease,
                build,
            },
            Command::Version => Request::Version,
        }
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<i32> {
    let config = config::load_config(args.config.as_deref())
        .map_err(|e| SemverError::config(format!("{:#}", e)))?;

    init_logging(&config.log.level);
    ui::configure(&config.output);
    log::debug!("loaded configuration: {:?}", config);

    let stdin = io::stdin();
    let output = run_request(args.command.into(), &config, &mut stdin.lock())?;
    println!("{}", output.line);
    Ok(output.exit_code)
}

fn main() {
    let args = Args::parse();

    let code = match run(args) {
        Ok(code) => code,
        Err(err) => {
            ui::display_error(&format!("{:#}", err));
            err.downcast_ref::<SemverError>()
                .map(SemverError::exit_code)
                .unwrap_or(EXIT_OTHER)
        }
    };

    std::process::exit(code);
}
