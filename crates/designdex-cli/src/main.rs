//! designdex CLI: search design documents by UUID, keyword, or status.
//!
//! Prints a JSON report on stdout; logs and the optional `--summary` go to
//! stderr.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, Parser, ValueEnum};
use tracing::{debug, Level};

use designdex_core::Status;
use designdex_corpus::scan_design_documents;
use designdex_query::{format_report, ErrorReport, OutputFormat, Query, SearchReport};

const EXAMPLES: &str = "\
Examples:
  designdex --uuid abc123                 Search by UUID (partial match)
  designdex --keyword authentication      Search by keyword
  designdex --status approved             Filter by status
  designdex --list                        List all design documents
  designdex --keyword auth --status draft Combined search";

#[derive(Parser)]
#[command(name = "designdex")]
#[command(version)]
#[command(about = "Search design documents in a project")]
#[command(after_help = EXAMPLES)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    search: SearchArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Search by UUID (partial match supported)
    #[arg(long)]
    uuid: Option<String>,

    /// Search by keyword in title/summary/keywords/path
    #[arg(long)]
    keyword: Option<String>,

    /// Filter by document status
    #[arg(long, value_enum)]
    status: Option<StatusArg>,

    /// List all design documents
    #[arg(long)]
    list: bool,

    /// Project directory (default: current directory)
    #[arg(long, env = "DESIGNDEX_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Output as JSON (the default)
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// Print a human-readable summary to stderr
    #[arg(long)]
    summary: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Draft,
    Approved,
    Review,
    Deprecated,
    Archived,
    Unknown,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Draft => Status::Draft,
            StatusArg::Approved => Status::Approved,
            StatusArg::Review => Status::Review,
            StatusArg::Deprecated => Status::Deprecated,
            StatusArg::Archived => Status::Archived,
            StatusArg::Unknown => Status::Unknown,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

impl SearchArgs {
    fn query(&self) -> Query {
        let mut query = Query::new();
        if let Some(uuid) = &self.uuid {
            query = query.with_uuid(uuid.as_str());
        }
        if let Some(keyword) = &self.keyword {
            query = query.with_keyword(keyword.as_str());
        }
        if let Some(status) = self.status {
            query = query.with_status(status.into());
        }
        query
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_search(args: SearchArgs) -> Result<ExitCode> {
    let query = args.query();
    if query.is_empty() && !args.list {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "At least one search option required: --uuid, --keyword, --status, or --list",
            )
            .exit();
    }

    let project_dir = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let format = if args.json {
        OutputFormat::Json
    } else {
        args.format.into()
    };
    debug!(project_dir = %project_dir.display(), ?query, %format, "starting search");

    let documents = match scan_design_documents(&project_dir) {
        Ok(docs) => docs,
        Err(err) => {
            println!("{}", ErrorReport::new(&err).to_json()?);
            return Ok(ExitCode::FAILURE);
        }
    };

    if documents.is_empty() {
        println!("{}", format_report(&SearchReport::no_documents(), format)?);
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = query.execute(documents);
    let report = SearchReport::from_outcome(outcome, &project_dir);
    println!("{}", format_report(&report, format)?);

    if args.summary {
        eprintln!("{}", report.summary());
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "designdex", &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        None => run_search(cli.search),
    }
}
