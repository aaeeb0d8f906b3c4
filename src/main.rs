use clap::{ArgAction, Args, Parser as ClapParser, Subcommand};
use jsonpath_ast::cli::{self, CliError, InspectOptions};
use std::io;

#[derive(ClapParser)]
#[command(name = "jpath")]
#[command(about = "jpath - Parse and validate restricted JSONPath queries")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Emit JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its AST
    Parse {
        /// The query to parse
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the token stream of a query
    Tokens {
        /// The query to scan
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate query syntax
    Check {
        /// The query to validate (reads one query per line from stdin if not provided)
        query: Option<String>,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'jpath docs' to list topics)
        topic: String,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { query, output } => run_inspect(query, output, cli::execute_parse),
        Commands::Tokens { query, output } => run_inspect(query, output, cli::execute_tokens),
        Commands::Check { query } => run_check(query),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_inspect(
    query: String,
    output: OutputArgs,
    command: fn(&InspectOptions) -> Result<String, CliError>,
) -> Result<(), CliError> {
    let options = InspectOptions {
        query,
        json: output.json,
        pretty: output.pretty,
    };
    println!("{}", command(&options)?);
    Ok(())
}

fn run_check(query: Option<String>) -> Result<(), CliError> {
    match query {
        Some(query) => {
            let outcome = cli::execute_check(&query);
            println!("{}", outcome);
            if outcome.is_valid() {
                Ok(())
            } else {
                Err(CliError::InvalidQueries(1, 1))
            }
        }
        None if !atty::is(atty::Stream::Stdin) => {
            let outcomes = cli::check_lines(io::stdin().lock())?;
            for outcome in &outcomes {
                println!("{}\t{}", outcome.query, outcome);
            }
            let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();
            if invalid == 0 {
                Ok(())
            } else {
                Err(CliError::InvalidQueries(invalid, outcomes.len()))
            }
        }
        None => Err(CliError::NoInput),
    }
}
