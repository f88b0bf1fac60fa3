use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use shell_arith::{ArithError, Options, Session, Token};

#[derive(Parser)]
#[command(name = "shell-arith")]
#[command(author, version, about = "Shell arithmetic tokenizer and parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Parse as module code (rejects `<!--` comments, implies --strict)
    #[arg(long, global = true)]
    module: bool,

    /// Enable strict mode checks
    #[arg(long, global = true)]
    strict: bool,

    /// Enable an optional syntax plugin
    #[arg(long = "plugin", value_enum, global = true)]
    plugins: Vec<PluginArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PluginArg {
    /// The `::` function-bind token
    #[value(name = "function-bind")]
    FunctionBind,
}

impl From<PluginArg> for shell_arith::Plugin {
    fn from(plugin: PluginArg) -> Self {
        match plugin {
            PluginArg::FunctionBind => shell_arith::Plugin::FunctionBind,
        }
    }
}

/// Where the expression comes from
#[derive(Args)]
struct Source {
    /// The source file to read
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    input: Option<PathBuf>,

    /// Read the expression from the command line instead of a file
    #[arg(short = 'e', long = "expr")]
    expr: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream
    Tokens {
        #[command(flatten)]
        source: Source,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse an expression and print its AST as JSON
    Parse {
        #[command(flatten)]
        source: Source,
    },

    /// Check an expression for errors
    Check {
        #[command(flatten)]
        source: Source,
    },

    /// Start an interactive REPL
    Repl,
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let mut options = Options::default()
        .with_module(cli.module)
        .with_strict(cli.strict);
    for plugin in &cli.plugins {
        options = options.with_plugin((*plugin).into());
    }

    let result = match cli.command {
        Commands::Tokens { source, json } => tokens(source, options, json),
        Commands::Parse { source } => parse(source, options),
        Commands::Check { source } => check(source, options),
        Commands::Repl => repl(options),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn open_session(source: Source, options: Options) -> Result<Session> {
    match (source.input, source.expr) {
        (_, Some(expr)) => Ok(Session::from_string("<expr>", expr, options)),
        (Some(path), None) => Session::from_file(&path, options)
            .with_context(|| format!("Failed to open source file: {:?}", path)),
        (None, None) => anyhow::bail!("no input given"),
    }
}

/// Report `error` against the session source, then fail with a short summary.
fn fail(session: &Session, error: ArithError, summary: &str) -> Result<()> {
    session.report(&error)?;
    anyhow::bail!("{}", summary)
}

fn tokens(source: Source, options: Options, json: bool) -> Result<()> {
    let session = open_session(source, options)?;
    let tokens = match session.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => return fail(&session, e, "Lexical analysis failed"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    println!("{}", "=== Tokens ===".blue().bold());
    for token in &tokens {
        println!("{}", format_token(token));
    }
    Ok(())
}

fn format_token(token: &Token) -> String {
    format!(
        "{:>4}..{:<4} {:>3}:{:<3} {}",
        token.start, token.end, token.start_line, token.start_column, token
    )
}

fn parse(source: Source, options: Options) -> Result<()> {
    let session = open_session(source, options)?;
    match session.parse() {
        Ok(expr) => {
            println!("{}", serde_json::to_string_pretty(&expr)?);
            Ok(())
        }
        Err(e) => fail(&session, e, "Parsing failed"),
    }
}

fn check(source: Source, options: Options) -> Result<()> {
    let session = open_session(source, options)?;
    log::info!("Checking {}", session.source_name);

    if let Err(e) = session.parse() {
        return fail(&session, e, "Check failed");
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}

fn repl(options: Options) -> Result<()> {
    println!("{}", "Shell Arithmetic REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_number = 1;

    loop {
        // Print prompt
        print!("arith:{:03}> ", line_number);
        stdout.flush()?;

        // Read input
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let input = input.trim();

        // Handle REPL commands
        match input {
            ":quit" | ":q" => {
                println!("Goodbye!");
                break;
            }
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("  :clear, :c   Clear the screen");
                println!("  :t <expr>    Show the tokens of an expression");
                println!("\nEnter an arithmetic expression to see its AST.");
                continue;
            }
            ":clear" | ":c" => {
                print!("\x1B[2J\x1B[1;1H"); // ANSI escape codes to clear screen
                continue;
            }
            "" => continue,
            _ => {}
        }

        let (show_tokens, text) = match input
            .strip_prefix(":tokens ")
            .or_else(|| input.strip_prefix(":t "))
        {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let session = Session::from_string(format!("<repl:{}>", line_number), text, options.clone());
        let result = if show_tokens {
            session.tokenize().map(|tokens| {
                tokens
                    .iter()
                    .map(format_token)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        } else {
            session
                .parse()
                .and_then(|expr| {
                    serde_json::to_string_pretty(&expr).map_err(|e| ArithError::Other(e.to_string()))
                })
        };

        match result {
            Ok(output) => println!("{}", output),
            Err(e) => session.report(&e)?,
        }

        line_number += 1;
    }

    Ok(())
}
