use std::{fs, process};

use clap::Parser;
use fimp::{error::Error, interpreter::evaluator::output::StdoutSink};

/// fimp is a small imperative scripting language with integer variables,
/// loops, conditionals and nested functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fimp to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the program in canonical form instead of running it.
    #[arg(short, long, conflicts_with = "tokens")]
    print: bool,

    /// Prints the token stream instead of running the program.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

/// Installs a stderr subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn execute(args: &Args, script: &str) -> Result<(), Error> {
    if args.tokens {
        for token in fimp::tokenize(script)? {
            println!("{} {token}", token.position());
        }
    } else if args.print {
        println!("{}", fimp::format_source(script)?);
    } else {
        fimp::run(script, &mut StdoutSink)?;
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = execute(&args, &script) {
        eprintln!("{}", e.diagnostic().render(&script));
        process::exit(1);
    }
}
