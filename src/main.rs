use std::{
    fs,
    io::{self, Read},
};

use abacus::{
    calculator::{action::Action, session::Calculator},
    display::Locale,
    input::{parse_actions, parse_keys},
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// abacus replays calculator key presses and prints what the display shows.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells abacus to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Reads JSON actions (an array, or one object per line) instead of key
    /// presses.
    #[arg(short, long)]
    json: bool,

    /// Prints the display after every action, not only at the end.
    #[arg(short, long)]
    steps: bool,

    /// Prints the final calculator state as JSON instead of the display.
    #[arg(long)]
    state: bool,

    /// Number formatting for the display: en-us, de-de, fr-fr or plain.
    #[arg(short, long, env = "ABACUS_LOCALE", default_value = "en-us")]
    locale: Locale,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The key script, or a path with --file. Read from stdin when omitted.
    contents: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let source = read_source(&args)?;
    let actions: Vec<Action> = if args.json {
        parse_actions(&source).context("failed to read JSON actions")?
    } else {
        parse_keys(&source).context("failed to read key script")?
    };

    let mut calculator = Calculator::with_options(args.locale.options());
    for action in actions {
        calculator.dispatch(action);
        if args.steps && !args.state {
            println!("{}\n", calculator.screen());
        }
    }

    if args.state {
        let json = serde_json::to_string_pretty(calculator.state()).context("failed to encode state")?;
        println!("{json}");
    } else if !args.steps {
        println!("{}", calculator.screen());
    }

    Ok(())
}

fn read_source(args: &Args) -> Result<String> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            fs::read_to_string(path).with_context(|| format!("failed to read the input file '{path}'"))
        },
        (Some(script), false) => Ok(script.clone()),
        (None, _) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)
                       .context("failed to read from stdin")?;
            Ok(buffer)
        },
    }
}
