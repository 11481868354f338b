use anyhow::{Context, Result};
use clap::Parser;
use pocket_calc::clipboard::copy_readout;
use pocket_calc::{Config, Readout, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// A pocket calculator driven by key presses.
///
/// Keys are keypad labels (`7`, `.`, `+`, `×`, `AC`, `+/-`, `%`) or keyboard
/// names (`*`, `/`, `Enter`, `Escape`, `Backspace`). Runs of digits such as
/// `120` are typed one digit at a time.
#[derive(Parser, Debug)]
#[command(name = "pocket-calc", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print readouts as JSON.
    #[arg(long)]
    json: bool,

    /// Copy the final value to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Keys to press. Without any, keys are read line by line from stdin.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, ignored) = match &cli.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, None)
        }
        None => match Config::load_default() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    pocket_calc::logging::init(&config.logging);
    if let Some(e) = ignored {
        tracing::warn!("Ignoring config: {}", e);
    }
    tracing::debug!(?config, "Starting calculator session");

    let mut session = Session::new(config);

    if cli.keys.is_empty() {
        run_interactive(&mut session, cli.json)?;
    } else {
        session
            .press_line(&cli.keys.join(" "))
            .context("Invalid key sequence")?;
        print_readout(&session.readout(), cli.json)?;
    }

    if cli.copy {
        copy_readout(&session.readout())?;
    }

    Ok(())
}

/// Read keys from stdin until EOF or a blank line, printing the readout after
/// every line.
fn run_interactive(session: &mut Session, json: bool) -> Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            break;
        }

        if let Err(e) = session.press_line(&line) {
            eprintln!("{}", e);
            continue;
        }

        print_readout(&session.readout(), json)?;
    }

    Ok(())
}

fn print_readout(readout: &Readout, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer(&mut stdout, readout)?;
        writeln!(stdout)?;
    } else if let Some(op) = readout.active_operator {
        writeln!(stdout, "{} {}", readout.display, op)?;
    } else {
        writeln!(stdout, "{}", readout.display)?;
    }

    Ok(())
}
