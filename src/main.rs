//! padcalc command line front end.
//!
//! # Usage
//!
//! ```bash
//! # Run one key sequence and print the result
//! padcalc --keys "5 + 3 ="
//!
//! # Interactive: one key sequence per line, `quit` to leave
//! padcalc --keypad
//!
//! # With verbose logging
//! RUST_LOG=padcalc=debug padcalc --keys "1/0="
//! ```

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use padcalc::calculator::{
    CalcResult, Calculator, FunctionKey, Key, ResultFormat, copy_to_clipboard,
    parse_key_sequence,
};
use padcalc::config::load_config;
use padcalc::ui::{render_display, render_keypad};

const DISPLAY_WIDTH: usize = 24;

#[derive(Parser, Debug)]
#[command(name = "padcalc", version, about = "Four-function keypad calculator")]
struct Cli {
    /// Key sequence to run, e.g. "5+3=". Without it, key sequences are read from stdin.
    #[arg(short, long)]
    keys: Option<String>,

    /// Configuration file (default: ~/.config/padcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Result format
    #[arg(short, long, value_enum)]
    format: Option<ResultFormat>,

    /// Group thousands in the display
    #[arg(long)]
    group: bool,

    /// Print the keypad with the active operator highlighted
    #[arg(long)]
    keypad: bool,

    /// Print the readout as JSON
    #[arg(long)]
    json: bool,

    /// Copy successful results to the clipboard
    #[arg(long)]
    copy: bool,
}

/// Resolved output settings (CLI flags over configuration).
struct Output {
    group: bool,
    keypad: bool,
    json: bool,
    copy: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("padcalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config.display.format = format;
    }

    let output = Output {
        group: cli.group || config.display.group_thousands,
        keypad: cli.keypad,
        json: cli.json,
        copy: cli.copy || config.clipboard.copy_on_equal,
    };

    let mut calc = Calculator::with_format(config.display.format);
    let mut out = io::stdout().lock();

    match cli.keys {
        Some(sequence) => {
            let keys = parse_key_sequence(&sequence)
                .with_context(|| format!("Invalid key sequence '{sequence}'"))?;
            press_all(&mut calc, &keys);
            print_readout(&mut out, &calc, &output)?;
            if output.copy {
                copy_result(&calc);
            }
        }
        None => run_interactive(&mut calc, &output, &mut out)?,
    }

    Ok(())
}

fn run_interactive(
    calc: &mut Calculator,
    output: &Output,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    info!("Reading key sequences from stdin");
    print_readout(out, calc, output)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }

        let keys = match parse_key_sequence(line) {
            Ok(keys) => keys,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        press_all(calc, &keys);
        if output.copy && keys.contains(&Key::Function(FunctionKey::Equal)) {
            copy_result(calc);
        }
        print_readout(out, calc, output)?;
    }

    Ok(())
}

fn press_all(calc: &mut Calculator, keys: &[Key]) {
    for &key in keys {
        calc.press(key);
    }
}

fn print_readout(out: &mut impl Write, calc: &Calculator, output: &Output) -> anyhow::Result<()> {
    let readout = calc.readout();

    if output.json {
        writeln!(out, "{}", serde_json::to_string(&readout)?)?;
        return Ok(());
    }

    writeln!(out, "{}", render_display(&readout, DISPLAY_WIDTH, output.group))?;
    if output.keypad {
        writeln!(out, "{}", render_keypad(readout.highlight))?;
    }
    out.flush()?;

    Ok(())
}

fn copy_result(calc: &Calculator) {
    let Some(text) = calc.last_result().and_then(CalcResult::clipboard) else {
        warn!(display = %calc.display(), "No successful result to copy");
        return;
    };

    if let Err(e) = copy_to_clipboard(text) {
        warn!(error = %e, "Clipboard copy failed");
    }
}
