// SPDX-License-Identifier: MIT
//
// cssforge — configure CSS effects from the command line.
//
// This binary wires the library crates to a terminal:
//
//   forge-color   → color parsing and HSL math
//   forge-palette → schemes, shades, contrast
//   forge-css     → per-effect configs, formatters, store, command language
//
// Each input line flows through:
//
//   -e argument / stdin line → parse_command → execute(store)
//     → Outcome::Print → stdout
//     → Outcome::Copy  → Clipboard (OSC 52)
//
// Command errors are reported on stderr and the session carries on. When
// the commands came from `-e` or a pipe, any failed command makes the exit
// status 1 once everything has run.

mod clipboard;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use forge_css::{GeneratorKind, Outcome, Store, execute, parse_command};
use tracing_subscriber::EnvFilter;

use crate::clipboard::{Clipboard, Osc52Clipboard};

/// Configure CSS effects and print ready-to-use CSS
#[derive(Parser)]
#[command(name = "cssforge")]
#[command(author, version)]
#[command(after_help = "EXAMPLES:
    # Print the default gradient
    cssforge -g gradient -e show

    # Tweak a transform and copy the result
    cssforge -g transform -e 'set rotate=45 origin=\"top left\"' -e show --copy

    # Script a session
    printf 'use border-radius\\npreset pill\\nshow\\n' | cssforge

Type `help` at the prompt for the command list.")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generator to start on
    #[arg(short, long, value_name = "KIND", value_parser = str::parse::<GeneratorKind>)]
    generator: Option<GeneratorKind>,

    /// Run a command instead of reading stdin (repeatable, runs in order)
    #[arg(short, long = "exec", value_name = "COMMAND")]
    exec: Vec<String>,

    /// Copy the active generator's CSS to the clipboard when done
    #[arg(long)]
    copy: bool,

    /// Print the active generator's configuration as JSON when done
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut store = Store::new();
    if let Some(kind) = cli.generator {
        store.set_active(kind);
    }

    let mut session = Session {
        store,
        clipboard: Osc52Clipboard::new(io::stdout()),
        out: io::stdout(),
        failures: 0,
    };

    let stdin = io::stdin();
    let interactive = cli.exec.is_empty() && stdin.is_terminal();

    if cli.exec.is_empty() {
        session.read_lines(stdin.lock(), interactive)?;
    } else {
        for line in &cli.exec {
            if session.run_line(line)? == Flow::Quit {
                break;
            }
        }
    }

    if cli.json {
        let active = session.store.active();
        let json = serde_json::to_string_pretty(&session.store.config_json(active)?)?;
        writeln!(session.out, "{json}").context("failed to write to stdout")?;
    }
    if cli.copy {
        let css = session.store.render_active().to_string();
        if !session.clipboard.copy(&css) {
            bail!("could not write to the clipboard");
        }
    }

    if session.failures > 0 && !interactive {
        bail!("{} command(s) failed", session.failures);
    }
    Ok(())
}

/// Set up tracing/logging based on verbosity level
fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One run of the program: the store plus where its output goes.
struct Session<C, W> {
    store: Store,
    clipboard: C,
    out: W,
    failures: usize,
}

impl<C: Clipboard, W: Write> Session<C, W> {
    /// Parse and run one line. Command errors are reported and counted;
    /// only I/O failures are returned.
    fn run_line(&mut self, line: &str) -> Result<Flow> {
        tracing::debug!(line, "running command");
        let outcome = parse_command(line).and_then(|command| execute(&mut self.store, command));

        match outcome {
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Print(text)) => {
                writeln!(self.out, "{text}").context("failed to write to stdout")?;
            }
            Ok(Outcome::Copy(text)) => {
                if !self.clipboard.copy(&text) {
                    eprintln!("error: could not write to the clipboard");
                    self.failures += 1;
                }
            }
            Ok(Outcome::Quit) => return Ok(Flow::Quit),
            Err(err) => {
                eprintln!("error: {err}");
                self.failures += 1;
            }
        }
        Ok(Flow::Continue)
    }

    /// Run lines from `input` until it ends or `quit`. Blank lines and
    /// lines starting with `#` are skipped.
    fn read_lines(&mut self, input: impl BufRead, interactive: bool) -> Result<()> {
        if interactive {
            self.prompt()?;
        }
        for line in input.lines() {
            let line = line.context("failed to read stdin")?;
            let trimmed = line.trim();
            if !trimmed.is_empty()
                && !trimmed.starts_with('#')
                && self.run_line(trimmed)? == Flow::Quit
            {
                break;
            }
            if interactive {
                self.prompt()?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}> ", self.store.active()).context("failed to write to stdout")?;
        self.out.flush().context("failed to flush stdout")
    }
}
