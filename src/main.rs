mod ast;
mod builtins;
mod config;
mod error;
mod executor;
mod input;
mod interpreter;
mod logging;
mod parser;
mod redirect;
mod workdir;

use std::io::{self, Write};

use crate::ast::Flow;
use crate::input::{LineSource, Mode};
use crate::interpreter::Interpreter;
use crate::workdir::ProcessDir;

fn main() {
    let config = config::Config::load();
    logging::init(&config.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = io::stdout();

    let (mode, mut source) = match input::select_mode(&args, input::is_readable) {
        Some(Mode::Interactive) => (Mode::Interactive, LineSource::stdin()),
        Some(Mode::Batch(path)) => match LineSource::open(&path) {
            Ok(source) => (Mode::Batch(path), source),
            Err(e) => {
                log::error!("{}: {e}", path.display());
                error::print_error(&mut stdout);
                std::process::exit(0);
            }
        },
        None => {
            log::error!("invalid arguments: {args:?}");
            error::print_error(&mut stdout);
            std::process::exit(0);
        }
    };
    log::debug!("starting in {mode:?} mode");

    let interactive = matches!(mode, Mode::Interactive);
    let mut shell = Interpreter::new(ProcessDir, stdout);

    loop {
        if interactive {
            let out = shell.stdout();
            if write!(out, "{}", config.shell.prompt)
                .and_then(|()| out.flush())
                .is_err()
            {
                break;
            }
        }

        let line = match source.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("error reading input: {e}");
                std::process::exit(1);
            }
        };

        if line.len() > config.shell.max_line_length {
            log::warn!("line of {} bytes rejected", line.len());
            if !line.is_blank() {
                let _ = line.echo(shell.stdout());
            }
            error::print_error(shell.stdout());
            continue;
        }

        if line.is_blank() {
            continue;
        }

        if !interactive {
            let _ = line.echo(shell.stdout());
        }

        if let Flow::Exit(code) = shell.run_line(line.command_text()) {
            std::process::exit(code);
        }
    }

    std::process::exit(0);
}
