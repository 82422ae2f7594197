extern crate clap;

use std::{
    env, fs,
    io::{self, BufRead, Write},
};

use clap::{App, Arg};
use karma::{format_error, lexer::lexer::tokenize, parse};
use log::{LevelFilter, Log, Metadata, Record};

const PROMPT: &str = ">> ";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(err) = log::set_logger(&LOGGER) {
        eprintln!("Could not install logger: {}", err);
        return;
    }
    log::set_max_level(level);
}

/// Writes either the token dump or the parsed statements of `source`.
///
/// Returns `false` when parsing recorded errors; in that case only the errors
/// are written.
fn process(source: &str, show_tokens: bool, out: &mut impl Write) -> io::Result<bool> {
    if show_tokens {
        for token in tokenize(source) {
            writeln!(out, "{}", token.debug())?;
        }
        return Ok(true);
    }

    let (program, errors) = parse(source);

    if !errors.is_empty() {
        for error in &errors {
            writeln!(out, "{}", format_error(error))?;
        }
        return Ok(false);
    }

    for stmt in program.statements() {
        writeln!(out, "{}", stmt)?;
    }
    Ok(true)
}

fn run_file(filename: &str, show_tokens: bool) -> Result<(), ()> {
    match fs::read_to_string(filename) {
        Ok(code) => match process(&code, show_tokens, &mut io::stdout()) {
            Ok(true) => Ok(()),
            Ok(false) => Err(()),
            Err(msg) => {
                eprintln!("Could not write output: {}", msg);
                Err(())
            }
        },
        Err(msg) => {
            eprintln!("Could not open file {}: {}", filename, msg);
            Err(())
        }
    }
}

fn repl(show_tokens: bool) -> io::Result<()> {
    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));
    println!("Hello {}! This is the Karma programming language!", user);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        process(&line, show_tokens, &mut stdout)?;
    }
}

fn main() {
    let matches = App::new("Karma front end")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizes and parses Karma source; starts a REPL when no file is given")
        .arg(
            Arg::with_name("filename")
                .help("filename containing the source code")
                .index(1),
        )
        .arg(
            Arg::with_name("tokens")
                .long("tokens")
                .help("print the token stream instead of the parsed statements"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log parser activity to stderr (-vv for every token)"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));
    let show_tokens = matches.is_present("tokens");

    let result = match matches.value_of("filename") {
        Some(filename) => run_file(filename, show_tokens),
        None => repl(show_tokens).map_err(|err| eprintln!("REPL error: {}", err)),
    };

    ::std::process::exit(match result {
        Ok(_) => 0,
        Err(_) => 1,
    });
}

#[cfg(test)]
mod tests {
    use super::process;

    fn run(source: &str, show_tokens: bool) -> (bool, String) {
        let mut out = Vec::new();
        let ok = process(source, show_tokens, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_process_prints_statements() {
        let (ok, out) = run("karma x = 5; return x;", false);

        assert!(ok);
        assert_eq!(out, "karma x = ;\nreturn ;\n");
    }

    #[test]
    fn test_process_prints_only_errors() {
        let (ok, out) = run("karma x; karma y = 1;", false);

        assert!(!ok);
        assert!(out.contains("expected next token to be =, got ; instead"));
        assert!(!out.contains("karma y"));
    }

    #[test]
    fn test_process_token_dump() {
        let (ok, out) = run("x == 1", true);

        assert!(ok);
        assert_eq!(out, "IDENT (x)\n== ()\nINT (1)\nEOF ()\n");
    }
}
