//! edict CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use edict_foundation::{Locale, OrderConfig};
use edict_runtime::repl::{format_phase, print_error};
use edict_runtime::{Repl, Session, init_logging};

/// CLI configuration parsed from arguments.
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    locale: String,
    capacity: Option<usize>,
    log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            batch_mode: false,
            show_help: false,
            show_version: false,
            locale: "en".to_string(),
            capacity: None,
            log_level: "warn".to_string(),
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-l" | "--locale" => {
                i += 1;
                config.locale = args.get(i).ok_or("--locale requires a value")?.clone();
            }
            "--capacity" => {
                i += 1;
                let value = args.get(i).ok_or("--capacity requires a value")?;
                config.capacity = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --capacity value: {value}"))?,
                );
            }
            "--log" => {
                i += 1;
                config.log_level = args.get(i).ok_or("--log requires a value")?.clone();
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn locale_for(name: &str) -> Result<Locale, Box<dyn std::error::Error>> {
    match name {
        "en" => Ok(Locale::english()),
        "de" => Ok(Locale::german()),
        other => Err(format!("unknown locale: {other} (expected en or de)").into()),
    }
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("edict {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(&config.log_level);

    let locale = locale_for(&config.locale)?;
    let mut order_config = OrderConfig::default();
    if let Some(capacity) = config.capacity {
        order_config = order_config
            .with_display_size(capacity)
            .with_build_size(capacity);
    }
    let mut session = Session::new(locale, order_config);

    if config.batch_mode {
        return run_batch(&mut session, &config.files);
    }

    let mut repl = Repl::new(session)?;
    for file in &config.files {
        let accepted = repl.eval_file(file)?;
        println!("{}: {accepted} orders", file.display());
    }
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

/// Checks order files: prints every order normalized with its tags, then
/// closes the phase. Fails if any line was rejected.
fn run_batch(session: &mut Session, files: &[PathBuf]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut rejected = 0;
    for path in files {
        let source = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let name = path.display().to_string();
        for (number, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match session.submit_from(line, &name, number + 1) {
                Ok(order) => {
                    let order = order.clone();
                    println!("{}", session.describe(&order));
                }
                Err(e) => {
                    print_error(&e);
                    rejected += 1;
                }
            }
        }
    }

    if session.has_long_conflict() {
        eprintln!("\x1b[33mwarning: an exclusive long order shares the sheet with another long order\x1b[0m");
    }

    let report = session.end_phase();
    println!("{}", format_phase(&report));

    if rejected > 0 {
        eprintln!("{rejected} line(s) rejected");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1medict\x1b[0m - Order sheet parser and console

\x1b[1mUSAGE:\x1b[0m
    edict [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Order files to load (one order per line)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Check the files and exit (no console)
    -l, --locale LANG    Order language: en (default) or de
    --capacity N         Buffer size for rendered and built orders
    --log LEVEL          Log level when RUST_LOG is unset (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    edict                        Start the console
    edict orders.txt             Load orders.txt, then start the console
    edict -b orders.txt          Check orders.txt and exit
    edict -l de -b befehle.txt   Check German orders

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :list :template :tokens N :drop N :stats :close :locale en|de :help :quit
    Ctrl+D               Exit the console
    Ctrl+C               Cancel current input

For more information, visit https://github.com/ndouglas/edict"
    );
}
