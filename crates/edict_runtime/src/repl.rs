//! The interactive order console.
//!
//! Plain lines are parsed as orders for the session's sheet. Lines
//! starting with `:` are console commands.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use edict_foundation::{Error, ErrorKind, Locale, Result};

use crate::editor::{COMMANDS, LineEditor, ReadResult, RustylineEditor};
use crate::session::{PhaseReport, Session};

/// What the console should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text.
    Text(String),
    /// Print nothing.
    Silent,
    /// Leave the console.
    Quit,
}

/// The interactive console.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (locale, store, orders).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new console with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(session.completion_words());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "edict> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the console loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Reply::Text(text)) => println!("{text}"),
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns the parse error for an order line, or a usage error for a
    /// malformed command.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.command(command);
        }
        let order = self.session.submit(line)?.clone();
        let index = self.session.orders().len();
        Ok(Reply::Text(format!("{index:>3}  {}", self.session.describe(&order))))
    }

    /// Evaluates every line of an order file.
    ///
    /// Lines that do not parse are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!("failed to read {}: {e}", path.display())))
        })?;
        let name = path.display().to_string();
        let mut accepted = 0;
        for (number, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match self.session.submit_from(line, &name, number + 1) {
                Ok(_) => accepted += 1,
                Err(e) => print_error(&e),
            }
        }
        Ok(accepted)
    }

    fn command(&mut self, command: &str) -> Result<Reply> {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or("");
        let arg = words.next();

        let reply = match name {
            "list" | "l" => self.list(),
            "template" | "t" => self.template(),
            "tokens" => self.tokens(parse_index(arg)?)?,
            "drop" | "d" => {
                let index = parse_index(arg)?;
                let order = self
                    .session
                    .drop_order(index)
                    .ok_or_else(|| no_such_order(index))?;
                format!("dropped {}", self.session.render(&order))
            }
            "stats" | "s" => self.stats(),
            "close" | "c" => format_phase(&self.session.end_phase()),
            "locale" => {
                let locale = match arg {
                    Some("en") => Locale::english(),
                    Some("de") => Locale::german(),
                    _ => return Err(usage("locale en|de")),
                };
                self.session.set_locale(locale);
                self.editor.set_keywords(self.session.completion_words());
                return Ok(Reply::Silent);
            }
            "help" | "h" | "?" => help_text(),
            "quit" | "q" => return Ok(Reply::Quit),
            other => {
                return Err(Error::usage(format!(
                    "unknown command :{other} (try one of {})",
                    COMMANDS.join(" ")
                )));
            }
        };
        Ok(Reply::Text(reply))
    }

    fn list(&self) -> String {
        let mut out = String::new();
        for (i, order) in self.session.orders().iter().enumerate() {
            let _ = writeln!(out, "{:>3}  {}", i + 1, self.session.describe(order));
        }
        if self.session.has_long_conflict() {
            out.push_str("warning: an exclusive long order shares the sheet with another long order\n");
        }
        if out.is_empty() {
            out.push_str("(no orders)");
        }
        out.trim_end().to_string()
    }

    fn template(&self) -> String {
        let lines: Vec<String> = self
            .session
            .template()
            .map(|order| self.session.render(order))
            .collect();
        if lines.is_empty() {
            "(empty template)".to_string()
        } else {
            lines.join("\n")
        }
    }

    fn tokens(&mut self, index: usize) -> Result<String> {
        let (keyword, words) = self
            .session
            .tokens(index)
            .ok_or_else(|| no_such_order(index))?;
        let keyword = keyword.map_or("(free text)", |kw| kw.name());
        let words: Vec<String> = words.iter().map(|w| format!("[{w}]")).collect();
        Ok(format!("{keyword}: {}", words.join(" ")))
    }

    fn stats(&self) -> String {
        let stats = self.session.stats();
        format!(
            "orders: {} ({} long, {} rejected)\nstore: {} records, {} references, {} slots, epoch {}",
            stats.orders,
            stats.long,
            stats.rejected,
            stats.store.records,
            stats.store.references,
            stats.store.slots,
            stats.store.epoch,
        )
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36medict\x1b[0m order console v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Locale: {}. Type orders, or :help for commands. Ctrl+D exits.\n",
            self.session.locale().name()
        );
        let _ = io::stdout().flush();
    }
}

/// Formats the outcome of ending a phase.
#[must_use]
pub fn format_phase(report: &PhaseReport) -> String {
    let mut out = format!(
        "phase closed: {} orders, {} carried over",
        report.orders, report.carried
    );
    match report.teardown {
        Some(teardown) if teardown.is_clean() => {
            let _ = write!(out, "\nstore cleared: {} records", teardown.records);
        }
        Some(teardown) => {
            let _ = write!(
                out,
                "\nstore cleared: {} records, {} still referenced ({} references)",
                teardown.records, teardown.outstanding, teardown.outstanding_refs
            );
        }
        None => out.push_str("\nstore kept"),
    }
    out
}

/// Prints an error to stderr.
pub fn print_error(error: &Error) {
    match &error.context {
        Some(context) => eprintln!("\x1b[31mError: {error}\x1b[0m {context}"),
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}

fn parse_index(arg: Option<&str>) -> Result<usize> {
    arg.and_then(|a| a.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .map(|n| n - 1)
        .ok_or_else(|| usage("expected an order number (1, 2, ...)"))
}

fn no_such_order(index: usize) -> Error {
    Error::usage(format!("no order {}", index + 1))
}

fn usage(message: &str) -> Error {
    Error::usage(format!("usage: {message}"))
}

fn help_text() -> String {
    "\
Type an order to add it to the sheet, e.g. `@entertain 200` or `study tactics`.
Prefix `!` makes an order quiet, `@` carries it into the next template.

  :list          show the sheet with class tags
  :template      show the orders that carry into the next phase
  :tokens N      bind order N and show its parameter tokens
  :drop N        remove order N
  :stats         payload store and sheet counters
  :close         end the phase: clear the store, keep the template
  :locale en|de  switch the order language
  :help          this text
  :quit          leave"
        .to_string()
}
