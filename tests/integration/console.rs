//! The order console driven by a scripted editor

use std::collections::VecDeque;

use edict::foundation::Result;
use edict::runtime::{LineEditor, ReadResult, Reply, Repl, Session};

struct Script {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn run_consumes_the_script() {
    let script = Script::new(&["work", "", "frobnicate", "@guard", ":close", "tax 5", ":quit", "never"]);
    let mut repl = Repl::with_editor(script, Session::default()).without_banner();
    repl.run().unwrap();

    let orders: Vec<String> = repl
        .session()
        .orders()
        .iter()
        .map(|o| repl.session().render(o))
        .collect();
    assert_eq!(orders, ["work", "@guard", "tax 5"]);
    assert_eq!(repl.session().stats().rejected, 1);
}

#[test]
fn commands_inspect_the_sheet() {
    let mut repl = Repl::with_editor(Script::new(&[]), Session::default()).without_banner();
    assert_eq!(text(repl.eval("give 1x2 5 \"silver coins\"").unwrap()), "  1  give 1x2 5 \"silver coins\"  [-]");
    assert_eq!(text(repl.eval(":tokens 1").unwrap()), "give: [1x2] [5] [silver coins]");
    assert_eq!(text(repl.eval(":template").unwrap()), "(empty template)");
    assert!(repl.eval(":tokens 9").is_err());
    assert_eq!(text(repl.eval(":drop 1").unwrap()), "dropped give 1x2 5 \"silver coins\"");
    assert_eq!(text(repl.eval(":list").unwrap()), "(no orders)");
}

#[test]
fn locale_switch_changes_parsing() {
    let mut repl = Repl::with_editor(Script::new(&[]), Session::default()).without_banner();
    assert_eq!(repl.eval(":locale de").unwrap(), Reply::Silent);
    assert!(repl.eval("LERNE Taktik").is_ok());
    assert!(repl.eval("study tactics").is_err());
    assert!(repl.eval(":locale fr").is_err());
}
