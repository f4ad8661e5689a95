//! Interactive shell over the portal pages.
//!
//! One page is active at a time, like the original portal's navbar routes.
//! Entering a page mounts it (fresh store, initial fetch); leaving it drops
//! the page state entirely.

mod blogs;
mod employees;
mod students;

use std::io;
use std::sync::Arc;

use console::{style, Term};

use crate::models::RecordId;
use crate::notify::{Confirm, Notifier, TermConfirm, TermNotifier};

/// What a page loop asks the shell to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Return to the page switcher.
    Back,
    /// Leave the program.
    Quit,
}

/// Top-level shell: owns the shared HTTP client and the feedback surfaces.
pub struct Shell {
    pub(crate) http: reqwest::Client,
    pub(crate) api_root: String,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) confirm: Arc<dyn Confirm>,
    term: Term,
}

impl Shell {
    pub fn new(http: reqwest::Client, api_root: String) -> Self {
        Self {
            http,
            api_root,
            notifier: Arc::new(TermNotifier),
            confirm: Arc::new(TermConfirm),
            term: Term::stdout(),
        }
    }

    /// Run the shell until the user quits. Students is the default page.
    pub async fn run(&self) -> io::Result<()> {
        self.term
            .write_line(&style("Campus Records Portal").bold().to_string())?;
        self.term
            .write_line("Pages: students, employees, blogs. Type `help` for commands.")?;

        if students::run(self, &self.term).await? == Exit::Quit {
            return Ok(());
        }

        loop {
            let line = self.prompt("portal")?;
            match line.trim() {
                "" => continue,
                "students" => {
                    if students::run(self, &self.term).await? == Exit::Quit {
                        break;
                    }
                }
                "employees" => {
                    if employees::run(self, &self.term).await? == Exit::Quit {
                        break;
                    }
                }
                "blogs" => {
                    if blogs::run(self, &self.term).await? == Exit::Quit {
                        break;
                    }
                }
                // Present for parity with the original UI, which ships a
                // Login button wired to nothing.
                "login" => self
                    .term
                    .write_line("Login is not available in this build.")?,
                "help" => self.term.write_line(
                    "Commands: students | employees | blogs | login | quit",
                )?,
                "quit" | "exit" => break,
                other => self
                    .term
                    .write_line(&format!("Unknown command: {}", other))?,
            }
        }
        Ok(())
    }

    pub(crate) fn prompt(&self, name: &str) -> io::Result<String> {
        self.term.write_str(&format!("{}> ", style(name).cyan()))?;
        self.term.read_line()
    }
}

/// Split a command line into its first word and the trimmed remainder.
pub(crate) fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    }
}

/// Parse a record id argument, reporting bad input to the terminal.
pub(crate) fn parse_id(term: &Term, arg: &str) -> io::Result<Option<RecordId>> {
    match arg.parse::<RecordId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            term.write_line("Expected a numeric record id.")?;
            Ok(None)
        }
    }
}

/// Split `a | b` form fields; missing parts come back empty so the page's
/// own validation produces the user-facing warning.
pub(crate) fn split_fields(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((a, b)) => (a.trim().to_string(), b.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}
