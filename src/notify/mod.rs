//! User feedback surfaces: toast-style notifications and delete confirmation.
//!
//! Both are trait seams so the pages can be driven headless in tests. The
//! terminal implementations are the only interactive pieces of the program.

use console::style;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warn,
    Error,
}

/// Toast-style notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, message: &str);

    fn success(&self, message: &str) {
        self.notify(Level::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.notify(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.notify(Level::Error, message);
    }
}

/// Yes/no capability requested by the pages before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Prints styled one-line notifications to stdout.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, level: Level, message: &str) {
        let tag = match level {
            Level::Success => style("ok").green().bold(),
            Level::Info => style("info").cyan(),
            Level::Warn => style("warn").yellow().bold(),
            Level::Error => style("error").red().bold(),
        };
        println!("[{}] {}", tag, message);
    }
}

/// Reads a y/N answer from the terminal; anything but yes declines.
pub struct TermConfirm;

impl Confirm for TermConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let term = console::Term::stdout();
        if term.write_str(&format!("{} [y/N] ", prompt)).is_err() {
            return false;
        }
        match term.read_line() {
            Ok(answer) => matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    //! Headless doubles used by page and integration tests.

    use std::sync::Mutex;

    use super::{Confirm, Level, Notifier};

    /// Records every notification for later assertions.
    #[derive(Default)]
    pub struct RecordingNotifier {
        events: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last(&self) -> Option<(Level, String)> {
            self.events.lock().unwrap().last().cloned()
        }

        pub fn clear(&self) {
            self.events.lock().unwrap().clear();
        }

        pub fn is_empty(&self) -> bool {
            self.events.lock().unwrap().is_empty()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: Level, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    /// Answers every confirmation with a canned response.
    pub struct CannedConfirm(pub bool);

    impl Confirm for CannedConfirm {
        fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }
}
