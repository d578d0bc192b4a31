use std::sync::{Arc, Mutex};

use console::style;

/// Two-channel reporting sink for user-visible pipeline output.
///
/// Steps append lines; nothing is ever read back or reformatted by the
/// pipeline itself.
pub trait Reporter {
    fn info(&self, line: &str);
    fn warn(&self, line: &str);
}

/// Terminal sink: info to stdout, yellow warnings to stderr.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, line: &str) {
        eprintln!("{}", style(line).yellow());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Info,
    Warn,
}

/// In-memory sink that records every line with its channel.
/// Cloning shares the underlying buffer, so a test can keep a handle
/// while the pipeline owns the reporter.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.channel(Channel::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.channel(Channel::Warn)
    }

    fn channel(&self, channel: Channel) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, line: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Channel::Info, line.to_string()));
    }

    fn warn(&self, line: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Channel::Warn, line.to_string()));
    }
}
