// src/progress.rs
/// Status reporting for the query flow.
/// Frontends implement this to surface messages; the library never prints.
pub trait Progress {
    /// Free-form status line for human eyes (including reported failures).
    fn log(&mut self, _msg: &str) {}

    /// Called once at the end, successful or not.
    fn finish(&mut self, _status: &str) {}
}

/// Writes status lines to stderr so stdout stays clean for CSV/JSON.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, status: &str) {
        eprintln!("{status}");
    }
}

/// Keeps everything it was told; handy in tests.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub finished: Option<String>,
}
impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn finish(&mut self, status: &str) {
        self.finished = Some(s!(status));
    }
}
