use std::io::Write;

/// Line-oriented destination for process handle descriptions.
/// Never part of the HTTP response.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes each line to the host's standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // a closed stdout must not fail the request
        let _ = writeln!(out, "{}", line);
    }
}

/// Keeps emitted lines in memory
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-util"))]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
