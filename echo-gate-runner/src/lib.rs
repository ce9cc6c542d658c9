pub mod handler;
pub mod launcher;
pub mod sink;

pub use handler::InvocationHandler;
pub use launcher::{OsProcessLauncher, ProcessLauncher};
pub use sink::{DiagnosticSink, StdoutSink};

#[cfg(any(test, feature = "test-util"))]
pub use sink::MemorySink;
