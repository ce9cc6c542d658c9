use std::sync::Arc;

use echo_gate_core::{ProcessInvocation, RequestSource, Result, PARAMETER_NAME};

use crate::launcher::{OsProcessLauncher, ProcessLauncher};
use crate::sink::{DiagnosticSink, StdoutSink};

/// Turns one request into one `echo` process.
///
/// Holds no per-request state; clones share the same launcher and sink.
#[derive(Clone)]
pub struct InvocationHandler {
    launcher: Arc<dyn ProcessLauncher>,
    sink: Arc<dyn DiagnosticSink>,
}

impl InvocationHandler {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { launcher, sink }
    }

    /// OS launcher writing handle descriptions to stdout
    pub fn system() -> Self {
        Self::new(Arc::new(OsProcessLauncher::new()), Arc::new(StdoutSink))
    }

    /// Handles a request. Never fails: a launch failure leaves no trace.
    pub fn handle<R: RequestSource + ?Sized>(&self, request: &R) {
        let _: Result<()> = self.attempt(request);
    }

    fn attempt<R: RequestSource + ?Sized>(&self, request: &R) -> Result<()> {
        let parameter = request.request_parameter(PARAMETER_NAME);
        let invocation = ProcessInvocation::echo(parameter);

        let process = self.launcher.launch(invocation)?;
        self.sink.emit(&process.to_string());
        Ok(())
    }
}
