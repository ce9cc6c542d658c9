use std::fmt;
use std::path::PathBuf;

/// Name of the request field forwarded to the spawned process
pub const PARAMETER_NAME: &str = "123";

/// Program every invocation runs
pub const COMMAND: &str = "echo";

/// A single request field, taken verbatim from the inbound request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestParameter {
    value: Option<String>,
}

impl RequestParameter {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    pub fn present(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn absent() -> Self {
        Self { value: None }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The token placed in the argument vector. An absent field becomes the
    /// empty string since argv entries cannot be null.
    pub fn into_argument(self) -> String {
        self.value.unwrap_or_default()
    }
}

/// A process about to be launched. `argv[0]` is the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    pub argv: Vec<String>,
    /// `None` inherits the host's working directory
    pub working_directory: Option<PathBuf>,
    /// `None` inherits the host environment, `Some` replaces it entirely
    pub env: Option<Vec<(String, String)>>,
}

impl ProcessInvocation {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            argv,
            working_directory: None,
            env: None,
        }
    }

    /// Builds `[echo, <value>]` with no filtering of the value
    pub fn echo(parameter: RequestParameter) -> Self {
        Self::new(vec![COMMAND.to_string(), parameter.into_argument()])
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// What the launcher knows about a process it started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedProcess {
    pub pid: Option<u32>,
    /// Set when the process had already exited by the time it was observed
    pub exit_code: Option<i32>,
}

impl SpawnedProcess {
    pub fn running(pid: Option<u32>) -> Self {
        Self {
            pid,
            exit_code: None,
        }
    }

    pub fn exited(pid: Option<u32>, exit_code: i32) -> Self {
        Self {
            pid,
            exit_code: Some(exit_code),
        }
    }
}

impl fmt::Display for SpawnedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pid {
            Some(pid) => write!(f, "Process[pid={}, ", pid)?,
            None => write!(f, "Process[pid=unknown, ")?,
        }
        match self.exit_code {
            Some(code) => write!(f, "exitValue={}]", code),
            None => write!(f, "exitValue=\"not exited\"]"),
        }
    }
}
