use thiserror::Error;

/// The process launcher could not start the requested program.
#[derive(Error, Debug)]
pub enum LaunchFailure {
    #[error("Empty argument vector")]
    EmptyArgv,

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchFailure {
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        LaunchFailure::Spawn {
            command: command.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchFailure>;
