use crate::args::ParamKind;
use hourgate_protocol::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool '{0}' is already registered")]
    DuplicateName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    #[error("math domain error: {0}")]
    Domain(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing required parameter `{0}`")]
    Missing(String),

    #[error("parameter `{name}` expects a {expected}, got {found}")]
    WrongType {
        name: String,
        expected: ParamKind,
        found: &'static str,
    },
}

/// Failure raised by a tool body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolFailure {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Request-time failure of a dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("{}", unavailable_message(.name, .hour, .availability))]
    ToolUnavailable {
        name: String,
        hour: u32,
        availability: Option<String>,
    },

    #[error("invalid arguments for '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: ArgumentError,
    },

    #[error(transparent)]
    Math(#[from] MathError),
}

impl ToolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTool(_) => ErrorKind::UnknownTool,
            Self::ToolUnavailable { .. } => ErrorKind::ToolUnavailable,
            Self::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            Self::Math(MathError::DivisionByZero(_)) => ErrorKind::DivisionByZero,
            Self::Math(MathError::Domain(_)) => ErrorKind::MathDomain,
        }
    }

    pub(crate) fn from_failure(tool: &str, failure: ToolFailure) -> Self {
        match failure {
            ToolFailure::Math(err) => Self::Math(err),
            ToolFailure::Argument(source) => Self::InvalidArguments {
                tool: tool.to_string(),
                source,
            },
        }
    }
}

fn unavailable_message(name: &str, hour: &u32, availability: &Option<String>) -> String {
    match availability {
        Some(window) => format!("{name} is only available {window} (current hour: {hour})"),
        None => format!("{name} is not available at hour {hour}"),
    }
}
