use thiserror::Error;

pub type HookResult<T> = Result<T, HookError>;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("element attribute `{attribute}` is not valid json: {source}")]
    MalformedAttribute {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("element attribute `{0}` is required")]
    MissingAttribute(&'static str),

    #[error("data push payload is not valid json: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("unknown hook `{0}`")]
    UnknownHook(String),

    #[error("element `{0}` is already mounted")]
    DuplicateElement(String),

    #[error("element `{0}` is not mounted")]
    UnknownElement(String),

    /// Some listeners on `event` failed; every other listener still got the
    /// payload.
    #[error("data push `{event}` failed for {} element(s)", .failures.len())]
    PartialDelivery {
        event: String,
        applied: usize,
        failures: Vec<(String, HookError)>,
    },

    #[error("trace step {index} failed: {source}")]
    TraceStep {
        index: usize,
        #[source]
        source: Box<HookError>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
