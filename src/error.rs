/// Widget-level errors
#[derive(thiserror::Error, Debug)]
pub enum WidgetError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("No renderer registered for kind: {0}")]
    UnknownRendererKind(String),

    #[error("Unknown recommendation source: {0}")]
    UnknownSource(String),

    #[error("{0} recommendations are not implemented yet")]
    SourceNotImplemented(&'static str),
}

pub type WidgetResult<T> = Result<T, WidgetError>;
