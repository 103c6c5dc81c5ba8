use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for url ({url})")]
    Status { url: String, status: u16 },

    #[error("Could not find PDF with text: {target}")]
    LinkNotFound { target: String },

    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Hash file {}: {}", path.display(), source)]
    State {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
