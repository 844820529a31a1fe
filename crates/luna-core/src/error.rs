use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("layout failed: {0}")]
    Layout(String),
    #[error("unknown icon `{0}`")]
    UnknownIcon(String),
    #[error("invalid color literal `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}
