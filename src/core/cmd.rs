use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Represents side effects requested by the update function. Commands carry
/// intent only; the executor decides how they are carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Request the ranked ID list (once per session)
    FetchItemList,
    /// Request bodies for the current page window
    FetchPageWindow,

    /// Open a story in the system browser
    OpenUrl { url: String },

    // Logging related
    LogError { message: String },
}

impl Cmd {
    /// Whether the command performs network or process I/O
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchItemList | Cmd::FetchPageWindow | Cmd::OpenUrl { .. } => true,
            Cmd::LogError { .. } => false,
        }
    }
}
