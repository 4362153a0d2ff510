use thiserror::Error;

/// Errors raised while retrieving a page from the recipe site
#[derive(Error, Debug)]
pub enum FetchError {
    /// The site answered with something other than 200 OK
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The request never produced a response (DNS, timeout, connection reset...)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            FetchError::Client(_) => None,
        }
    }
}

/// Errors raised while pulling a recipe out of fetched markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The search page lists no recipe link
    #[error("No recipe link in search results")]
    NoSearchResult,

    /// The recipe link carries no usable detail page id
    #[error("Recipe link has no detail page id")]
    MissingDetailId,

    /// The detail page has no JSON-LD block describing a recipe
    #[error("No structured recipe data on detail page")]
    NoStructuredData,

    /// A JSON-LD block exists but lacks the fields we need
    #[error("Malformed structured data: {0}")]
    Malformed(String),
}

/// Errors raised by the SQLite repository
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Recipe names are unique keys and may not be blank
    #[error("Recipe name must not be empty")]
    EmptyRecipeName,
}

/// Top level errors for the batch driver and the command line
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Usage: {0}")]
    Usage(String),
}
