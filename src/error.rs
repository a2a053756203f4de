use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate item ID: {0}")]
    DuplicateId(String),

    #[error("No unused ID of length {0} left; raise roadmap.id_length")]
    IdsExhausted(usize),

    #[error("Candidate is not pending: {0}")]
    CandidateNotPending(u64),

    #[error("API key is missing. Set {var} and restart.")]
    MissingCredential { var: String },

    #[error("Suggestion request failed: {0}")]
    ProviderRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, NexusError>;
