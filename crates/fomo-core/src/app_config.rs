use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where the places list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The built-in Madrid list.
    Static,
    /// A JSON endpoint at `places_url`.
    Http,
    /// A local JSON or YAML file at `places_path`.
    File,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Static => write!(f, "static"),
            SourceKind::Http => write!(f, "http"),
            SourceKind::File => write!(f, "file"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub source: SourceKind,
    pub places_url: String,
    pub places_path: Option<PathBuf>,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}
