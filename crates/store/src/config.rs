//! Store connection configuration loaded from environment variables.

/// Static connection configuration for the remote record store.
///
/// This is configuration data, not behavior: the memory backend only
/// uses the collection path, real backends additionally use the
/// endpoint and project identifier.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store endpoint URL (default: `http://localhost:9000`).
    pub endpoint: String,
    /// Hosted project identifier (default: `survey-local`).
    pub project_id: String,
    /// Collection path holding the responses (default: `responses`).
    pub collection: String,
}

impl StoreConfig {
    /// Load configuration from the environment (reading `.env` first if
    /// present), with defaults suitable for local development.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `SURVEY_STORE_ENDPOINT`   | `http://localhost:9000` |
    /// | `SURVEY_STORE_PROJECT`    | `survey-local`          |
    /// | `SURVEY_STORE_COLLECTION` | `responses`             |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let endpoint = std::env::var("SURVEY_STORE_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:9000".into());
        let project_id =
            std::env::var("SURVEY_STORE_PROJECT").unwrap_or_else(|_| "survey-local".into());
        let collection =
            std::env::var("SURVEY_STORE_COLLECTION").unwrap_or_else(|_| "responses".into());

        Self {
            endpoint,
            project_id,
            collection,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9000".into(),
            project_id: "survey-local".into(),
            collection: "responses".into(),
        }
    }
}
