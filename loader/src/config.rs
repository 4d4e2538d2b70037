/// Destination identifiers, supplied through the environment by whatever
/// deploys the loader.
#[derive(Clone, Debug)]
pub struct Config {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            project_id: require("SLUICE_PROJECT_ID")?,
            dataset_id: require("SLUICE_DATASET_ID")?,
            table_id: require("SLUICE_TABLE_ID")?,
        })
    }

    /// Fully qualified table id, `{project}.{dataset}.{table}`.
    pub fn table_fqid(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

fn require(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("{} is not set in the environment", key))
}
