#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Environment variable holding the service account key as JSON.
    pub env_var: Box<str>,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env_var: "GOOGLE_SERVICE_ACCOUNT_JSON".into(),
        }
    }
}
