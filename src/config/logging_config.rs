use std::path::PathBuf;

#[derive(serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFileFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Box<str>,
    pub file: Option<PathBuf>,
    pub file_format: LogFileFormat,
    pub otlp_endpoint: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
            file_format: LogFileFormat::default(),
            otlp_endpoint: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}
