use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};

use crate::domain::sheets::target_range::TargetRange;
use crate::error::{PushError, PushResult};

use super::{
    credentials_config::CredentialsConfig, input_config::InputConfig,
    logging_config::LoggingConfig, sheets_config::SpreadsheetConfig,
};

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    pub input: InputConfig,
    pub credentials: CredentialsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Defaults, then the optional file named by `CONFIG_PATH`, then
    /// `SOUL_VECTORS_<SECTION>__<FIELD>` environment variables.
    pub fn load() -> PushResult<Self> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        let config = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(
                Environment::with_prefix("SOUL_VECTORS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .change_context(PushError::Config)
            .attach_printable_lazy(|| format!("Error reading config file '{config_path}'"))?;

        Self::from_config(config)
            .attach_printable_lazy(|| format!("Config file: '{config_path}'"))
    }

    pub fn from_config(config: Config) -> PushResult<Self> {
        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context(PushError::Config)
            .attach_printable("Config to JSON failed")?;

        use serde::de::IntoDeserializer;
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        AppConfig::deserialize(path_de).map_err(|e| {
            let path_str = track
                .path()
                .iter()
                .map(|seg| match seg {
                    Segment::Seq { index } => format!("[{}]", index),
                    Segment::Map { key } => format!(".{}", key),
                    Segment::Enum { variant } => format!("::{}", variant),
                    Segment::Unknown => String::from("<?>"),
                })
                .collect::<String>();
            report!(PushError::Config).attach_printable(format!(
                "Failed to deserialize config: {}\nField path: {}",
                e,
                path_str.trim_start_matches('.')
            ))
        })
    }

    pub fn target_range(&self) -> TargetRange {
        TargetRange::new(&*self.sheets.spreadsheet_id, &*self.sheets.sheet_name)
    }

    /// Relative input paths are taken from the directory of the running executable.
    pub fn input_path(&self) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        self.input.resolve(exe_dir.as_deref())
    }
}
