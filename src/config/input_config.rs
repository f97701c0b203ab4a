use std::path::{Path, PathBuf};

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
    /// Field rendered as embedded JSON instead of plain text.
    pub vector_field: Box<str>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("soul_with_vectors.json"),
            vector_field: "vector".into(),
        }
    }
}

impl InputConfig {
    pub fn resolve(&self, base_dir: Option<&Path>) -> PathBuf {
        match base_dir {
            Some(base_dir) if self.path.is_relative() => base_dir.join(&self.path),
            _ => self.path.clone(),
        }
    }
}
