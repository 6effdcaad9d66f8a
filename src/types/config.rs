use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EcoindexConfig {
    pub dataset: Option<DatasetConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl EcoindexConfig {
    pub fn dataset_path(&self) -> Option<&str> {
        self.dataset
            .as_ref()
            .and_then(|dataset| dataset.path.as_deref())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }
}
