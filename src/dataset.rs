use crate::error::{EcoindexError, Result};
use crate::types::result::Grade;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reference dataset shipped with the binary. Refreshed by regenerating the
/// file from the published upstream dataset, never at runtime.
pub const EMBEDDED_DATASET: &str = include_str!("../data/ecoindex_reference.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceDataset {
    pub medians: MetricBounds,
    pub targets: MetricBounds,
    pub quantiles: Quantiles,
    pub grades: Vec<GradeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MetricBounds {
    pub dom_size: f64,
    pub nb_request: f64,
    pub response_size: f64,
}

/// The three ascending breakpoint tables the quantile locator reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quantiles {
    pub dom_size: Vec<f64>,
    pub nb_request: Vec<f64>,
    pub response_size: Vec<f64>,
}

/// Grade chart entry: threshold and display color for one letter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeRef {
    pub grade: Grade,
    pub value: f64,
    pub color: String,
}

impl ReferenceDataset {
    /// Fails fast on any malformation that would otherwise surface as a
    /// silent NaN during scoring.
    pub fn validate(&self) -> Result<()> {
        validate_table("quantiles.dom_size", &self.quantiles.dom_size)?;
        validate_table("quantiles.nb_request", &self.quantiles.nb_request)?;
        validate_table("quantiles.response_size", &self.quantiles.response_size)?;
        self.validate_grades()
    }

    fn validate_grades(&self) -> Result<()> {
        if self.grades.len() != 7 {
            return Err(EcoindexError::DatasetInvalid(format!(
                "grades: expected 7 entries, got {}",
                self.grades.len()
            )));
        }
        for pair in self.grades.windows(2) {
            if pair[1].grade <= pair[0].grade {
                return Err(EcoindexError::DatasetInvalid(format!(
                    "grades: {} listed after {}",
                    pair[1].grade, pair[0].grade
                )));
            }
            if pair[1].value >= pair[0].value {
                return Err(EcoindexError::DatasetInvalid(format!(
                    "grades: threshold {} for {} not below {} for {}",
                    pair[1].value, pair[1].grade, pair[0].value, pair[0].grade
                )));
            }
        }
        Ok(())
    }

    pub fn color_for(&self, grade: Grade) -> Option<&str> {
        self.grades
            .iter()
            .find(|entry| entry.grade == grade)
            .map(|entry| entry.color.as_str())
    }
}

fn validate_table(name: &str, table: &[f64]) -> Result<()> {
    if table.len() < 2 {
        return Err(EcoindexError::DatasetInvalid(format!(
            "{name}: needs at least 2 breakpoints, got {}",
            table.len()
        )));
    }
    for (i, breakpoint) in table.iter().enumerate() {
        if !breakpoint.is_finite() {
            return Err(EcoindexError::DatasetInvalid(format!(
                "{name}: breakpoint {i} is not finite"
            )));
        }
    }
    for (i, pair) in table.windows(2).enumerate() {
        // equal adjacent breakpoints would divide by zero in the locator
        if pair[1] <= pair[0] {
            return Err(EcoindexError::DatasetInvalid(format!(
                "{name}: breakpoint {} ({}) must be greater than breakpoint {i} ({})",
                i + 1,
                pair[1],
                pair[0]
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Embedded => f.write_str("embedded"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated dataset plus its provenance, loaded once at startup and
/// passed down by reference.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: ReferenceDataset,
    pub fingerprint: String,
    pub source: DatasetSource,
}

pub fn parse(text: &str) -> Result<ReferenceDataset> {
    let dataset: ReferenceDataset =
        serde_json::from_str(text).map_err(|e| EcoindexError::DatasetParse(e.to_string()))?;
    dataset.validate()?;
    Ok(dataset)
}

pub fn embedded() -> Result<ReferenceDataset> {
    parse(EMBEDDED_DATASET)
}

pub fn load(override_path: Option<&Path>) -> Result<LoadedDataset> {
    match override_path {
        Some(path) => {
            if !path.exists() {
                return Err(EcoindexError::DatasetNotFound(path.display().to_string()));
            }
            let text = fs::read_to_string(path)?;
            let dataset: ReferenceDataset = serde_json::from_str(&text)
                .map_err(|e| EcoindexError::DatasetParse(format!("{}: {}", path.display(), e)))?;
            dataset.validate()?;
            debug!(path = %path.display(), "loaded reference dataset from file");
            Ok(LoadedDataset {
                dataset,
                fingerprint: sha256_hex(text.as_bytes()),
                source: DatasetSource::File(path.to_path_buf()),
            })
        }
        None => {
            let dataset = embedded()?;
            debug!("loaded embedded reference dataset");
            Ok(LoadedDataset {
                dataset,
                fingerprint: sha256_hex(EMBEDDED_DATASET.as_bytes()),
                source: DatasetSource::Embedded,
            })
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
