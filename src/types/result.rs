use crate::types::metrics::PageMetrics;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal ecoindex grade, `A` best through `G` worst. The derived `Ord`
/// follows declaration order, so `Grade::A < Grade::G`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::G => "G",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scoring engine's output for one metric triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ecoindex {
    pub grade: Grade,
    pub score: f64,
    pub ges: f64,
    pub water: f64,
}

/// One scored page as reported by the CLI: the observed metrics, the
/// computed ecoindex, and caller-side metadata the engine never sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub metrics: PageMetrics,
    pub ecoindex: Ecoindex,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub version: String,
    pub generated_at: String,
    pub dataset_fingerprint: String,
    pub pages: Vec<ScoredPage>,
}

impl ScoreReport {
    pub fn new(dataset_fingerprint: String, pages: Vec<ScoredPage>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            dataset_fingerprint,
            pages,
        }
    }

    pub fn worst_grade(&self) -> Option<Grade> {
        self.pages.iter().map(|page| page.ecoindex.grade).max()
    }
}
