pub mod json;
pub mod md;
pub mod text;

use crate::error::EcoindexError;
use crate::types::result::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, EcoindexError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(EcoindexError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
