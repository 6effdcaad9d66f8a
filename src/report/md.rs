use crate::types::result::{ScoredPage, ScoreReport};

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Ecoindex Report\n\n");
    output.push_str(&format!("Generated: {}\n", report.generated_at));
    output.push_str(&format!("Dataset: {}\n\n", report.dataset_fingerprint));

    output.push_str("## Pages\n\n");
    if report.pages.is_empty() {
        output.push_str("- none\n");
    } else {
        for page in &report.pages {
            output.push_str(&format!(
                "- **{}** score {:.0}: {} — nodes {}, size {:.1} KB, requests {}, ges {:.2} gCO2e, water {:.2} cl\n",
                page.ecoindex.grade,
                page.ecoindex.score,
                page_label(page),
                page.metrics.nodes,
                page.metrics.size,
                page.metrics.requests,
                page.ecoindex.ges,
                page.ecoindex.water
            ));
        }
    }

    if let Some(worst) = report.worst_grade() {
        output.push_str(&format!(
            "\n## Summary\n\n- pages: {}\n- worst grade: {}\n",
            report.pages.len(),
            worst
        ));
    }

    output
}

fn page_label(page: &ScoredPage) -> &str {
    page.url
        .as_deref()
        .or(page.source.as_deref())
        .unwrap_or("(unnamed page)")
}
