use crate::types::result::{ScoredPage, ScoreReport};

pub fn to_text(report: &ScoreReport) -> String {
    let mut output = String::new();
    for page in &report.pages {
        output.push_str(&format!(
            "grade {}  score {:>3.0}  ges {:.2} gCO2e  water {:.2} cl  {}\n",
            page.ecoindex.grade,
            page.ecoindex.score,
            page.ecoindex.ges,
            page.ecoindex.water,
            page_label(page)
        ));
    }
    if report.pages.len() > 1 {
        if let Some(worst) = report.worst_grade() {
            output.push_str(&format!(
                "{} pages, worst grade {}\n",
                report.pages.len(),
                worst
            ));
        }
    }
    output
}

fn page_label(page: &ScoredPage) -> String {
    match (&page.url, &page.source) {
        (Some(url), _) => url.clone(),
        (None, Some(source)) => source.clone(),
        (None, None) => format!(
            "nodes {}, size {:.1} KB, requests {}",
            page.metrics.nodes, page.metrics.size, page.metrics.requests
        ),
    }
}
