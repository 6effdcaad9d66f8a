pub mod grade;
pub mod impact;
pub mod quantile;

use crate::dataset::Quantiles;
use crate::types::metrics::PageMetrics;
use crate::types::result::Ecoindex;

/// Composite ecoindex score.
///
/// Combines the three quantile positions with the fixed 3:2:1 weighting of
/// DOM nodes, requests, and size, then rounds with `f64::round` (half away
/// from zero). The formula does not clamp; pathological inputs can leave
/// the nominal 0..=100 range.
pub fn score(quantiles: &Quantiles, metrics: &PageMetrics) -> f64 {
    let q_dom = quantile::locate(&quantiles.dom_size, metrics.nodes as f64);
    let q_req = quantile::locate(&quantiles.nb_request, metrics.requests as f64);
    let q_size = quantile::locate(&quantiles.response_size, metrics.size);

    (100.0 - 5.0 * (3.0 * q_dom + 2.0 * q_req + q_size) / 6.0).round()
}

/// Scores one metric triple against the reference tables. Pure and
/// deterministic; identical inputs always yield an identical result.
pub fn evaluate(quantiles: &Quantiles, metrics: &PageMetrics) -> Ecoindex {
    let score = score(quantiles, metrics);

    Ecoindex {
        grade: grade::grade_for(score),
        score,
        ges: impact::ges(score),
        water: impact::water(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::types::result::Grade;

    fn fixture_quantiles() -> Quantiles {
        Quantiles {
            dom_size: vec![100.0, 200.0, 300.0],
            nb_request: vec![100.0, 200.0, 300.0],
            response_size: vec![100.0, 200.0, 300.0],
        }
    }

    fn metrics(nodes: u64, size: f64, requests: u64) -> PageMetrics {
        PageMetrics {
            nodes,
            size,
            requests,
        }
    }

    #[test]
    fn minimum_bucket_on_every_table_scores_100() {
        // each metric sits exactly on the first breakpoint, quantile 0
        let result = evaluate(&fixture_quantiles(), &metrics(100, 100.0, 100));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.grade, Grade::A);
        assert_eq!(result.ges, 1.0);
        assert_eq!(result.water, 1.5);
    }

    #[test]
    fn pegged_tables_floor_the_score() {
        // three-point tables peg at quantile 2: 100 - 5 * 12 / 6 = 90
        let result = evaluate(&fixture_quantiles(), &metrics(10_000, 1e9, 10_000));
        assert_eq!(result.score, 90.0);
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let quantiles = fixture_quantiles();
        let input = metrics(150, 245.5, 142);
        let first = evaluate(&quantiles, &input);
        let second = evaluate(&quantiles, &input);
        assert_eq!(first, second);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
        assert_eq!(first.ges.to_bits(), second.ges.to_bits());
        assert_eq!(first.water.to_bits(), second.water.to_bits());
    }

    #[test]
    fn shipped_dataset_scores_an_empty_page_100() {
        let dataset = dataset::embedded().expect("embedded dataset should load");
        let result = evaluate(&dataset.quantiles, &metrics(0, 0.0, 0));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.grade, Grade::A);
        assert_eq!(result.ges, 1.0);
        assert_eq!(result.water, 1.5);
    }

    #[test]
    fn shipped_dataset_scores_a_light_page() {
        let dataset = dataset::embedded().expect("embedded dataset should load");
        let result = evaluate(&dataset.quantiles, &metrics(100, 100.0, 100));
        assert_eq!(result.score, 72.0);
        assert_eq!(result.grade, Grade::B);
        assert_eq!(result.ges, 1.56);
        assert_eq!(result.water, 2.34);
    }

    #[test]
    fn shipped_dataset_scores_a_heavy_page() {
        let dataset = dataset::embedded().expect("embedded dataset should load");
        let result = evaluate(&dataset.quantiles, &metrics(2355, 2493.0, 267));
        assert_eq!(result.score, 10.0);
        assert_eq!(result.grade, Grade::G);
    }

    #[test]
    fn shipped_dataset_floors_a_pegged_page_at_zero() {
        let dataset = dataset::embedded().expect("embedded dataset should load");
        let result = evaluate(&dataset.quantiles, &metrics(u64::MAX, 1e12, u64::MAX));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.grade, Grade::G);
        assert_eq!(result.ges, 3.0);
        assert_eq!(result.water, 4.5);
    }
}
