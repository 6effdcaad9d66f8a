// Both estimates round to two decimals by scaling to centi-units, rounding
// to the nearest integer, and rescaling. The intermediate integer round is
// part of the contract; a direct round-to-2-decimals can diverge at exact
// half-cent boundaries.

/// Greenhouse-gas emission equivalent, in grams of CO2e.
pub fn ges(score: f64) -> f64 {
    (100.0 * (2.0 + 2.0 * (50.0 - score) / 100.0)).round() / 100.0
}

/// Water consumption equivalent, in centiliters.
pub fn water(score: f64) -> f64 {
    (100.0 * (3.0 + 3.0 * (50.0 - score) / 100.0)).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_50_is_the_zero_offset_point() {
        assert_eq!(ges(50.0), 2.0);
        assert_eq!(water(50.0), 3.0);
    }

    #[test]
    fn known_values_hold() {
        assert_eq!(ges(0.0), 3.0);
        assert_eq!(water(0.0), 4.5);
        assert_eq!(ges(2.0), 2.96);
        assert_eq!(water(2.0), 4.44);
        assert_eq!(ges(10.0), 2.8);
        assert_eq!(water(10.0), 4.2);
        assert_eq!(ges(70.0), 1.6);
        assert_eq!(water(70.0), 2.4);
        assert_eq!(ges(100.0), 1.0);
        assert_eq!(water(100.0), 1.5);
    }

    #[test]
    fn both_are_strictly_decreasing_affine_in_the_score() {
        // slope is -0.02 per point for ges, -0.03 for water
        for step in 0..10 {
            let s = f64::from(step) * 10.0;
            assert!((ges(s) - ges(s + 10.0) - 0.2).abs() < 1e-9);
            assert!((water(s) - water(s + 10.0) - 0.3).abs() < 1e-9);
        }
    }

    #[test]
    fn extreme_scores_are_not_clamped() {
        // a score past 150 legally drives ges below zero
        assert!(ges(200.0) < 0.0);
        assert!(water(220.0) < 0.0);
    }
}
