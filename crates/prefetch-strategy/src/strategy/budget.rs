//! How many ranked candidates survive a threshold.

/// `floor(threshold * candidates) + 1`, clamped to `[1, candidates]`.
///
/// Always keeps at least one candidate when there is any, even for a tiny
/// threshold. An empty candidate set keeps nothing.
pub fn selection_size(candidates: usize, threshold: f64) -> usize {
    if candidates == 0 {
        return 0;
    }
    let k = (threshold * candidates as f64).floor() as usize + 1;
    k.clamp(1, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_floor_plus_one() {
        assert_eq!(selection_size(3, 0.5), 2);
        assert_eq!(selection_size(10, 0.25), 3);
        assert_eq!(selection_size(4, 0.5), 3);
    }

    #[test]
    fn never_exceeds_candidate_count() {
        assert_eq!(selection_size(3, 1.0), 3);
        assert_eq!(selection_size(1, 1.0), 1);
    }

    #[test]
    fn tiny_threshold_still_keeps_one() {
        assert_eq!(selection_size(100, 1e-9), 1);
    }

    #[test]
    fn empty_set_keeps_nothing() {
        assert_eq!(selection_size(0, 0.5), 0);
    }
}
