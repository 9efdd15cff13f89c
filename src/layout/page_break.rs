//! # Page Break Decisions
//!
//! Where a run of equally tall lines splits across a page boundary.
//! Atomic blocks never come through here; [`Flow::ensure_room`] moves them
//! whole. A paragraph may split, but never so that fewer than
//! `min_orphans` lines stay behind or fewer than `min_widows` are carried
//! over.
//!
//! [`Flow::ensure_room`]: super::Flow::ensure_room

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRule {
    pub min_orphans: usize,
    pub min_widows: usize,
}

impl Default for SplitRule {
    fn default() -> Self {
        Self {
            min_orphans: super::MIN_ORPHAN_LINES,
            min_widows: super::MIN_WIDOW_LINES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Every line fits here.
    Place,
    /// Nothing should be placed here; start the run on the next page.
    MoveToNextPage,
    /// Place `lines_here`, carry the rest over.
    Split { lines_here: usize },
}

/// How many lines of height `line_height` fit into `remaining` points.
pub fn lines_that_fit(remaining: f64, line_height: f64) -> usize {
    if remaining <= 0.0 {
        return 0;
    }
    ((remaining + 1e-6) / line_height).floor() as usize
}

/// Decide how `lines` lines of `line_height` points go onto a page with
/// `remaining` points left.
pub fn decide_break(
    remaining: f64,
    line_height: f64,
    lines: usize,
    rule: SplitRule,
) -> BreakDecision {
    if lines == 0 || line_height <= 0.0 {
        return BreakDecision::Place;
    }

    let fit = lines_that_fit(remaining, line_height);
    if fit >= lines {
        return BreakDecision::Place;
    }

    // Leave at least `min_widows` for the next page.
    let here = fit.min(lines.saturating_sub(rule.min_widows));
    if here == 0 || here < rule.min_orphans {
        return BreakDecision::MoveToNextPage;
    }
    BreakDecision::Split { lines_here: here }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: SplitRule = SplitRule {
        min_orphans: 2,
        min_widows: 2,
    };

    #[test]
    fn test_everything_fits() {
        assert_eq!(decide_break(100.0, 14.0, 7, RULE), BreakDecision::Place);
    }

    #[test]
    fn test_exact_fit_is_place() {
        assert_eq!(decide_break(42.0, 14.0, 3, RULE), BreakDecision::Place);
    }

    #[test]
    fn test_plain_split() {
        assert_eq!(
            decide_break(45.0, 14.0, 10, RULE),
            BreakDecision::Split { lines_here: 3 }
        );
    }

    #[test]
    fn test_single_orphan_moves() {
        assert_eq!(decide_break(20.0, 14.0, 5, RULE), BreakDecision::MoveToNextPage);
    }

    #[test]
    fn test_widow_pulls_a_line_back() {
        // 4 of 5 fit, which would carry a single line over.
        assert_eq!(
            decide_break(60.0, 14.0, 5, RULE),
            BreakDecision::Split { lines_here: 3 }
        );
    }

    #[test]
    fn test_three_lines_never_split() {
        // Splitting 3 lines always strands one of them.
        assert_eq!(decide_break(30.0, 14.0, 3, RULE), BreakDecision::MoveToNextPage);
    }

    #[test]
    fn test_nothing_fits() {
        assert_eq!(decide_break(-3.0, 14.0, 2, RULE), BreakDecision::MoveToNextPage);
        assert_eq!(lines_that_fit(-3.0, 14.0), 0);
    }

    #[test]
    fn test_relaxed_rule_allows_single_lines() {
        let rule = SplitRule {
            min_orphans: 1,
            min_widows: 1,
        };
        assert_eq!(
            decide_break(20.0, 14.0, 3, rule),
            BreakDecision::Split { lines_here: 1 }
        );
    }
}
