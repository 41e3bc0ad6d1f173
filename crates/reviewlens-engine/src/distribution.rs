//! Sentiment distribution aggregation
//!
//! Collapses per-review classifier results into the overall score and the
//! positive/neutral/negative percentage split.

use reviewlens_core::Sentiment;

/// Overall score and three-way percentage distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentBreakdown {
    /// 0-5 scale, one decimal place
    pub overall: f64,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Aggregate per-review results into a distribution
///
/// A negative result's confidence counts against the overall score: the
/// accumulated value is `score` for positive labels and `1 - score` for
/// negative ones. Not defined for empty input; the orchestrator never calls
/// it with an empty slice.
pub fn aggregate(results: &[Sentiment]) -> SentimentBreakdown {
    debug_assert!(!results.is_empty(), "aggregate requires at least one result");

    let mut positive_count = 0usize;
    let mut negative_count = 0usize;
    let mut total_score = 0f64;

    for result in results {
        if result.label.is_positive() {
            positive_count += 1;
            total_score += f64::from(result.score);
        } else {
            negative_count += 1;
            total_score += 1.0 - f64::from(result.score);
        }
    }

    let count = results.len() as f64;
    let positive = ((positive_count as f64 / count) * 100.0).round() as u32;
    let negative = ((negative_count as f64 / count) * 100.0).round() as u32;
    // Neutral absorbs rounding, floored at zero.
    let neutral = 100u32.saturating_sub(positive + negative);
    let overall = (total_score / count * 5.0 * 10.0).round() / 10.0;

    SentimentBreakdown {
        overall,
        positive,
        neutral,
        negative,
    }
}
