//! Pros/cons insight extraction
//!
//! Heuristic, not semantic: scan reviews of the matching polarity for fixed
//! signal words and lift the first sentence fragment containing the hit.
//! Scan order, length thresholds, and caps are contract; changing them
//! changes which snippets surface.

use reviewlens_core::{KeyInsights, Sentiment, SentimentLabel};

const POSITIVE_PATTERNS: [&str; 7] = [
    "excellent",
    "great",
    "amazing",
    "perfect",
    "love",
    "fantastic",
    "outstanding",
];

const NEGATIVE_PATTERNS: [&str; 7] = [
    "terrible",
    "awful",
    "horrible",
    "hate",
    "worst",
    "disappointing",
    "poor",
];

/// Candidates collected during the scan before final truncation
const PRO_SCAN_LIMIT: usize = 6;
const CON_SCAN_LIMIT: usize = 4;

/// Sizes of the returned lists
const PRO_LIMIT: usize = 4;
const CON_LIMIT: usize = 3;

/// Fragments at or below this length carry too little context to surface
const MIN_FRAGMENT_CHARS: usize = 10;
const MAX_FRAGMENT_CHARS: usize = 50;

/// Extract pros/cons snippets from reviews and their paired results
pub fn extract(reviews: &[String], results: &[Sentiment]) -> KeyInsights {
    let mut pros = collect(
        reviews,
        results,
        SentimentLabel::Positive,
        &POSITIVE_PATTERNS,
        PRO_SCAN_LIMIT,
    );
    let mut cons = collect(
        reviews,
        results,
        SentimentLabel::Negative,
        &NEGATIVE_PATTERNS,
        CON_SCAN_LIMIT,
    );

    // Generic fallbacks when the heuristic finds nothing.
    if pros.is_empty() {
        pros = vec![
            "Customers appreciate the overall quality".to_string(),
            "Good value for money".to_string(),
            "Positive user experience".to_string(),
        ];
    }
    if cons.is_empty() {
        cons = vec![
            "Some room for improvement in design".to_string(),
            "Could benefit from better instructions".to_string(),
        ];
    }

    pros.truncate(PRO_LIMIT);
    cons.truncate(CON_LIMIT);

    KeyInsights { pros, cons }
}

fn collect(
    reviews: &[String],
    results: &[Sentiment],
    label: SentimentLabel,
    patterns: &[&str],
    scan_limit: usize,
) -> Vec<String> {
    let mut snippets: Vec<String> = Vec::new();

    for (review, result) in reviews.iter().zip(results) {
        if result.label != label {
            continue;
        }
        let lowered = review.to_lowercase();

        for pattern in patterns {
            if snippets.len() >= scan_limit {
                return snippets;
            }
            if !lowered.contains(pattern) {
                continue;
            }

            let fragment = review
                .split(['.', '!', '?'])
                .find(|fragment| fragment.to_lowercase().contains(pattern));
            let Some(fragment) = fragment else { continue };

            let trimmed = fragment.trim();
            if trimmed.chars().count() <= MIN_FRAGMENT_CHARS {
                continue;
            }

            let snippet = truncate_snippet(trimmed);
            if !snippets.contains(&snippet) {
                snippets.push(snippet);
            }
        }
    }

    snippets
}

/// Raw char-count truncation, no word-boundary handling
fn truncate_snippet(fragment: &str) -> String {
    if fragment.chars().count() > MAX_FRAGMENT_CHARS {
        let mut snippet: String = fragment.chars().take(MAX_FRAGMENT_CHARS).collect();
        snippet.push_str("...");
        snippet
    } else {
        fragment.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(reviews: &[&str]) -> Vec<String> {
        reviews.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn lifts_the_sentence_fragment_containing_the_hit() {
        let reviews = owned(&["Arrived quickly. The build quality is excellent. Would buy again."]);
        let results = [Sentiment::positive(0.95)];

        let insights = extract(&reviews, &results);

        assert_eq!(insights.pros[0], "The build quality is excellent");
    }

    #[test]
    fn long_fragments_are_cut_at_fifty_chars() {
        let reviews = owned(&[
            "This is an excellent product that exceeded every single expectation I had for it",
        ]);
        let results = [Sentiment::positive(0.99)];

        let insights = extract(&reviews, &results);

        assert_eq!(
            insights.pros[0],
            "This is an excellent product that exceeded every s..."
        );
        assert_eq!(insights.pros[0].chars().count(), MAX_FRAGMENT_CHARS + 3);
    }

    #[test]
    fn short_fragments_are_skipped() {
        let reviews = owned(&["Great. Does the job fine overall, no complaints from me."]);
        let results = [Sentiment::positive(0.9)];

        let insights = extract(&reviews, &results);

        // "Great" is under the length floor and no other pattern matches,
        // so the generic fallback kicks in.
        assert_eq!(insights.pros[0], "Customers appreciate the overall quality");
    }

    #[test]
    fn polarity_must_match_the_paired_result() {
        // Pattern word present, but the classifier disagrees.
        let reviews = owned(&["Supposedly excellent quality but mine broke right away"]);
        let results = [Sentiment::negative(0.85)];

        let insights = extract(&reviews, &results);

        assert!(!insights
            .pros
            .iter()
            .any(|p| p.contains("excellent")));
    }

    #[test]
    fn duplicate_snippets_are_suppressed() {
        let review = "Absolutely love it, the screen is amazing and bright";
        let reviews = owned(&[review, review]);
        let results = [Sentiment::positive(0.9), Sentiment::positive(0.9)];

        let insights = extract(&reviews, &results);

        assert_eq!(insights.pros.len(), 1);
    }

    #[test]
    fn pros_cap_at_four_and_cons_at_three() {
        let reviews = owned(&[
            "Excellent screen quality for the price point here",
            "Really great battery life compared to my old one",
            "The sound is amazing even at maximum volume here",
            "A perfect fit for my desk setup and daily usage",
            "I love the keyboard feel during long sessions",
            "Fantastic value overall, would order another one",
            "Terrible packaging, the box arrived crushed flat",
            "An awful smell out of the box that never faded",
            "Horrible customer support response times here",
            "I hate the proprietary charger it shipped with",
        ]);
        let results = [
            Sentiment::positive(0.9),
            Sentiment::positive(0.9),
            Sentiment::positive(0.9),
            Sentiment::positive(0.9),
            Sentiment::positive(0.9),
            Sentiment::positive(0.9),
            Sentiment::negative(0.9),
            Sentiment::negative(0.9),
            Sentiment::negative(0.9),
            Sentiment::negative(0.9),
        ];

        let insights = extract(&reviews, &results);

        assert_eq!(insights.pros.len(), PRO_LIMIT);
        assert_eq!(insights.cons.len(), CON_LIMIT);
    }

    #[test]
    fn zero_matches_fall_back_to_generic_text() {
        let reviews = owned(&["Does what it says on the tin, nothing more to add"]);
        let results = [Sentiment::positive(0.7)];

        let insights = extract(&reviews, &results);

        assert_eq!(insights.pros.len(), 3);
        assert_eq!(insights.cons.len(), 2);
        assert_eq!(insights.cons[0], "Some room for improvement in design");
    }
}
