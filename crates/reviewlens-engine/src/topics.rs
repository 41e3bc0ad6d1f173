//! Per-topic sentiment breakdown
//!
//! Assigns reviews to fixed product-aspect topics by keyword membership and
//! accumulates sentiment and keyword evidence per topic.

use reviewlens_core::{Sentiment, TopicSentiment};

/// Topic keyword table, in declaration order
///
/// Declaration order is load-bearing: it breaks ties when topics have equal
/// mention counts. Keywords are lowercase and matched as substrings of the
/// lowercased review.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Quality",
        &[
            "quality", "build", "construction", "material", "durable", "sturdy", "solid", "cheap",
            "flimsy",
        ],
    ),
    (
        "Price",
        &[
            "price", "cost", "expensive", "cheap", "value", "money", "worth", "affordable",
            "budget",
        ],
    ),
    (
        "Shipping",
        &[
            "shipping", "delivery", "fast", "slow", "arrived", "package", "packaging", "box",
        ],
    ),
    (
        "Design",
        &[
            "design", "look", "appearance", "color", "style", "beautiful", "ugly", "aesthetic",
        ],
    ),
    (
        "Customer Service",
        &[
            "service", "support", "help", "staff", "representative", "response", "communication",
        ],
    ),
    (
        "Performance",
        &[
            "performance", "speed", "fast", "slow", "efficient", "lag", "smooth", "responsive",
        ],
    ),
    (
        "Ease of Use",
        &[
            "easy", "difficult", "simple", "complex", "user-friendly", "intuitive", "confusing",
        ],
    ),
];

/// Breakdown is truncated to the most-mentioned topics
const MAX_TOPICS: usize = 5;

/// Distinct keywords reported per topic
const MAX_KEYWORDS: usize = 3;

#[derive(Default)]
struct TopicAccumulator {
    scores: Vec<f64>,
    mentions: u32,
    keywords: Vec<&'static str>,
}

/// Compute the per-topic sentiment breakdown
///
/// Topics with zero mentions are omitted. Output is ordered by descending
/// mention count, table order on ties, and capped at 5 entries.
pub fn classify(reviews: &[String], results: &[Sentiment]) -> Vec<TopicSentiment> {
    let mut accumulators: Vec<TopicAccumulator> = TOPIC_KEYWORDS
        .iter()
        .map(|_| TopicAccumulator::default())
        .collect();

    for (review, result) in reviews.iter().zip(results) {
        let score = if result.label.is_positive() {
            f64::from(result.score) * 100.0
        } else {
            (1.0 - f64::from(result.score)) * 100.0
        };
        let lowered = review.to_lowercase();

        for ((_, keywords), accumulator) in TOPIC_KEYWORDS.iter().zip(&mut accumulators) {
            let matched: Vec<&'static str> = keywords
                .iter()
                .copied()
                .filter(|keyword| lowered.contains(keyword))
                .collect();
            if matched.is_empty() {
                continue;
            }

            accumulator.mentions += 1;
            accumulator.scores.push(score);
            accumulator.keywords.extend(matched);
        }
    }

    let mut breakdown: Vec<TopicSentiment> = TOPIC_KEYWORDS
        .iter()
        .zip(accumulators)
        .filter(|(_, accumulator)| accumulator.mentions > 0)
        .map(|(&(topic, _), accumulator)| {
            let mean =
                accumulator.scores.iter().sum::<f64>() / accumulator.scores.len() as f64;
            TopicSentiment {
                topic: topic.to_string(),
                sentiment: mean.round() as u32,
                mentions: accumulator.mentions,
                keywords: distinct_keywords(&accumulator.keywords),
            }
        })
        .collect();

    // Stable sort: table order survives among equal mention counts.
    breakdown.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    breakdown.truncate(MAX_TOPICS);
    breakdown
}

/// First distinct keywords from the pool, insertion order, capped
fn distinct_keywords(pool: &[&str]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for keyword in pool {
        let keyword = keyword.to_string();
        if !distinct.contains(&keyword) {
            distinct.push(keyword);
            if distinct.len() == MAX_KEYWORDS {
                break;
            }
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(reviews: &[&str]) -> Vec<String> {
        reviews.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn mentions_accumulate_per_review() {
        let reviews = owned(&[
            "This product is absolutely amazing! Excellent build quality.",
            "Terrible customer service, arrived damaged.",
        ]);
        let results = [Sentiment::positive(0.95), Sentiment::negative(0.9)];

        let breakdown = classify(&reviews, &results);

        let quality = breakdown.iter().find(|t| t.topic == "Quality").unwrap();
        assert_eq!(quality.mentions, 1);
        assert_eq!(quality.sentiment, 95);
        assert_eq!(quality.keywords, vec!["quality", "build"]);

        let service = breakdown
            .iter()
            .find(|t| t.topic == "Customer Service")
            .unwrap();
        assert_eq!(service.mentions, 1);
        assert_eq!(service.sentiment, 10);
    }

    #[test]
    fn equal_mentions_keep_table_order() {
        let reviews = owned(&[
            "This product is absolutely amazing! Excellent build quality.",
            "Terrible customer service, arrived damaged.",
        ]);
        let results = [Sentiment::positive(0.95), Sentiment::negative(0.9)];

        let breakdown = classify(&reviews, &results);

        // "arrived" also trips Shipping; all three topics have one mention,
        // so table order decides.
        let names: Vec<&str> = breakdown.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(names, vec!["Quality", "Shipping", "Customer Service"]);
    }

    #[test]
    fn most_mentioned_topic_comes_first() {
        let reviews = owned(&[
            "Great price for what you get",
            "A bit expensive but worth the money",
            "Shipping took forever",
        ]);
        let results = [
            Sentiment::positive(0.9),
            Sentiment::positive(0.7),
            Sentiment::negative(0.8),
        ];

        let breakdown = classify(&reviews, &results);

        assert_eq!(breakdown[0].topic, "Price");
        assert_eq!(breakdown[0].mentions, 2);
        // round((90 + 70) / 2)
        assert_eq!(breakdown[0].sentiment, 80);
    }

    #[test]
    fn zero_mention_topics_are_omitted() {
        let reviews = owned(&["Nice color and style"]);
        let results = [Sentiment::positive(0.8)];

        let breakdown = classify(&reviews, &results);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].topic, "Design");
    }

    #[test]
    fn breakdown_caps_at_five_topics() {
        // One review touching six topics: Quality, Price, Shipping, Design,
        // Performance, Ease of Use.
        let reviews = owned(&[
            "Solid build, fair price, fast delivery, sleek design, smooth performance, easy to set up",
        ]);
        let results = [Sentiment::positive(0.9)];

        let breakdown = classify(&reviews, &results);

        assert_eq!(breakdown.len(), MAX_TOPICS);
        // All tied at one mention: the first five topics in table order win.
        let names: Vec<&str> = breakdown.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(
            names,
            vec!["Quality", "Price", "Shipping", "Design", "Performance"]
        );
    }

    #[test]
    fn keywords_dedup_to_first_three_distinct() {
        let reviews = owned(&[
            "The build quality is great",
            "Sturdy build, premium material, quality construction",
        ]);
        let results = [Sentiment::positive(0.9), Sentiment::positive(0.9)];

        let breakdown = classify(&reviews, &results);

        let quality = breakdown.iter().find(|t| t.topic == "Quality").unwrap();
        // Pool: [quality, build] + [quality, build, construction, material,
        // sturdy]; distinct, insertion order, first three.
        assert_eq!(quality.keywords, vec!["quality", "build", "construction"]);
    }
}
