//! Sample reviews for demos and first-run seeding

/// A fixed batch of demo reviews covering the whole topic table
pub fn sample_reviews() -> Vec<String> {
    [
        "This product is absolutely amazing! The build quality is excellent and it arrived super fast. Highly recommend!",
        "Great value for money. The design is beautiful and it works perfectly. Customer service was very helpful.",
        "I love this product! It's exactly what I was looking for. Fast shipping and great packaging.",
        "Outstanding quality and performance. Worth every penny. The design is sleek and modern.",
        "Fantastic product! Easy to use and very durable. Great customer support team.",
        "Excellent build quality but the price is a bit high. Overall satisfied with the purchase.",
        "Good product but the instructions were unclear. Design could be better.",
        "The product works fine but shipping was slower than expected. Packaging was adequate.",
        "Average product. Nothing special but does the job. Price is reasonable.",
        "Disappointed with the quality. The design looks cheap and the material feels flimsy.",
        "Terrible customer service. Product arrived damaged and took forever to get a replacement.",
        "Overpriced for what you get. The performance is poor and it broke after a week.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_reviews_all_nontrivial() {
        let reviews = sample_reviews();
        assert_eq!(reviews.len(), 12);
        assert!(reviews.iter().all(|r| r.trim().len() > 10));
    }
}
