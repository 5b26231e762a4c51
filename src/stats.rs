use std::collections::HashMap;

use compact_str::CompactString;

/// Aggregate statistics for one category bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    /// Category label (never empty; empty-label observations are skipped)
    pub label: CompactString,
    /// Number of observations in the bucket
    pub count: usize,
    /// Sum of weights; this is what drives the layout
    pub total: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); zero for a
    /// single-observation bucket
    pub std_dev: f64,
    pub median: f64,
    /// Share of the grand total, in percent
    pub pct_of_total: f64,
}

/// Group raw `(label, weight)` observations into per-category buckets and
/// compute their statistics, sorted by total weight descending. Ties keep
/// first-seen order (the sort is stable). Observations with an empty label
/// are skipped.
pub fn aggregate(observations: &[(&str, f64)]) -> Vec<CategoryStats> {
    let mut order: Vec<CompactString> = Vec::new();
    let mut buckets: HashMap<CompactString, Vec<f64>> = HashMap::new();

    for &(label, weight) in observations {
        if label.is_empty() {
            continue;
        }
        let key = CompactString::new(label);
        let bucket = buckets.entry(key.clone()).or_default();
        if bucket.is_empty() {
            order.push(key);
        }
        bucket.push(weight);
    }

    let grand_total: f64 = buckets.values().flatten().sum();
    tracing::debug!(
        "aggregated {} observations into {} categories (grand total {:.2})",
        observations.len(),
        order.len(),
        grand_total
    );

    let mut stats: Vec<CategoryStats> = order
        .into_iter()
        .map(|label| {
            let values = &buckets[&label];
            summarize(label, values, grand_total)
        })
        .collect();

    stats.sort_by(|a, b| b.total.total_cmp(&a.total));
    stats
}

fn summarize(label: CompactString, values: &[f64], grand_total: f64) -> CategoryStats {
    let count = values.len();
    let total: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = total / count as f64;
    let std_dev = if count > 1 {
        let var: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
            / (count - 1) as f64;
        var.sqrt()
    } else {
        0.0
    };
    let pct_of_total = if grand_total > 0.0 {
        total / grand_total * 100.0
    } else {
        0.0
    };

    CategoryStats {
        label,
        count,
        total,
        min,
        max,
        mean,
        std_dev,
        median: median(values),
        pct_of_total,
    }
}

/// Median of a non-empty slice; averages the two middle values for even
/// counts.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_sorts_by_total_descending() {
        let obs = [
            ("meadow", 10.0),
            ("forest", 40.0),
            ("meadow", 5.0),
            ("water", 100.0),
            ("forest", 2.0),
        ];
        let stats = aggregate(&obs);
        let labels: Vec<&str> = stats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["water", "forest", "meadow"]);
        assert_eq!(stats[1].count, 2);
        assert!((stats[1].total - 42.0).abs() < 1e-12);
    }

    #[test]
    fn empty_labels_are_skipped() {
        let obs = [("", 100.0), ("forest", 1.0)];
        let stats = aggregate(&obs);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].label.as_str(), "forest");
        // The skipped observation must not count toward the grand total.
        assert!((stats[0].pct_of_total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        let obs: Vec<(&str, f64)> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|&v| ("a", v))
            .collect();
        let stats = aggregate(&obs);
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((stats[0].std_dev - expected).abs() < 1e-12);
        assert!((stats[0].mean - 5.0).abs() < 1e-12);
    }

    #[test]
    fn single_observation_bucket_has_zero_std_dev() {
        let stats = aggregate(&[("a", 3.0)]);
        assert_eq!(stats[0].std_dev, 0.0);
        assert_eq!(stats[0].min, 3.0);
        assert_eq!(stats[0].max, 3.0);
        assert_eq!(stats[0].median, 3.0);
    }

    #[test]
    fn median_handles_even_and_odd_counts() {
        let odd = aggregate(&[("a", 5.0), ("a", 1.0), ("a", 3.0)]);
        assert_eq!(odd[0].median, 3.0);

        let even = aggregate(&[("a", 4.0), ("a", 1.0), ("a", 3.0), ("a", 2.0)]);
        assert!((even[0].median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let obs = [("a", 10.0), ("b", 30.0), ("c", 60.0)];
        let stats = aggregate(&obs);
        let sum: f64 = stats.iter().map(|s| s.pct_of_total).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
