/// Jain's fairness index over a set of per-user throughput (or signal) values.
///
/// Computes `(Σx)² / (N · Σx²)`. The index is 1 when every value is equal and
/// approaches 1/N as one participant takes everything. Empty input and an
/// all-zero denominator both collapse to 0.0 rather than dividing by zero, so
/// a reported 0.0 means "no measurable fairness", not a computed index.
pub fn jains_fairness_index(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let sum_of_squares: f64 = values.iter().map(|v| v * v).sum();

    let denominator = n * sum_of_squares;
    if denominator == 0.0 {
        return 0.0;
    }

    (sum * sum) / denominator
}
