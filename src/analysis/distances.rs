// File: src/analysis/distances.rs
use crate::analysis::patterns::PatternScanner;
use crate::core::config::DEFAULT_MAX_PATTERNS;
use crate::core::types::{PatternDistances, PatternOccurrences, Text};

/// Gaps between consecutive positions: `p[1]-p[0], p[2]-p[1], ...`.
pub fn consecutive_distances(positions: &[usize]) -> Vec<usize> {
    positions.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Distance lists for every pattern seen at least twice. Single-position
/// patterns carry no distance information and are dropped.
pub fn measure_distances(patterns: &[PatternOccurrences]) -> Vec<PatternDistances> {
    patterns
        .iter()
        .filter(|p| p.positions.len() >= 2)
        .map(|p| {
            let distances = consecutive_distances(&p.positions);
            let gcd = gcd_of_distances(&distances);
            PatternDistances { pattern: p.pattern.clone(), distances, gcd }
        })
        .collect()
}

/// Folds gcd over the list, seeded with its first element. Empty gives 0.
pub fn gcd_of_distances(distances: &[usize]) -> usize {
    match distances.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &d| gcd(acc, d)),
        None => 0,
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `(pattern, gcd)` for each repeated pattern of length `min_length`, in
/// scanner order. Scans with the default pattern cap.
pub fn measure_distances_with_gcd(ciphertext: &Text, min_length: usize) -> Vec<(String, usize)> {
    let patterns = PatternScanner::new(min_length, DEFAULT_MAX_PATTERNS).scan(ciphertext);
    measure_distances(&patterns)
        .into_iter()
        .map(|d| (d.pattern, d.gcd))
        .collect()
}
