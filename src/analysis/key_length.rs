// File: src/analysis/key_length.rs
use crate::analysis::distances::measure_distances_with_gcd;
use crate::core::types::{KeyLength, Text, UNDETERMINED_KEY_LENGTH};
use std::collections::HashMap;

/// Counts votes per gcd value, skipping gcds of 0 and 1.
/// Entries come back in the order their value was first seen.
pub fn tally_key_length_votes(gcds: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    let mut slots: HashMap<usize, usize> = HashMap::new();
    for gcd in gcds.into_iter().filter(|&g| g > 1) {
        match slots.get(&gcd) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                slots.insert(gcd, tally.len());
                tally.push((gcd, 1));
            }
        }
    }
    tally
}

/// Most voted gcd above 1. On equal votes the value seen first wins.
/// Returns 0 when no gcd above 1 exists.
pub fn vote_key_length(gcds: impl IntoIterator<Item = usize>) -> KeyLength {
    winner(&tally_key_length_votes(gcds))
}

pub(crate) fn winner(tally: &[(usize, usize)]) -> KeyLength {
    let mut best: Option<(usize, usize)> = None;
    for &(value, votes) in tally {
        if best.map_or(true, |(_, top)| votes > top) {
            best = Some((value, votes));
        }
    }
    best.map_or(UNDETERMINED_KEY_LENGTH, |(value, _)| value)
}

/// Kasiski estimate of the key period. This is a vote, not a proof: it
/// assumes the true period (or a divisor of it) recurs among pattern gcds
/// more often than any coincidental value.
pub fn estimate_key_length(ciphertext: &Text, min_length: usize) -> KeyLength {
    vote_key_length(
        measure_distances_with_gcd(ciphertext, min_length)
            .into_iter()
            .map(|(_, gcd)| gcd),
    )
}
