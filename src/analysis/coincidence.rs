//! Repeating-key period detection via coincidence counting.
//!
//! A repeating key of length L shifts every L-th byte by the same amount, so
//! sliding the ciphertext against itself produces systematically more
//! byte-for-byte matches at shift distances that are multiples of L than at
//! other distances. The shift scan builds that autocorrelation table, the
//! maxima scan finds its peaks, and the gap vote reads L off the peak
//! spacing.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::{Error, Result};

/// Neighborhood radius for the local-maxima scan.
const MAXIMA_WINDOW: usize = 2;

/// Shortest input for which at least one non-trivial shift exists.
const MIN_TEXT_LEN: usize = 2;

/// Count byte coincidences between the text and every shifted copy of
/// itself.
///
/// Entry `d - 1` holds the number of positions `s` with
/// `text[s] == text[s + d]`, for each shift `d` in `1..=n-1`. The scan is
/// O(n²) overall; shift distances are independent and are counted in
/// parallel, collected in shift order.
pub fn coincidence_table(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    if n < MIN_TEXT_LEN {
        return Vec::new();
    }

    (1..n)
        .into_par_iter()
        .map(|shift| {
            text[shift..]
                .iter()
                .zip(text.iter())
                .filter(|(a, b)| a == b)
                .count() as u32
        })
        .collect()
}

/// Locate the local maxima in the first half of a coincidence table.
///
/// A position qualifies when it strictly exceeds every neighbor within
/// [`MAXIMA_WINDOW`] positions that actually exists; near the table edges
/// the window is clipped rather than read out of bounds. Indices are
/// returned in ascending order.
pub fn local_maxima(table: &[u32]) -> Vec<usize> {
    let half = table.len() / 2;
    let mut maxima = Vec::new();

    for pos in 0..half {
        let lo = pos.saturating_sub(MAXIMA_WINDOW);
        let hi = (pos + MAXIMA_WINDOW).min(table.len() - 1);
        let value = table[pos];

        if (lo..=hi).all(|neighbor| neighbor == pos || value > table[neighbor]) {
            maxima.push(pos);
        }
    }

    maxima
}

/// Estimate the repeating-key length of a despaced ciphertext.
///
/// Votes the gap distances between consecutive local maxima; the most
/// frequent gap wins, ties going to the larger gap. Peaks recur at
/// multiples of the true key length, so the dominant gap approximates it.
///
/// # Errors
///
/// [`Error::InsufficientData`] when the input is shorter than 2 bytes (no
/// non-trivial shift to test), and [`Error::UndeterminedPeriod`] when fewer
/// than two maxima emerge — with no gap signal the estimate would be
/// meaningless, and failing fast beats handing a junk key length
/// downstream.
pub fn estimate_key_length(despaced: &[u8]) -> Result<usize> {
    if despaced.len() < MIN_TEXT_LEN {
        return Err(Error::InsufficientData {
            len: despaced.len(),
            min: MIN_TEXT_LEN,
        });
    }

    let table = coincidence_table(despaced);
    let maxima = local_maxima(&table);
    if maxima.len() < 2 {
        return Err(Error::UndeterminedPeriod);
    }

    let mut votes: HashMap<usize, u32> = HashMap::new();
    for pair in maxima.windows(2) {
        *votes.entry(pair[1] - pair[0]).or_insert(0) += 1;
    }

    let mut best_gap = 0usize;
    let mut best_count = 0u32;
    for (&gap, &count) in &votes {
        if count > best_count || (count == best_count && gap > best_gap) {
            best_gap = gap;
            best_count = count;
        }
    }

    Ok(best_gap)
}
