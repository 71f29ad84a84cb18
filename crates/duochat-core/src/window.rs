//! Bounded conversation-window selection.
//!
//! Decides which prior turns are included in the next request. Each "pair"
//! is one user turn plus one assistant turn, with the trailing slot reserved
//! for the new user turn being answered, hence the `2 * max_pairs - 1` bound.

use crate::types::Turn;

/// Select the window of prior turns to include in the next request.
///
/// `prior` is the conversation up to, but not including, the pending user
/// turn. Returns the contiguous suffix of length
/// `min(prior.len(), 2 * max_pairs - 1)`, in original order. A bound of 0 is
/// treated as 1. An empty conversation yields an empty slice.
///
/// The odd count drops one slot from the oldest pair rather than the newest;
/// this matches the established behavior and is kept as-is.
pub fn select_window(prior: &[Turn], max_pairs: usize) -> &[Turn] {
    let max_pairs = max_pairs.max(1);
    let keep = prior.len().min(2 * max_pairs - 1);
    &prior[prior.len() - keep..]
}
