//! Shuffle - in-place queue permutation and random forward picks
//!
//! Shuffle here is destructive by design: enabling it permutes the active
//! playlist's physical track order (Fisher-Yates) and the order stays
//! permuted after shuffle is turned off. Forward navigation under shuffle
//! draws a fresh uniform index each time, so immediate repeats are allowed.

use chirp_core::Track;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Permute the track sequence in place (uniform Fisher-Yates).
pub fn shuffle_tracks(tracks: &mut [Track]) {
    let mut rng = thread_rng();
    tracks.shuffle(&mut rng);
}

/// Pick a uniformly random index into a non-empty sequence.
///
/// No no-repeat-until-exhausted guarantee; the same index may come up
/// twice in a row.
pub fn random_index(len: usize) -> usize {
    debug_assert!(len > 0);
    thread_rng().gen_range(0..len)
}
