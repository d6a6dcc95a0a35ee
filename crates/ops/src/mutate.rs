//! Structural mutation: pop, reverse, shuffle
//!
//! These operations work on any element type. The `Value` forms require an
//! array handle; `pop_last` is the exception and treats a non-array handle
//! as an empty sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use seqkit_core::{OperationError, Result, SeqConfig, Value};
use tracing::{debug, trace};

// ============================================================================
// Pop
// ============================================================================

/// Remove and return the last element of a typed sequence
pub fn pop_vec<T>(seq: &mut Vec<T>) -> Option<T> {
    seq.pop()
}

/// Remove and return the last element of a dynamic sequence
///
/// An empty sequence or a handle that is not `Value::Array` is left as it
/// is and yields `Ok(None)`. This never fails.
pub fn pop_last(seq: &mut Value) -> Result<Option<Value>> {
    let found = seq.type_name();
    match seq.as_array_mut() {
        Some(items) => Ok(pop_vec(items)),
        None => {
            trace!(found, "pop on non-sequence ignored");
            Ok(None)
        }
    }
}

// ============================================================================
// Reverse
// ============================================================================

/// Reverse a slice in place by swapping pairs from both ends
pub fn reverse_slice<T>(seq: &mut [T]) {
    if seq.len() < 2 {
        return;
    }
    let (mut i, mut j) = (0, seq.len() - 1);
    while i < j {
        seq.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Reverse a dynamic sequence in place
///
/// # Errors
///
/// Returns `TypeMismatch` if `seq` is not `Value::Array`.
pub fn reverse(seq: &mut Value) -> Result<()> {
    let found = seq.type_name();
    let items = seq
        .as_array_mut()
        .ok_or_else(|| OperationError::type_mismatch("Array", found))?;
    reverse_slice(items);
    Ok(())
}

// ============================================================================
// Shuffle
// ============================================================================

/// Apply a uniformly random permutation to a slice
///
/// Draws a Fisher-Yates permutation of the indices, snapshots the slice and
/// writes `snapshot[perm[i]]` into position `i`.
pub fn shuffle_slice<T: Clone, R: Rng + ?Sized>(seq: &mut [T], rng: &mut R) {
    let mut perm: Vec<usize> = (0..seq.len()).collect();
    perm.shuffle(rng);

    let snapshot = seq.to_vec();
    for (slot, &src) in seq.iter_mut().zip(&perm) {
        *slot = snapshot[src].clone();
    }
}

/// Shuffle a dynamic sequence with the thread-local RNG
///
/// # Errors
///
/// Returns `TypeMismatch` if `seq` is not `Value::Array`.
pub fn shuffle(seq: &mut Value) -> Result<()> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Shuffle a dynamic sequence with a caller-supplied RNG
///
/// # Errors
///
/// Returns `TypeMismatch` if `seq` is not `Value::Array`.
pub fn shuffle_with<R: Rng + ?Sized>(seq: &mut Value, rng: &mut R) -> Result<()> {
    let found = seq.type_name();
    let items = seq
        .as_array_mut()
        .ok_or_else(|| OperationError::type_mismatch("Array", found))?;
    shuffle_slice(items, rng);
    Ok(())
}

/// Shuffle using `config.shuffle_seed` when set, otherwise thread-local
///
/// # Errors
///
/// Returns `TypeMismatch` if `seq` is not `Value::Array`.
pub fn shuffle_seeded(seq: &mut Value, config: &SeqConfig) -> Result<()> {
    match config.shuffle_seed {
        Some(seed) => {
            debug!(seed, "shuffling with fixed seed");
            shuffle_with(seq, &mut StdRng::seed_from_u64(seed))
        }
        None => shuffle(seq),
    }
}
