//! Identifier generation for newly saved documents.

use rand::{Rng, distributions::Uniform, rngs::OsRng};
use std::fmt::Debug;

/// Number of characters in a generated identifier.
pub const ID_LENGTH: usize = 16;

/// Lowest character a generated identifier may contain.
pub const ID_CHAR_LOWER_BOUND: u8 = b'!';

/// Exclusive upper bound of the identifier alphabet: `'z'` itself is never produced.
pub const ID_CHAR_UPPER_BOUND: u8 = b'z';

/// Produces identifiers for documents saved without one.
///
/// Implementations must be safe to call from several threads at once. The manager asks again
/// whenever a generated id is already stored, so a generator must eventually return a new one.
pub trait IdGenerator: Send + Sync + Debug {
    fn make_id(&self) -> String;
}

/// Draws [`ID_LENGTH`] characters uniformly from `'!'..'z'` using the operating system's
/// secure random source.
///
/// [`OsRng`] holds no state, so every instance (and every thread) shares the same process-wide
/// source without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureIdGenerator;

impl IdGenerator for SecureIdGenerator {
    fn make_id(&self) -> String {
        make_id()
    }
}

/// Generates a fresh identifier with [`SecureIdGenerator`]'s scheme.
pub fn make_id() -> String {
    OsRng
        .sample_iter(Uniform::new(ID_CHAR_LOWER_BOUND, ID_CHAR_UPPER_BOUND))
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
