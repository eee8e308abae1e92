use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

pub const LOWERCASE_ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Build the generator used for test strings.
///
/// A fixed seed makes a run reproducible; without one the generator is seeded from the OS.
pub fn seeded_rng(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    }
}

/// Produce `length` random lowercase ASCII bytes.
pub fn random_lowercase<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<u8> {
    (0..length)
        .map(|_| LOWERCASE_ALPHABET[rng.gen_range(0..LOWERCASE_ALPHABET.len())])
        .collect()
}
