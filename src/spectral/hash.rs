//! Deterministic per-sample random draws.
//!
//! The spectrum is regenerated every cycle, so its "random" amplitudes must
//! be a pure function of (sample index, seed): a stateful RNG would make the
//! surface flicker from frame to frame.

/// SplitMix64 finaliser
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Map the top 24 bits of a hash to (0, 1]
fn unit_interval(h: u64) -> f32 {
    ((h >> 40) + 1) as f32 * (1.0 / 16_777_216.0)
}

/// Two independent uniforms in (0, 1] for spectral sample `index`
///
/// Identical `(index, seed)` always yields bit-identical values. The seed is
/// finalised into a key first so nearby seeds give unrelated streams.
pub fn spectral_hash(index: usize, seed: u64) -> (f32, f32) {
    let key = splitmix64(seed);
    let base = (index as u64).wrapping_mul(2);
    let r1 = unit_interval(splitmix64(key ^ base));
    let r2 = unit_interval(splitmix64(key ^ (base | 1)));
    (r1, r2)
}
