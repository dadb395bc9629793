const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const U32_RANGE: f64 = 4_294_967_296.0;

/// Maps a seed string to a stable value in [0, 1).
///
/// 32-bit FNV-1a over the UTF-16 code units of `seed`.
pub fn seeded_hash(seed: &str) -> f64 {
    let hash = seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });
    f64::from(hash) / U32_RANGE
}
