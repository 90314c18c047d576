//! Session token
//!
//! Opaque value: base64 of the current millis followed by a random
//! base-36 fraction (`"0.k3j9..."`). Only its presence matters.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FRACTION_DIGITS: usize = 11;

pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let fraction: String = (0..FRACTION_DIGITS)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    let raw = format!("{}0.{}", shared::util::now_millis(), fraction);
    STANDARD.encode(raw)
}
