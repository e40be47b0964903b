use rand::Rng;

/// Alphabet for deployment ids: URL-safe, so ids can be embedded directly
/// in webhook paths, DOM element ids, and verify tokens.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of a generated deployment id.
///
/// 21 characters over a 64-symbol alphabet gives 126 bits of entropy,
/// enough that collisions are not a practical concern without any
/// coordination between callers.
const ID_LENGTH: usize = 21;

/// Generates a fresh deployment id.
///
/// Used when a request carries no pre-existing id. Ids are drawn uniformly
/// from [`ALPHABET`] using the thread-local RNG.
pub fn generate_deployment_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `id` has the shape of a generated deployment id.
pub fn is_valid_deployment_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.bytes().all(|b| ALPHABET.contains(&b))
}
