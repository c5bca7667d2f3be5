//! Campaign key material and the keyed BLAKE2b primitive
//!
//! Every pseudo-random decision in a campaign flows through [`KeyedHash`]:
//! BLAKE2b in keyed mode with an 8-byte digest, keyed by the campaign's
//! [`KeyMaterial`], salted per channel/attribute and personalized with the
//! application tag. The digest is read as a big-endian `u64`.

use blake2::digest::consts::{U16, U8};
use blake2::digest::Mac;
use blake2::{Blake2b, Blake2b512, Blake2bMac};

use super::MAX_BELOW_ONE;

/// Fixed application label; its 16-byte digest personalizes every hash.
pub const APP_LABEL: &str = "SeedScape";

/// BLAKE2b maximum key length.
pub const KEY_SIZE: usize = 64;
/// BLAKE2b salt length.
pub const SALT_SIZE: usize = 16;
/// BLAKE2b personalization length.
pub const PERSON_SIZE: usize = 16;

pub type Salt = [u8; SALT_SIZE];

/// Key bytes derived once from a campaign seed.
///
/// Read-only after derivation; share it by reference or `Arc` across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    key: [u8; KEY_SIZE],
    person: [u8; PERSON_SIZE],
}

impl KeyMaterial {
    /// Derive key material from an arbitrary-length seed string.
    pub fn derive(seed: &str) -> Self {
        use blake2::Digest;

        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&Blake2b512::digest(seed.as_bytes()));

        let mut person = [0u8; PERSON_SIZE];
        person.copy_from_slice(&Blake2b::<U16>::digest(APP_LABEL.as_bytes()));

        Self { key, person }
    }

    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    pub fn person(&self) -> &[u8; PERSON_SIZE] {
        &self.person
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"<64 bytes>")
            .finish()
    }
}

/// 16-byte salt derived from a channel or attribute label.
pub fn salt_for(label: &str) -> Salt {
    use blake2::Digest;

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&Blake2b::<U16>::digest(label.as_bytes()));
    salt
}

/// A keyed, salted, personalized BLAKE2b-64 ready to absorb input.
///
/// Holds a pre-initialized MAC state; each hash clones it, so the key block is
/// only compressed once per (campaign, salt).
#[derive(Clone)]
pub struct KeyedHash {
    prototype: Blake2bMac<U8>,
}

impl KeyedHash {
    pub fn new(key: &KeyMaterial, salt: &Salt) -> Self {
        let prototype = Blake2bMac::<U8>::new_with_salt_and_personal(&key.key, salt, &key.person)
            .expect("64-byte key, 16-byte salt and 16-byte person are within BLAKE2b limits");
        Self { prototype }
    }

    /// Hash the concatenation of `parts` to a `u64`.
    pub fn hash_parts(&self, parts: &[&[u8]]) -> u64 {
        let mut mac = self.prototype.clone();
        for part in parts {
            mac.update(part);
        }
        finish(mac)
    }

    /// Hash a sequence of signed integers, each as 8 big-endian bytes.
    pub fn hash_i64s(&self, values: &[i64]) -> u64 {
        let mut mac = self.prototype.clone();
        for v in values {
            mac.update(&v.to_be_bytes());
        }
        finish(mac)
    }
}

/// Read the 8-byte digest as a big-endian `u64`.
fn finish(mac: Blake2bMac<U8>) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&mac.finalize().into_bytes());
    u64::from_be_bytes(bytes)
}

/// Map a 64-bit hash to `[0, 1)` as `h / 2^64`.
///
/// The conversion to f64 rounds to nearest and the division by a power of two
/// is exact. Hashes within half an ulp of 2^64 round to 1.0 and are clamped.
#[inline]
pub fn unit_from_u64(h: u64) -> f64 {
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
    (h as f64 / TWO_POW_64).min(MAX_BELOW_ONE)
}
