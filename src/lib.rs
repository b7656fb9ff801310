//! basE91 binary-to-text encoding.
//!
//! Packs the input bit stream into 13 or 14 bit groups and writes each group
//! as a pair of digits over a 91 character alphabet, for roughly 23% size
//! overhead instead of base64's 33%.

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod registry;
pub mod serde;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into, decode_to_string, Decoder};
pub use encode::{encode, encode_into, Encoder};
pub use registry::AlphabetRegistry;

pub const ALPHABET: Alphabet =
    match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };
