use crate::alphabet::Alphabet;
use crate::ALPHABET;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut index = 0;
        for &value in input.as_ref() {
            accumulator |= (value as usize) << bits;
            bits += 8;
            while bits > 13 {
                // A digit pair covers 91 * 91 = 8281 values: always enough for
                // 13 bits, and for 14-bit groups whose low 13 bits are at most 88.
                let mut group = accumulator & 0x1FFF;
                if group < 89 {
                    group = accumulator & 0x3FFF;
                    accumulator >>= 14;
                    bits -= 14;
                } else {
                    accumulator >>= 13;
                    bits -= 13;
                }
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(group % 91);
                *output.get_mut(index + 1).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(group / 91);
                index += 2;
            }
        }
        if bits > 0 {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator % 91);
            index += 1;
            // A lone trailing symbol suffices when the leftover bits fit a
            // single digit; otherwise the quotient symbol completes the pair.
            if bits > 7 || accumulator > 90 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator / 91);
                index += 1;
            }
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; input.as_ref().len() * 16 / 13 + 2];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode(b""), "");
        assert_eq!(super::encode(b"t"), "ZB");
        assert_eq!(super::encode(b"te"), "fPD");
        assert_eq!(super::encode(b"tes"), "fPNK");
        assert_eq!(super::encode(b"test"), "fPNKd");
        assert_eq!(super::encode(b"Hello, World!"), ">OwJh>}AQ;r@@Y?F");
        assert_eq!(
            super::encode(b"May your journey be free of incident."),
            "8D9KR`0eLUX7O9WoZP9KB*UC|R90pEHnLBX2_*:Y;R)/DC"
        );
        assert_eq!(super::encode([0x00]), "AA");
        assert_eq!(super::encode([0x00, 0x00]), "AAA");
        assert_eq!(super::encode([0xff]), "/C");
        assert_eq!(super::encode([0xff, 0xff]), "B\"H");
        assert_eq!(super::encode([0xff, 0xff, 0xff]), "B\"tW");
    }

    #[test]
    fn group_width_threshold() {
        // first group lands exactly on the boundary: low 13 bits of 88 fold in
        // a 14th bit, 89 does not
        assert_eq!(super::encode([88, 0]), "}AA");
        assert_eq!(super::encode([89, 0]), "~AA");
    }

    #[test]
    fn final_group() {
        // 3 leftover bits with value 4: lone remainder symbol
        assert_eq!(super::encode([64, 133]), "+OE");
        // 7 leftover bits with value 92: remainder alone cannot represent it
        assert_eq!(super::encode([63, 160, 14, 56, 108, 185]), "%\"8\"D$BB");
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 8];
        assert_eq!(super::encode_into(b"test", &mut output), Ok(5));
        assert_eq!(&output[..5], b"fPNKd");
    }

    #[test]
    fn encode_into_buffer_too_small() {
        let mut output = [0u8; 4];
        assert_eq!(super::encode_into(b"test", &mut output), Err(super::Error::BufferTooSmall));
    }
}
