use crate::alphabet::{self, Alphabet};
use crate::ALPHABET;
use std::{error, fmt, str::Utf8Error};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    InvalidUtf8(Utf8Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidUtf8(error) => write!(f, "Invalid utf-8 output: {}", error),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut pending: Option<usize> = None;
        let mut output_index = 0;
        for (input_index, &character) in input.as_ref().iter().enumerate() {
            if character.is_ascii_whitespace() {
                continue;
            }
            let digit = self.alphabet.value(character, input_index)? as usize;
            let first = match pending.take() {
                None => {
                    pending = Some(digit);
                    continue;
                }
                Some(first) => first,
            };
            let group = first + digit * 91;
            accumulator |= group << bits;
            // Mirrors the encoder: a group whose low 13 bits exceed 88 carried
            // 13 bits, every other one carried 14.
            bits += if (group & 0x1FFF) > 88 { 13 } else { 14 };
            while bits > 7 {
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = accumulator as u8;
                output_index += 1;
                accumulator >>= 8;
                bits -= 8;
            }
        }
        if let Some(first) = pending {
            *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = ((first << bits) | accumulator) as u8;
            output_index += 1;
        }
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_into(&input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    /// Decodes to a string, treating the decoded bytes as UTF-8.
    pub fn decode_to_string(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let output = self.decode(input)?;
        String::from_utf8(output).map_err(|error| Error::InvalidUtf8(error.utf8_error()))
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_to_string(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Decoder::default().decode_to_string(input)
}
