use std::{error, fmt};

pub const RADIX: usize = 91;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    WrongLength { length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { length } => write!(f, "Expected {} characters, got {}", RADIX, length),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// Bijective mapping between 91 ASCII symbols and the digit values 0-90.
#[derive(Clone, Debug)]
pub struct Alphabet {
    characters: [u8; RADIX],
    values: [Option<u8>; 128],
}

impl Alphabet {
    pub const fn new(characters: &[u8; RADIX]) -> Result<Self, Error> {
        let mut values: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < RADIX {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = values[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            values[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self {
            characters: *characters,
            values,
        })
    }

    pub fn from_slice(characters: impl AsRef<[u8]>) -> Result<Self, Error> {
        let characters = characters.as_ref();
        match <&[u8; RADIX]>::try_from(characters) {
            Ok(characters) => Self::new(characters),
            Err(_) => Err(Error::WrongLength {
                length: characters.len(),
            }),
        }
    }

    pub fn encode(&self, value: usize) -> u8 {
        self.characters[value]
    }

    pub fn value(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if character >= 128 {
            return Err(DecodeError::NonAsciiCharacter { character, index });
        }
        match self.values[character as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: character as char,
                index,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Error, RADIX};

    #[test]
    fn bijection() {
        let alphabet = &crate::ALPHABET;
        for value in 0..RADIX {
            let character = alphabet.encode(value);
            assert_eq!(alphabet.value(character, 0), Ok(value as u8));
        }
    }

    #[test]
    fn wrong_length() {
        assert_eq!(Alphabet::from_slice("ABC").unwrap_err(), Error::WrongLength { length: 3 });
        assert_eq!(Alphabet::from_slice([b'A'; 92]).unwrap_err(), Error::WrongLength { length: 92 });
    }

    #[test]
    fn duplicate_character() {
        let mut characters = [0u8; RADIX];
        for (index, character) in characters.iter_mut().enumerate() {
            *character = b' ' + index as u8;
        }
        characters[90] = characters[0];
        assert_eq!(
            Alphabet::new(&characters).unwrap_err(),
            Error::DuplicateCharacter {
                character: ' ',
                first: 0,
                second: 90
            }
        );
    }

    #[test]
    fn non_ascii_character() {
        let mut characters = [0u8; RADIX];
        for (index, character) in characters.iter_mut().enumerate() {
            *character = b' ' + index as u8;
        }
        characters[13] = 0xe9;
        assert_eq!(
            Alphabet::new(&characters).unwrap_err(),
            Error::NonAsciiCharacter {
                character: 0xe9,
                index: 13
            }
        );
    }
}
