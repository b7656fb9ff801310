use crate::alphabet::{self, Alphabet};
use std::{collections::HashMap, sync::RwLock};

/// Named alphabet store. The codec itself never reads it; callers look up an
/// alphabet and hand it to an encoder or decoder explicitly.
pub struct AlphabetRegistry {
    alphabets: RwLock<HashMap<String, Alphabet>>,
}

impl AlphabetRegistry {
    pub fn new() -> Self {
        let mut alphabets = HashMap::new();
        alphabets.insert("default".to_string(), crate::ALPHABET);
        Self {
            alphabets: RwLock::new(alphabets),
        }
    }

    pub fn register(&self, name: impl Into<String>, characters: impl AsRef<[u8]>) -> Result<(), alphabet::Error> {
        let alphabet = Alphabet::from_slice(characters)?;
        self.alphabets.write().unwrap().insert(name.into(), alphabet);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Alphabet> {
        self.alphabets.read().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.alphabets.read().unwrap().keys().cloned().collect()
    }
}
