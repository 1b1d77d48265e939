use ahash::AHashMap;
use compact_str::CompactString;

pub(crate) type TokenId = u32;

pub const UNKNOWN: &str = "<UNK>";
pub const SENTENCE_START: &str = "<s>";
pub const SENTENCE_END: &str = "</s>";

/// Interns tokens into dense ids.
/// The reserved symbols always take the first ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    ids: AHashMap<CompactString, TokenId>,
    tokens: Vec<CompactString>,
}

impl Default for Vocabulary {
    #[inline]
    fn default() -> Self {
        let mut vocabulary = Self {
            ids: AHashMap::new(),
            tokens: Vec::new(),
        };
        for reserved in Self::RESERVED {
            vocabulary.insert(reserved);
        }
        vocabulary
    }
}

impl Vocabulary {
    pub(crate) const UNKNOWN_ID: TokenId = 0;
    pub(crate) const START_ID: TokenId = 1;
    pub(crate) const END_ID: TokenId = 2;
    pub(crate) const RESERVED: [&'static str; 3] = [UNKNOWN, SENTENCE_START, SENTENCE_END];

    pub(crate) fn insert(&mut self, token: &str) -> TokenId {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = self.tokens.len() as TokenId;
        let token = CompactString::from(token);
        self.ids.insert(token.clone(), id);
        self.tokens.push(token);
        id
    }

    /// Id of `token`, or of [`UNKNOWN`] when it is out of vocabulary
    #[inline]
    pub(crate) fn lookup(&self, token: &str) -> TokenId {
        self.ids.get(token).copied().unwrap_or(Self::UNKNOWN_ID)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    #[inline]
    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id as usize).map(CompactString::as_str)
    }

    /// Size including the reserved symbols
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in id order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(CompactString::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids() {
        let vocabulary = Vocabulary::default();
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.lookup(UNKNOWN), Vocabulary::UNKNOWN_ID);
        assert_eq!(vocabulary.lookup(SENTENCE_START), Vocabulary::START_ID);
        assert_eq!(vocabulary.lookup(SENTENCE_END), Vocabulary::END_ID);
    }

    #[test]
    fn test_unknown_lookup() {
        let mut vocabulary = Vocabulary::default();
        let id = vocabulary.insert("fox");
        assert_eq!(vocabulary.insert("fox"), id);
        assert_eq!(vocabulary.lookup("fox"), id);
        assert_eq!(vocabulary.token(id), Some("fox"));
        assert!(!vocabulary.contains("renard"));
        assert_eq!(vocabulary.lookup("renard"), Vocabulary::UNKNOWN_ID);
    }
}
