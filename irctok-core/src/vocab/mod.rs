use crate::error::TokenizeError;
use ahash::AHashSet;
use std::fs;
use std::path::Path;


/// Known output tokens. Anything else (that is not a username) is replaced by
/// its unk class.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: AHashSet<String>,
}

impl Vocabulary {
    /// Loads a vocabulary file. The last whitespace-separated field of each
    /// line is the term, so `count<TAB>word` listings load as-is.
    pub fn load(path: &Path) -> Result<Self, TokenizeError> {
        let contents = fs::read(path).map_err(|e| TokenizeError::read_vocab(path, e))?;
        Ok(Self::parse(&String::from_utf8_lossy(&contents)))
    }

    pub fn parse(contents: &str) -> Self {
        Self::from_terms(
            contents
                .lines()
                .filter_map(|line| line.split_whitespace().last()),
        )
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// An empty vocabulary disables unk substitution.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
