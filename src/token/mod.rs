//! Token types for word segmentation.
//!
//! A [`Token`] is a tagged contiguous word: a substring of the section it
//! was derived from, with an optional part-of-speech code. Tokens are the
//! unit that flows through the tokenizer and optimizer chains.
//!
//! # Reconstruction invariant
//!
//! At every pipeline stage, concatenating all tokens' words in order must
//! reproduce the original section text exactly. The chains do not validate
//! this themselves; it is the contract every module must preserve.
//!
//! # Examples
//!
//! ```
//! use fenci::token::{Token, pos};
//!
//! let token = Token::new("你好").with_pos(pos::NOUN);
//! assert_eq!(token.word, "你好");
//! assert_eq!(token.pos, Some(pos::NOUN));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod list;

pub use list::{TokenMatch, index_of, join_words, split_on};

/// Part-of-speech codes.
///
/// Codes are bit flags so that callers can build composite classes, but the
/// engine itself compares them for exact equality. The core only interprets
/// [`pos::PUNCTUATION`]; every other code is carried opaquely for the
/// benefit of tokenizer and optimizer modules.
pub mod pos {
    /// Adjective.
    pub const ADJECTIVE: u32 = 0x4000_0000;
    /// Conjunction.
    pub const CONJUNCTION: u32 = 0x1000_0000;
    /// Adverb.
    pub const ADVERB: u32 = 0x0800_0000;
    /// Numeral.
    pub const NUMBER: u32 = 0x0040_0000;
    /// Common noun.
    pub const NOUN: u32 = 0x0010_0000;
    /// Preposition.
    pub const PREPOSITION: u32 = 0x0004_0000;
    /// Pronoun.
    pub const PRONOUN: u32 = 0x0001_0000;
    /// Time word.
    pub const TIME: u32 = 0x0000_4000;
    /// Verb.
    pub const VERB: u32 = 0x0000_1000;
    /// Punctuation mark. The only code the engine itself interprets: the
    /// `strip_punctuation` option drops tokens tagged with exactly this
    /// code.
    pub const PUNCTUATION: u32 = 0x0000_0800;
    /// Personal name.
    pub const PERSON_NAME: u32 = 0x0000_0080;
    /// Place name.
    pub const PLACE_NAME: u32 = 0x0000_0040;
    /// Foreign characters and digits.
    pub const FOREIGN: u32 = 0x0000_0010;
    /// URL.
    pub const URL: u32 = 0x0000_0002;
    /// Email address.
    pub const EMAIL: u32 = 0x0000_0001;
    /// Unknown.
    pub const UNKNOWN: u32 = 0x0000_0000;
}

/// A single segmented word with an optional part-of-speech code.
///
/// # Examples
///
/// ```
/// use fenci::token::{Token, pos};
///
/// let untagged = Token::new("测试");
/// assert_eq!(untagged.pos, None);
///
/// let tagged = Token::new("，").with_pos(pos::PUNCTUATION);
/// assert!(tagged.is_punctuation());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The word content. Always a contiguous substring of the section the
    /// token was derived from.
    pub word: String,

    /// The part-of-speech code, if any stage has assigned one.
    pub pos: Option<u32>,
}

impl Token {
    /// Create a new untagged token.
    pub fn new<S: Into<String>>(word: S) -> Self {
        Token {
            word: word.into(),
            pos: None,
        }
    }

    /// Create a new token with a part-of-speech code.
    pub fn with_pos(mut self, pos: u32) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Get the length of the word in characters (not bytes).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Check if the word is empty.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Check whether this token carries the punctuation code.
    pub fn is_punctuation(&self) -> bool {
        self.pos == Some(pos::PUNCTUATION)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
