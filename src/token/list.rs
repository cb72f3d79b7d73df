//! Predicate-based splitting and searching over token lists.
//!
//! These utilities are used by the engine itself and by tokenizer and
//! optimizer modules that need to cut a token list at recognized boundaries
//! (for example, splitting on punctuation before re-tokenizing the runs in
//! between).

use crate::token::Token;

/// A match predicate over tokens: either an exact word or an exact
/// part-of-speech code.
///
/// `From` impls let callers pass a `&str` or a `u32` directly:
///
/// ```
/// use fenci::token::{Token, split_on};
///
/// let tokens = vec![
///     Token::new("a"),
///     Token::new(","),
///     Token::new("b"),
///     Token::new("c"),
/// ];
/// let groups = split_on(&tokens, ",");
/// assert_eq!(groups.len(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum TokenMatch<'a> {
    /// Match tokens whose word equals this string.
    Word(&'a str),
    /// Match tokens whose part-of-speech code equals this code.
    Pos(u32),
}

impl TokenMatch<'_> {
    /// Check whether a token matches this predicate.
    pub fn matches(&self, token: &Token) -> bool {
        match *self {
            TokenMatch::Word(word) => token.word == word,
            TokenMatch::Pos(pos) => token.pos == Some(pos),
        }
    }
}

impl<'a> From<&'a str> for TokenMatch<'a> {
    fn from(word: &'a str) -> Self {
        TokenMatch::Word(word)
    }
}

impl From<u32> for TokenMatch<'_> {
    fn from(pos: u32) -> Self {
        TokenMatch::Pos(pos)
    }
}

/// Split a token list on every token matching the predicate.
///
/// Each contiguous run of non-matching tokens becomes one group, and every
/// matching token becomes its own singleton group, interleaved in original
/// order.
///
/// A trailing non-matching run is only emitted when it starts strictly
/// before the last index: a trailing run of exactly one token is dropped.
/// This boundary condition is long-standing observed behavior; modules
/// that rely on `split_on` are written against it.
///
/// # Examples
///
/// ```
/// use fenci::token::{Token, split_on};
///
/// let tokens = vec![
///     Token::new("a"),
///     Token::new(","),
///     Token::new("b"),
///     Token::new("c"),
/// ];
/// let groups = split_on(&tokens, ",");
/// assert_eq!(groups[0], vec![Token::new("a")]);
/// assert_eq!(groups[1], vec![Token::new(",")]);
/// assert_eq!(groups[2], vec![Token::new("b"), Token::new("c")]);
/// ```
pub fn split_on<'a, M>(tokens: &[Token], predicate: M) -> Vec<Vec<Token>>
where
    M: Into<TokenMatch<'a>>,
{
    let predicate = predicate.into();
    let mut groups = Vec::new();
    let mut last = 0;
    let mut i = 0;

    while i < tokens.len() {
        if predicate.matches(&tokens[i]) {
            if last < i {
                groups.push(tokens[last..i].to_vec());
            }
            groups.push(vec![tokens[i].clone()]);
            i += 1;
            last = i;
        } else {
            i += 1;
        }
    }
    // Strict `last + 1 < len` bound, see the doc comment above.
    if last + 1 < tokens.len() {
        groups.push(tokens[last..].to_vec());
    }

    groups
}

/// Find the first token matching the predicate, scanning from `from`.
///
/// Returns `None` if no token matches before the end of the list.
///
/// # Examples
///
/// ```
/// use fenci::token::{Token, index_of, pos};
///
/// let tokens = vec![
///     Token::new("a").with_pos(pos::NOUN),
///     Token::new("b").with_pos(pos::VERB),
///     Token::new("c").with_pos(pos::NOUN),
/// ];
/// assert_eq!(index_of(&tokens, pos::NOUN, 1), Some(2));
/// ```
pub fn index_of<'a, M>(tokens: &[Token], predicate: M, from: usize) -> Option<usize>
where
    M: Into<TokenMatch<'a>>,
{
    let predicate = predicate.into();
    tokens
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, token)| predicate.matches(token))
        .map(|(i, _)| i)
}

/// Concatenate token words with no separator.
///
/// For an unfiltered chain output this reproduces the section text; after
/// punctuation or stopword stripping it is only useful for display.
pub fn join_words(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.word.as_str()).collect()
}
