//! # Argument Decoder
//!
//! Fixed-offset extraction of argument words from a call input.
//!
//! Word `i` of a call lives at byte offset `4 + 32 * i`. The whole layout is
//! length-checked before any word is copied out, so a short buffer is a
//! [`DispatchError::MalformedInput`], never an out-of-bounds read.

use crate::domain::value_objects::{Address, Word, SELECTOR_SIZE, WORD_SIZE};
use crate::errors::DispatchError;
use std::fmt;

/// Kind of a fixed-width argument field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// Low 20 bytes of the word.
    Address,
    /// The full 32-byte word.
    Word,
}

/// A single decoded argument, viewed through its declared kind.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    /// An address argument.
    Address(Address),
    /// A raw word argument.
    Word(Word),
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{address:?}"),
            Self::Word(word) => write!(f, "0x{}", hex::encode(word)),
        }
    }
}

/// Number of bytes a call input must carry for `layout`.
#[must_use]
pub const fn required_len(layout: &[ArgKind]) -> usize {
    SELECTOR_SIZE + WORD_SIZE * layout.len()
}

/// Decoded argument words of a call.
///
/// Words are kept raw; the layout decides how [`CallArgs::iter`] presents
/// them. Accessors are bounds-checked against the decoded layout.
#[derive(Clone, Debug)]
pub struct CallArgs {
    words: Vec<Word>,
    layout: &'static [ArgKind],
}

impl CallArgs {
    /// Number of decoded arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the layout declared no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns argument `index` as an address (low 20 bytes of its word).
    ///
    /// # Errors
    ///
    /// `ArgumentOutOfLayout` if `index` is past the declared layout.
    pub fn address(&self, index: usize) -> Result<Address, DispatchError> {
        self.word(index).map(|word| Address::from_word(&word))
    }

    /// Returns argument `index` as its raw 32-byte word.
    ///
    /// # Errors
    ///
    /// `ArgumentOutOfLayout` if `index` is past the declared layout.
    pub fn word(&self, index: usize) -> Result<Word, DispatchError> {
        self.words
            .get(index)
            .copied()
            .ok_or(DispatchError::ArgumentOutOfLayout {
                index,
                declared: self.layout.len(),
            })
    }

    /// Iterates the arguments, each viewed through its declared kind.
    pub fn iter(&self) -> impl Iterator<Item = Arg> + '_ {
        self.words
            .iter()
            .zip(self.layout)
            .map(|(word, kind)| match kind {
                ArgKind::Address => Arg::Address(Address::from_word(word)),
                ArgKind::Word => Arg::Word(*word),
            })
    }
}

/// Decodes the argument words of `input` according to `layout`.
///
/// Bytes past the layout are ignored.
///
/// # Errors
///
/// `MalformedInput` if `input` is shorter than `4 + 32 * layout.len()`.
pub fn decode_args(input: &[u8], layout: &'static [ArgKind]) -> Result<CallArgs, DispatchError> {
    let expected = required_len(layout);
    let body = input
        .get(SELECTOR_SIZE..expected)
        .ok_or(DispatchError::MalformedInput {
            expected,
            actual: input.len(),
        })?;

    let words = body
        .chunks_exact(WORD_SIZE)
        .map(|chunk| {
            let mut word = [0u8; WORD_SIZE];
            word.copy_from_slice(chunk);
            word
        })
        .collect();

    Ok(CallArgs { words, layout })
}

// =============================================================================
// TESTS
// =============================================================================
