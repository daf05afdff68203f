//! Reduction of a token string to a single signed sum.
//!
//! Every recognized character is a number on its own: the decimal digits and
//! the Roman numeral letters `i v x l c d m` in either case. Values are added
//! left to right with no subtractive Roman rules, so `iv` is 6. A single
//! period negates the running sum at the point it is scanned; characters after
//! it keep adding to the negated total.

use tracing::{debug, trace};

use crate::error::AddError;

/// The sign-toggle character.
pub const SEPARATOR: char = '.';

const ROMAN: [(u8, u32); 7] = [
    (b'i', 1),
    (b'v', 5),
    (b'x', 10),
    (b'l', 50),
    (b'c', 100),
    (b'd', 500),
    (b'm', 1000),
];

const fn build_symbol_table() -> [Option<u32>; 128] {
    let mut table = [None; 128];

    let mut digit = 0;
    while digit < 10 {
        table[(b'0' + digit) as usize] = Some(digit as u32);
        digit += 1;
    }

    let mut i = 0;
    while i < ROMAN.len() {
        let (letter, value) = ROMAN[i];
        table[letter as usize] = Some(value);
        table[letter.to_ascii_uppercase() as usize] = Some(value);
        i += 1;
    }

    table
}

/// ASCII lookup table, indexed by code point.
static SYMBOLS: [Option<u32>; 128] = build_symbol_table();

/// Look up the value of a single symbol.
///
/// Returns `None` for the separator and for anything else outside the table.
#[must_use]
pub fn symbol_value(c: char) -> Option<u32> {
    if c.is_ascii() {
        SYMBOLS[c as usize]
    } else {
        None
    }
}

/// Running state of a reduction.
///
/// Characters are fed one at a time with [`Reducer::push`]. A failed push
/// leaves the state untouched; callers that follow [`add`] discard the reducer
/// on the first error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reducer {
    sum: i64,
    separator_seen: bool,
}

impl Reducer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one character.
    ///
    /// # Errors
    ///
    /// [`AddError::MultipleSeparators`] if `c` is a second separator, or
    /// [`AddError::InvalidCharacter`] if `c` is not a symbol.
    pub fn push(&mut self, c: char) -> Result<(), AddError> {
        if c == SEPARATOR {
            if self.separator_seen {
                return Err(AddError::MultipleSeparators);
            }
            self.sum = self.sum.wrapping_neg();
            self.separator_seen = true;
            trace!(sum = self.sum, "separator negated running sum");
            return Ok(());
        }

        let value = symbol_value(c).ok_or(AddError::InvalidCharacter(c))?;
        self.sum = self.sum.wrapping_add(i64::from(value));
        Ok(())
    }

    /// The sum accumulated so far.
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.sum
    }

    #[must_use]
    pub fn separator_seen(&self) -> bool {
        self.separator_seen
    }

    #[must_use]
    pub fn finish(self) -> i64 {
        self.sum
    }
}

/// Reduce `input` to its sum.
///
/// Equivalent to `-(sum left of the period) + (sum right of it)`, or the plain
/// sum when there is no period. No whitespace is trimmed.
///
/// # Errors
///
/// Fails on the first character that is neither a symbol nor the separator,
/// or on a second separator.
pub fn add(input: &str) -> Result<i64, AddError> {
    let mut reducer = Reducer::new();
    for c in input.chars() {
        if let Err(e) = reducer.push(c) {
            debug!(input, error = %e, "reduction failed");
            return Err(e);
        }
    }
    let sum = reducer.finish();
    debug!(input, sum, "reduced");
    Ok(sum)
}
