//! Member characters for each character class.

use crate::models::CharacterClass;

const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-',
    '=', '[', ']', '{', '}', '|', ';', ':', ',', '.', '<', '>', '?',
];

/// Members of a class. Never empty.
pub fn members(class: CharacterClass) -> &'static [char] {
    match class {
        CharacterClass::Uppercase => UPPERCASE,
        CharacterClass::Lowercase => LOWERCASE,
        CharacterClass::Digit => DIGITS,
        CharacterClass::Symbol => SYMBOLS,
    }
}

/// Build the combined pool for the given classes, in iteration order.
pub fn build_pool<'a>(classes: impl IntoIterator<Item = &'a CharacterClass>) -> Vec<char> {
    let mut pool = Vec::new();
    for class in classes {
        pool.extend_from_slice(members(*class));
    }
    pool
}

/// Which class a character belongs to, if any.
pub fn class_of(c: char) -> Option<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .find(|class| members(*class).contains(&c))
}
