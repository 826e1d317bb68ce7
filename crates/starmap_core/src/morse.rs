//! Morse encoding over a fixed symbol table.

/// Letters, digits, then punctuation.
pub static MORSE_TABLE: [(char, &str); 51] = [
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('&', ".-..."),
    ('@', ".--.-."),
    (':', "---..."),
    (',', "--..--"),
    ('.', ".-.-.-"),
    ('\'', ".----."),
    ('"', ".-..-."),
    ('?', "..--.."),
    ('/', "-..-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('!', "-.-.--"),
];

/// One of the two marks a code is written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Words, each a list of letter codes.
pub type MorseSymbolSequence = Vec<Vec<&'static str>>;

pub fn code_for(ch: char) -> Option<&'static str> {
    MORSE_TABLE
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, code)| *code)
}

/// Encode `text` word by word.
///
/// Characters missing from the table are skipped. A word made entirely of
/// such characters still yields an (empty) entry so the ring keeps its gap.
pub fn encode(text: &str) -> MorseSymbolSequence {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.chars().filter_map(code_for).collect())
        .collect()
}

/// Symbols of a single letter code.
pub fn symbols(code: &str) -> impl Iterator<Item = Symbol> + '_ {
    code.chars().filter_map(Symbol::from_char)
}
