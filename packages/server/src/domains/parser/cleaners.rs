//! Individual text transforms applied by [`super::Parser`], in order.
//!
//! Each transform is a pure `&str -> String` function so it can be exercised
//! on its own.

use super::lexicon::Lexicon;

/// Accented letters and typographic marks, with their plain counterpart.
const ACCENTS: [(char, char); 18] = [
    ('à', 'a'),
    ('ä', 'a'),
    ('â', 'a'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('ò', 'o'),
    ('ô', 'o'),
    ('ö', 'o'),
    ('ï', 'i'),
    ('î', 'i'),
    ('ì', 'i'),
    ('û', 'u'),
    ('ù', 'u'),
    ('ü', 'u'),
    ('ç', 'c'),
    ('\u{2019}', '\''),
];

/// Contractions that must survive apostrophe removal.
const CONTRACTIONS: [(&str, &str); 2] = [
    ("quelqu un", "quelqu'un"),
    ("aujourd hui", "aujourd'hui"),
];

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

pub fn transform_to_lowercase(sentence: &str) -> String {
    sentence.to_lowercase()
}

pub fn remove_all_accents(sentence: &str) -> String {
    sentence.chars().map(strip_accent).collect()
}

fn strip_accent(letter: char) -> char {
    ACCENTS
        .iter()
        .find(|(accented, _)| *accented == letter)
        .map_or(letter, |(_, plain)| *plain)
}

/// Drop leading whitespace and collapse whitespace runs that follow a word.
///
/// A whitespace character is kept only right after a letter; keeping it
/// clears the "in word" flag, so the rest of the run is dropped.
pub fn normalize_spaces(sentence: &str) -> String {
    let mut result = String::with_capacity(sentence.len());
    let mut in_word = false;

    for letter in sentence.chars() {
        if letter.is_whitespace() {
            if !in_word {
                continue;
            }
            in_word = false;
        } else if letter.is_alphabetic() {
            in_word = true;
        }
        result.push(letter);
    }

    result
}

/// Keep only what follows the first question tag occurring exactly once.
///
/// Tags are tried in lexicon order; the sentence is returned unchanged when
/// no tag splits it in exactly two parts.
pub fn extract_place(sentence: &str, lexicon: &Lexicon) -> String {
    lexicon
        .question_tags()
        .iter()
        .filter(|tag| sentence.matches(tag.as_str()).count() == 1)
        .find_map(|tag| sentence.split_once(tag.as_str()))
        .map_or_else(|| sentence.to_string(), |(_, place)| place.to_string())
}

/// Turn apostrophes into spaces, then restore the known contractions.
pub fn remove_apostrophes(sentence: &str) -> String {
    let spaced = sentence.replace(&APOSTROPHES[..], " ");
    CONTRACTIONS
        .iter()
        .fold(spaced, |text, (broken, joined)| text.replace(*broken, joined))
}

/// Drop stop words. Any whitespace separates tokens, not only the plain space.
pub fn remove_stop_words(sentence: &str, lexicon: &Lexicon) -> String {
    sentence
        .split(char::is_whitespace)
        .filter(|word| !word.is_empty() && !lexicon.is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Delete everything but ASCII letters, whitespace, apostrophes and hyphens.
pub fn remove_punctuation_characters(sentence: &str) -> String {
    sentence
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '\'' | '-'))
        .collect()
}

/// Trim and single-space what punctuation deletion left behind.
pub fn tidy_spaces(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}
