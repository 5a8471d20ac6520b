//! Question parser: reduces a French question to a bare place name.

pub mod cleaners;
pub mod lexicon;

use std::sync::Arc;

pub use cleaners::*;
pub use lexicon::{Lexicon, LexiconError};

/// One transform of the parsing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningStep {
    Lowercase,
    RemoveAccents,
    NormalizeSpaces,
    ExtractPlace,
    RemoveApostrophes,
    RemoveStopWords,
    RemovePunctuation,
    TidySpaces,
}

impl CleaningStep {
    /// The sequence is not commutative: place extraction needs case and
    /// accents already folded, and must see punctuation still in place.
    pub const SEQUENCE: [CleaningStep; 8] = [
        CleaningStep::Lowercase,
        CleaningStep::RemoveAccents,
        CleaningStep::NormalizeSpaces,
        CleaningStep::ExtractPlace,
        CleaningStep::RemoveApostrophes,
        CleaningStep::RemoveStopWords,
        CleaningStep::RemovePunctuation,
        CleaningStep::TidySpaces,
    ];

    pub fn apply(&self, sentence: &str, lexicon: &Lexicon) -> String {
        match self {
            CleaningStep::Lowercase => transform_to_lowercase(sentence),
            CleaningStep::RemoveAccents => remove_all_accents(sentence),
            CleaningStep::NormalizeSpaces => normalize_spaces(sentence),
            CleaningStep::ExtractPlace => extract_place(sentence, lexicon),
            CleaningStep::RemoveApostrophes => remove_apostrophes(sentence),
            CleaningStep::RemoveStopWords => remove_stop_words(sentence, lexicon),
            CleaningStep::RemovePunctuation => remove_punctuation_characters(sentence),
            CleaningStep::TidySpaces => tidy_spaces(sentence),
        }
    }
}

/// Cleans up questions so they can be sent to a geocoding API.
///
/// Never fails: any input, including the empty string, yields a (possibly
/// empty) place name.
#[derive(Debug, Clone)]
pub struct Parser {
    lexicon: Arc<Lexicon>,
}

impl Parser {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Parser over the bundled French lexicon.
    pub fn french() -> Self {
        Self::new(Arc::new(Lexicon::french()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn parse(&self, question: &str) -> String {
        let place = CleaningStep::SEQUENCE
            .iter()
            .fold(question.to_string(), |sentence, step| {
                step.apply(&sentence, &self.lexicon)
            });

        tracing::debug!(question, place = %place, "Question parsed");
        place
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finds_the_eiffel_tower() {
        assert_eq!(Parser::french().parse("Où est la Tour Eiffel ?"), "tour eiffel");
    }

    #[test]
    fn parse_handles_the_classic_openclassrooms_question() {
        let parser = Parser::french();
        let question = "Salut GrandPy ! Est-ce que tu connais l'adresse d'OpenClassrooms ?";
        assert_eq!(parser.parse(question), "openclassrooms");
    }

    #[test]
    fn parse_never_leaks_stop_words_through_unusual_spaces() {
        let parser = Parser::french();
        for question in ["Où est la\u{a0}Tour Eiffel ?", "Où est la\tTour Eiffel ?"] {
            let place = parser.parse(question);
            assert_eq!(place, "tour eiffel", "{question:?}");
            assert!(place.split(' ').all(|word| !parser.lexicon().is_stop_word(word)));
        }
    }

    #[test]
    fn parse_accepts_typographic_apostrophes() {
        let parser = Parser::french();
        assert_eq!(
            parser.parse("Connais-tu l\u{2019}adresse d\u{2019}OpenClassrooms ?"),
            "openclassrooms"
        );
        assert_eq!(
            parser.parse("Connais-tu l'adresse d'OpenClassrooms ?"),
            "openclassrooms"
        );
    }

    #[test]
    fn parse_of_empty_input_is_empty() {
        assert_eq!(Parser::french().parse(""), "");
        assert_eq!(Parser::french().parse("   \n "), "");
    }

    #[test]
    fn parse_runs_every_step_in_order() {
        assert_eq!(CleaningStep::SEQUENCE.len(), 8);
        assert_eq!(CleaningStep::SEQUENCE[0], CleaningStep::Lowercase);
        assert_eq!(CleaningStep::SEQUENCE[3], CleaningStep::ExtractPlace);
        assert_eq!(CleaningStep::SEQUENCE[7], CleaningStep::TidySpaces);
    }
}
