//! Stop words and question tags used by the parser.
//!
//! Both lists are stored already lowercased and accent-free, since they are
//! compared against text that went through those two steps.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use super::cleaners::{remove_all_accents, transform_to_lowercase};

const FRENCH_STOP_WORDS: &str = include_str!("../../../data/fr.json");
const FRENCH_QUESTION_TAGS: &str = include_str!("../../../data/questions.json");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {what} list: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Question tag #{0} is empty")]
    EmptyQuestionTag(usize),
}

/// Read-only word lists, loaded once at start-up and shared between requests.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    question_tags: Vec<String>,
}

impl Lexicon {
    /// Entries are lowercased and stripped of accents on the way in.
    pub fn new(
        stop_words: impl IntoIterator<Item = String>,
        question_tags: Vec<String>,
    ) -> Result<Self, LexiconError> {
        if let Some(index) = question_tags.iter().position(|tag| tag.is_empty()) {
            return Err(LexiconError::EmptyQuestionTag(index));
        }

        Ok(Self {
            stop_words: stop_words.into_iter().map(|word| fold(&word)).collect(),
            question_tags: question_tags.iter().map(|tag| fold(tag)).collect(),
        })
    }

    /// Build from two JSON arrays of strings.
    pub fn from_json(stop_words: &str, question_tags: &str) -> Result<Self, LexiconError> {
        let stop_words: Vec<String> =
            serde_json::from_str(stop_words).map_err(|source| LexiconError::Parse {
                what: "stop word",
                source,
            })?;
        let question_tags: Vec<String> =
            serde_json::from_str(question_tags).map_err(|source| LexiconError::Parse {
                what: "question tag",
                source,
            })?;

        Self::new(stop_words, question_tags)
    }

    pub fn from_files(
        stop_words_path: impl AsRef<Path>,
        question_tags_path: impl AsRef<Path>,
    ) -> Result<Self, LexiconError> {
        let stop_words = read(stop_words_path.as_ref())?;
        let question_tags = read(question_tags_path.as_ref())?;
        Self::from_json(&stop_words, &question_tags)
    }

    /// French lists bundled with the crate.
    pub fn french() -> Self {
        Self::from_json(FRENCH_STOP_WORDS, FRENCH_QUESTION_TAGS)
            .expect("bundled French lexicon is valid JSON")
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_words(&self) -> impl Iterator<Item = &str> {
        self.stop_words.iter().map(String::as_str)
    }

    /// Tags in priority order.
    pub fn question_tags(&self) -> &[String] {
        &self.question_tags
    }
}

fn fold(entry: &str) -> String {
    remove_all_accents(&transform_to_lowercase(entry))
}

fn read(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_lexicon_loads() {
        let lexicon = Lexicon::french();
        assert!(lexicon.is_stop_word("la"));
        assert!(lexicon.is_stop_word("est"));
        assert!(!lexicon.is_stop_word("eiffel"));
        assert!(!lexicon.question_tags().is_empty());
    }

    #[test]
    fn bundled_lists_are_normalized() {
        let lexicon = Lexicon::french();
        let words = lexicon
            .stop_words()
            .chain(lexicon.question_tags().iter().map(String::as_str));
        for word in words {
            assert_eq!(word, word.to_lowercase(), "{word:?} is not lowercase");
            assert!(word.is_ascii(), "{word:?} still carries accents");
        }
    }

    #[test]
    fn question_tags_keep_file_order() {
        let lexicon =
            Lexicon::from_json(r#"["le"]"#, r#"["ou se trouve ", "ou est "]"#).unwrap();
        assert_eq!(lexicon.question_tags(), ["ou se trouve ", "ou est "]);
    }

    #[test]
    fn entries_are_folded_on_load() {
        let lexicon = Lexicon::from_json(
            r#"["Là", "Être"]"#,
            r#"["Où Se Trouve ", "connais-tu l’adresse d’"]"#,
        )
        .unwrap();

        assert!(lexicon.is_stop_word("la"));
        assert!(lexicon.is_stop_word("etre"));
        assert_eq!(
            lexicon.question_tags(),
            ["ou se trouve ", "connais-tu l'adresse d'"]
        );
    }

    #[test]
    fn tags_read_from_files_are_folded() {
        let dir = std::env::temp_dir().join(format!("grandpy-lexicon-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let stop_words = dir.join("stop_words.json");
        let question_tags = dir.join("questions.json");
        std::fs::write(&stop_words, r#"["Le"]"#).unwrap();
        std::fs::write(&question_tags, r#"["Où Est "]"#).unwrap();

        let lexicon = Lexicon::from_files(&stop_words, &question_tags).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(lexicon.is_stop_word("le"));
        assert_eq!(lexicon.question_tags(), ["ou est "]);
    }

    #[test]
    fn empty_question_tag_is_rejected() {
        let err = Lexicon::from_json("[]", r#"["ou est ", ""]"#).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyQuestionTag(1)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Lexicon::from_json("{", "[]").unwrap_err();
        assert!(matches!(err, LexiconError::Parse { what: "stop word", .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Lexicon::from_files("/nonexistent/fr.json", "/nonexistent/questions.json")
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fr.json"));
    }
}
