use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One selectable category of text analysis.
///
/// The serialized names are the literal result keys callers depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    Translate,
    #[serde(alias = "emocolor")]
    EmotionalColor,
    CountWords,
    Synonyms,
    Antonyms,
    Definitions,
    Correct,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 7] = [
        AnalysisKind::Translate,
        AnalysisKind::EmotionalColor,
        AnalysisKind::CountWords,
        AnalysisKind::Synonyms,
        AnalysisKind::Antonyms,
        AnalysisKind::Definitions,
        AnalysisKind::Correct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Translate => "translate",
            AnalysisKind::EmotionalColor => "emotional-color",
            AnalysisKind::CountWords => "count-words",
            AnalysisKind::Synonyms => "synonyms",
            AnalysisKind::Antonyms => "antonyms",
            AnalysisKind::Definitions => "definitions",
            AnalysisKind::Correct => "correct",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown analysis kind '{0}', expected one of: translate, emotional-color, count-words, synonyms, antonyms, definitions, correct")]
pub struct UnknownKind(pub String);

impl FromStr for AnalysisKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        // Older clients still send the request-side spelling
        if name == "emocolor" {
            return Ok(AnalysisKind::EmotionalColor);
        }

        AnalysisKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or(UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_stable() {
        let names: Vec<String> = AnalysisKind::ALL
            .iter()
            .map(|k| serde_json::to_string(k).unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "\"translate\"",
                "\"emotional-color\"",
                "\"count-words\"",
                "\"synonyms\"",
                "\"antonyms\"",
                "\"definitions\"",
                "\"correct\"",
            ]
        );
    }

    #[test]
    fn parses_legacy_alias() {
        assert_eq!("emocolor".parse::<AnalysisKind>(), Ok(AnalysisKind::EmotionalColor));
        assert_eq!(
            serde_json::from_str::<AnalysisKind>("\"emocolor\"").unwrap(),
            AnalysisKind::EmotionalColor
        );
        assert_eq!("Count-Words".parse::<AnalysisKind>(), Ok(AnalysisKind::CountWords));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "lemmatize".parse::<AnalysisKind>().unwrap_err();
        assert_eq!(err, UnknownKind("lemmatize".to_string()));
        assert!(err.to_string().contains("count-words"));
    }
}
