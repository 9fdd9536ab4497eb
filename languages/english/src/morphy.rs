/// A possible dictionary form of an inflected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseForm {
    pub base_form: String,
    pub inflection: &'static str,
}

/// Rule-based reduction of inflected English words to their base forms
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMorphy;

// (suffix, replacement, inflection)
const RULES: &[(&str, &str, &str)] = &[
    ("ies", "y", "plural / 3rd person"),
    ("ches", "ch", "plural / 3rd person"),
    ("shes", "sh", "plural / 3rd person"),
    ("xes", "x", "plural / 3rd person"),
    ("ses", "s", "plural / 3rd person"),
    ("s", "", "plural / 3rd person"),
    ("ied", "y", "past tense"),
    ("ed", "e", "past tense"),
    ("ed", "", "past tense"),
    ("ing", "e", "progressive"),
    ("ing", "", "progressive"),
    ("iest", "y", "superlative"),
    ("ier", "y", "comparative"),
    ("est", "e", "superlative"),
    ("est", "", "superlative"),
    ("er", "e", "comparative"),
    ("er", "", "comparative"),
];

impl EnglishMorphy {
    pub fn new() -> Self {
        Self
    }

    /// Candidate base forms, most specific rule first. The word itself is not included.
    pub fn base_forms(&self, word: &str) -> Vec<BaseForm> {
        let mut results: Vec<BaseForm> = Vec::new();

        for &(suffix, replacement, inflection) in RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };

            // "ss" words (glass, class) are not plurals of "s"-less forms
            if suffix == "s" && stem.ends_with('s') {
                continue;
            }
            if stem.chars().count() < 2 {
                continue;
            }

            let base = format!("{stem}{replacement}");
            push_unique(&mut results, base, inflection);

            // running -> run, bigger -> big
            if replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    push_unique(&mut results, undoubled, inflection);
                }
            }
        }

        results
    }
}

fn push_unique(results: &mut Vec<BaseForm>, base_form: String, inflection: &'static str) {
    if !results.iter().any(|r| r.base_form == base_form) {
        results.push(BaseForm {
            base_form,
            inflection,
        });
    }
}

fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;

    if last == before && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 's' | 'l') {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(word: &str) -> Vec<String> {
        EnglishMorphy
            .base_forms(word)
            .into_iter()
            .map(|b| b.base_form)
            .collect()
    }

    #[test]
    fn reduces_plurals() {
        assert!(bases("dogs").contains(&"dog".to_string()));
        assert!(bases("parties").contains(&"party".to_string()));
        assert!(bases("boxes").contains(&"box".to_string()));
        assert!(!bases("glass").contains(&"glas".to_string()));
    }

    #[test]
    fn reduces_verb_forms() {
        assert!(bases("jumped").contains(&"jump".to_string()));
        assert!(bases("loved").contains(&"love".to_string()));
        assert!(bases("running").contains(&"run".to_string()));
        assert!(bases("hoping").contains(&"hope".to_string()));
    }

    #[test]
    fn reduces_comparatives() {
        assert!(bases("bigger").contains(&"big".to_string()));
        assert!(bases("happiest").contains(&"happy".to_string()));
        assert!(bases("darker").contains(&"dark".to_string()));
    }

    #[test]
    fn short_words_have_no_base() {
        assert!(bases("is").is_empty());
    }
}
