use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor: NFKC, straight quotes, single spaces
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text
            .nfkc()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{201C}' | '\u{201D}' => '"',
                c => c,
            })
            .collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_quotes() {
        let text = DefaultPreprocessor.process("  don\u{2019}t\n\n  stop\tnow ");
        assert_eq!(text, "don't stop now");
    }

    #[test]
    fn folds_compatibility_forms() {
        assert_eq!(DefaultPreprocessor.process("ｆｕｌｌ ﬁle"), "full file");
    }
}
