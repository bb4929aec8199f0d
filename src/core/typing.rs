//! Typewriter reveal of a fixed text.

/// Reveals a text one character at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingProgress {
    chars: Vec<char>,
    revealed: usize,
}

impl TypingProgress {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal one more character. Returns `false` once everything is shown.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// The part of the text revealed so far.
    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_step() {
        let mut typing = TypingProgress::new("hi!");
        assert_eq!(typing.visible(), "");

        assert!(typing.advance());
        assert_eq!(typing.visible(), "h");
        assert!(typing.advance());
        assert!(typing.advance());
        assert_eq!(typing.visible(), "hi!");
        assert!(typing.is_done());
        assert!(!typing.advance());
        assert_eq!(typing.visible(), "hi!");
    }

    #[test]
    fn test_multibyte_chars_are_not_split() {
        let mut typing = TypingProgress::new("ñé");
        typing.advance();
        assert_eq!(typing.visible(), "ñ");
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut typing = TypingProgress::new("");
        assert!(typing.is_done());
        assert!(!typing.advance());
    }
}
