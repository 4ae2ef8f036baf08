//! Coarse input features.
//!
//! The input is scanned once per turn for a few cheap facts ("contains a
//! digit", "contains a colon"). Rules may declare the features their pattern
//! cannot match without; the rule table skips such rules when the input lacks
//! them instead of running their regex.
//!
//! Gating must never change which rule wins. A requirement is only correct if
//! every string the pattern can match has the feature, so keep requirements
//! conservative: when unsure, declare nothing.

bitflags::bitflags! {
    /// Coarse features of an input string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputFeatures: u8 {
        const HAS_DIGITS = 1 << 0;
        const HAS_COLON  = 1 << 1;
    }
}

impl InputFeatures {
    /// Scan `input` for the features it has.
    pub fn scan(input: &str) -> Self {
        let mut features = InputFeatures::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            features |= InputFeatures::HAS_DIGITS;
        }
        if input.contains(':') {
            features |= InputFeatures::HAS_COLON;
        }

        features
    }

    /// True when this input has every feature in `required`.
    pub fn satisfies(self, required: InputFeatures) -> bool {
        self.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_digits_and_colons() {
        assert_eq!(InputFeatures::scan("halo"), InputFeatures::empty());
        assert_eq!(InputFeatures::scan("order 42"), InputFeatures::HAS_DIGITS);
        assert_eq!(InputFeatures::scan("note: hi"), InputFeatures::HAS_COLON);
        assert_eq!(InputFeatures::scan("jam 19:30"), InputFeatures::HAS_DIGITS | InputFeatures::HAS_COLON);
    }

    #[test]
    fn non_ascii_digits_do_not_count() {
        assert_eq!(InputFeatures::scan("١٢"), InputFeatures::empty());
    }

    #[test]
    fn empty_requirement_is_always_satisfied() {
        assert!(InputFeatures::empty().satisfies(InputFeatures::empty()));
        assert!(InputFeatures::HAS_DIGITS.satisfies(InputFeatures::empty()));
        assert!(!InputFeatures::HAS_DIGITS.satisfies(InputFeatures::HAS_DIGITS | InputFeatures::HAS_COLON));
    }
}
