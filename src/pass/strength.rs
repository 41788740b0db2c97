//! Strength classification from length and character class diversity.

use crate::options::Options;

/// Coarse strength label for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::TooWeak => "Too Weak!",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a (length, enabled class count) pair, first matching rule wins.
///
/// Total over all inputs. Reflects the selection itself, not the last
/// generated password. Length 13+ with fewer than four classes matches
/// no rule and lands at Too Weak!.
pub fn classify(length: usize, classes: usize) -> Strength {
    if length >= 12 && classes == 4 {
        Strength::Strong
    } else if (8..12).contains(&length) && classes == 4 {
        Strength::Medium
    } else if (6..=12).contains(&length) && classes >= 2 {
        Strength::Weak
    } else {
        Strength::TooWeak
    }
}

/// Classify the current option selection.
pub fn of_options(options: &Options) -> Strength {
    classify(options.length, options.enabled_classes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        assert_eq!(classify(12, 4), Strength::Strong);
        assert_eq!(classify(10, 4), Strength::Medium);
        assert_eq!(classify(7, 2), Strength::Weak);
        assert_eq!(classify(7, 1), Strength::TooWeak);
        // Below the Weak band's lower bound, diversity does not help.
        assert_eq!(classify(5, 4), Strength::TooWeak);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(6, 2), Strength::Weak);
        assert_eq!(classify(5, 2), Strength::TooWeak);
        assert_eq!(classify(8, 4), Strength::Medium);
        assert_eq!(classify(11, 4), Strength::Medium);
        assert_eq!(classify(12, 2), Strength::Weak);
        assert_eq!(classify(12, 3), Strength::Weak);
    }

    #[test]
    fn long_but_undiverse_falls_through() {
        // No rule covers this pair, so it lands at the bottom despite
        // the length.
        assert_eq!(classify(13, 3), Strength::TooWeak);
        assert_eq!(classify(13, 4), Strength::Strong);
    }

    #[test]
    fn zero_classes_is_always_too_weak() {
        for length in 0..16 {
            assert_eq!(classify(length, 0), Strength::TooWeak);
        }
    }

    #[test]
    fn tracks_the_selection() {
        let mut options = Options {
            length: 8,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        };
        assert_eq!(of_options(&options), Strength::Weak);

        options.symbols = true;
        assert_eq!(of_options(&options), Strength::Medium);

        options.length = 12;
        assert_eq!(of_options(&options), Strength::Strong);
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::TooWeak.to_string(), "Too Weak!");
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
