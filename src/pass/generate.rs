//! Password synthesis from a character pool.

use rand::Rng;

use super::charset;
use crate::options::Options;

/// Generation was requested with every character class disabled.
///
/// Shown to the user verbatim; generation aborts and any displayed password
/// is cleared by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAlphabet;

impl std::fmt::Display for EmptyAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Please select at least one character type")
    }
}

impl std::error::Error for EmptyAlphabet {}

/// Generate a single password from the enabled classes.
pub fn generate(options: &Options) -> Result<String, EmptyAlphabet> {
    let chars = charset::build(options);
    if chars.is_empty() {
        return Err(EmptyAlphabet);
    }
    Ok(from_charset(&chars, options.length))
}

/// Draw `length` characters uniformly, with replacement, from `chars`.
/// Must not be reached with an empty pool.
fn from_charset(chars: &[u8], length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{MAX_LENGTH, MIN_LENGTH};
    use crate::pass::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

    fn all_classes(length: usize) -> Options {
        Options {
            length,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    #[test]
    fn output_has_requested_length_and_pool_membership() {
        for length in MIN_LENGTH..=MAX_LENGTH {
            let password = generate(&all_classes(length)).unwrap();
            assert_eq!(password.chars().count(), length);

            let pool = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
            for c in password.chars() {
                assert!(pool.contains(c), "{c:?} not in pool");
            }
        }
    }

    #[test]
    fn single_class_output_stays_in_that_class() {
        let options = Options {
            length: 12,
            numbers: true,
            ..Default::default()
        };
        for _ in 0..25 {
            let password = generate(&options).unwrap();
            assert!(password.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn no_classes_is_rejected_before_drawing() {
        let options = Options {
            length: 8,
            ..Default::default()
        };
        let err = generate(&options).unwrap_err();
        assert_eq!(err, EmptyAlphabet);
        assert_eq!(err.to_string(), "Please select at least one character type");
    }

    #[test]
    fn repeated_draws_are_allowed() {
        // A one-character pool forces consecutive repeats.
        let password = from_charset(b"0", 6);
        assert_eq!(password, "000000");
    }

    #[test]
    fn letters_and_digits_scenario() {
        // length 8, uppercase + lowercase + numbers: 62-character pool.
        let options = Options {
            length: 8,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        };
        assert_eq!(charset::build(&options).len(), 62);

        let password = generate(&options).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
