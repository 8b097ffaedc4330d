//! Password generation from selectable character classes.
//!
//! Callers supply the random source. The binary passes `rand::rng()`, a
//! thread-local generator seeded from the operating system; tests pass a
//! seeded `StdRng`.
use rand::RngExt;
use rand::seq::SliceRandom;

use crate::error::PasswordError;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to misread; never removed from [`SPECIAL`].
pub const AMBIGUOUS: &str = "0O1lI";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
/// Largest number of passwords one batch produces.
pub const MAX_BATCH: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Character sets of the enabled classes, ambiguity filter applied.
    pub fn classes(&self) -> Vec<Vec<char>> {
        let filter = |set: &str| -> Vec<char> {
            set.chars()
                .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                .collect()
        };

        let mut classes = Vec::new();
        if self.uppercase {
            classes.push(filter(UPPERCASE));
        }
        if self.lowercase {
            classes.push(filter(LOWERCASE));
        }
        if self.numbers {
            classes.push(filter(NUMBERS));
        }
        if self.special {
            classes.push(SPECIAL.chars().collect());
        }
        classes
    }

    pub fn class_count(&self) -> usize {
        [self.uppercase, self.lowercase, self.numbers, self.special]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }

    pub fn strength(&self) -> Strength {
        strength(self.length, self.class_count())
    }
}

/// Generate one password containing at least one character of every enabled class.
///
/// When `length` is shorter than the number of enabled classes the result
/// holds exactly one character per class.
pub fn generate<R>(options: &PasswordOptions, rng: &mut R) -> Result<String, PasswordError>
where
    R: RngExt + ?Sized,
{
    let classes = options.classes();
    if classes.is_empty() {
        return Err(PasswordError::EmptyCharset);
    }
    let charset: Vec<char> = classes.concat();

    let mut password: Vec<char> = classes.iter().map(|class| pick(class, rng)).collect();
    while password.len() < options.length {
        password.push(pick(&charset, rng));
    }
    password.shuffle(rng);

    Ok(password.into_iter().collect())
}

/// Generate `count` passwords drawn uniformly from the union of enabled classes.
///
/// Unlike [`generate`] these carry no per-class guarantee. `count` is capped
/// at [`MAX_BATCH`].
pub fn generate_batch<R>(
    options: &PasswordOptions,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, PasswordError>
where
    R: RngExt + ?Sized,
{
    let charset: Vec<char> = options.classes().concat();
    if charset.is_empty() {
        return Err(PasswordError::EmptyCharset);
    }

    Ok((0..count.min(MAX_BATCH))
        .map(|_| (0..options.length).map(|_| pick(&charset, rng)).collect::<String>())
        .collect())
}

fn pick<R: RngExt + ?Sized>(set: &[char], rng: &mut R) -> char {
    set[rng.random_range(0..set.len())]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very strong",
        }
    }
}

pub fn strength(length: usize, class_count: usize) -> Strength {
    if length >= 16 && class_count >= 3 {
        Strength::VeryStrong
    } else if length >= 12 && class_count >= 3 {
        Strength::Strong
    } else if length >= 8 && class_count >= 2 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn has_any(password: &str, set: &str) -> bool {
        password.chars().any(|c| set.contains(c))
    }

    #[test]
    fn test_generate_contains_every_class() {
        let mut rng = rng();
        for _ in 0..50 {
            let password = generate(&PasswordOptions::default(), &mut rng).unwrap();
            assert_eq!(password.chars().count(), 16);
            assert!(has_any(&password, UPPERCASE));
            assert!(has_any(&password, LOWERCASE));
            assert!(has_any(&password, NUMBERS));
            assert!(has_any(&password, SPECIAL));
        }
    }

    #[test]
    fn test_generate_batch_caps_count() {
        let batch = generate_batch(&PasswordOptions::default(), usize::MAX, &mut rng()).unwrap();
        assert_eq!(batch.len(), MAX_BATCH);
    }

    #[test]
    fn test_generate_respects_disabled_classes() {
        let options = PasswordOptions {
            length: 32,
            uppercase: false,
            special: false,
            ..PasswordOptions::default()
        };
        let password = generate(&options, &mut rng()).unwrap();
        assert!(!has_any(&password, UPPERCASE));
        assert!(!has_any(&password, SPECIAL));
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_excludes_ambiguous() {
        let options = PasswordOptions {
            length: 64,
            special: false,
            exclude_ambiguous: true,
            ..PasswordOptions::default()
        };
        let mut rng = rng();
        for _ in 0..20 {
            let password = generate(&options, &mut rng).unwrap();
            assert!(!has_any(&password, AMBIGUOUS), "{password}");
        }
    }

    #[test]
    fn test_generate_short_length_keeps_required_chars() {
        let options = PasswordOptions {
            length: 2,
            ..PasswordOptions::default()
        };
        let password = generate(&options, &mut rng()).unwrap();
        assert_eq!(password.chars().count(), 4);
    }

    #[test]
    fn test_generate_without_classes_fails() {
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
            ..PasswordOptions::default()
        };
        assert_eq!(generate(&options, &mut rng()), Err(PasswordError::EmptyCharset));
        assert_eq!(
            generate_batch(&options, 5, &mut rng()),
            Err(PasswordError::EmptyCharset)
        );
    }

    #[test]
    fn test_generate_batch() {
        let options = PasswordOptions {
            length: 10,
            ..PasswordOptions::default()
        };
        let batch = generate_batch(&options, 5, &mut rng()).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.chars().count() == 10));
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(strength(16, 3), Strength::VeryStrong);
        assert_eq!(strength(16, 2), Strength::Medium);
        assert_eq!(strength(12, 4), Strength::Strong);
        assert_eq!(strength(8, 2), Strength::Medium);
        assert_eq!(strength(8, 1), Strength::Weak);
        assert_eq!(strength(7, 4), Strength::Weak);
        assert_eq!(PasswordOptions::default().strength(), Strength::VeryStrong);
    }
}
