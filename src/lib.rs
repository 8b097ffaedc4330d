//! # Toolbelt
//!
//! Small, side-effect-free utilities behind the `toolbelt` terminal app:
//!
//! - [`color`]: HEX / RGB / HSL conversion and a recent-colors list
//! - [`text`]: character, byte, word, sentence, line and paragraph counts
//! - [`dday`]: day distance to a target date with a calendar breakdown
//! - [`password`]: password generation from selectable character classes
//!
//! ```rust
//! use toolbelt::color::Color;
//!
//! let color = Color::parse("rgb(255, 107, 53)")?;
//! assert_eq!(color.to_hex(), "#FF6B35");
//! assert_eq!(color.to_hsl().to_string(), "hsl(16, 100%, 60%)");
//! # Ok::<(), toolbelt::error::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod dday;
pub mod error;
pub mod password;
pub mod text;
