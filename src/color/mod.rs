//! Color conversion between HEX, RGB and HSL forms.
//!
//! A [`Color`] stores three 8-bit channels; every textual form is parsed
//! into it and rendered back out of it, so all three representations of
//! one value always agree.

mod model;
mod parse;
mod recent;

pub use model::{Color, Hsl, Rgb};
pub use parse::{is_valid_hex, parse_hex, parse_hsl_str, parse_rgb_str};
pub use recent::{RECENT_CAPACITY, RecentColors};
