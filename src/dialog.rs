//! User prompts for colors, sizes, text, and file paths.
//!
//! The board state only sees the [`Dialogs`] trait; the default
//! implementation prompts on the controlling terminal, which keeps the
//! drawing window free of widget toolkit dependencies. Tests substitute
//! scripted implementations.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::draw::Color;
use crate::util;

/// Abstraction over the blocking prompts triggered by menu actions.
///
/// Every method returns `None` when the user cancels; callers treat a cancel
/// as "leave things as they are".
pub trait Dialogs {
    /// Asks for a color, showing the current one. `None` keeps the current
    /// color.
    fn pick_color(&self, current: Color) -> Option<Color>;

    /// Asks for an integer value (stroke width, font size).
    fn ask_integer(&self, prompt: &str) -> Option<i32>;

    /// Asks for a free-form string (text content, font style).
    fn ask_string(&self, prompt: &str) -> Option<String>;

    /// Asks where to save a document, offering a default file name.
    fn save_path(&self, default_name: &str) -> Option<PathBuf>;

    /// Asks which file to open.
    fn open_path(&self) -> Option<PathBuf>;
}

/// Terminal-backed prompts reading one reply line per question.
///
/// An empty reply means cancel, except for the save prompt where an empty
/// reply accepts the offered default and `-` cancels.
pub struct StdioDialogs;

impl StdioDialogs {
    fn read_reply(prompt: &str) -> Option<String> {
        print!("{prompt}: ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF counts as cancel
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                log::warn!("Failed to read reply from stdin: {err}");
                None
            }
        }
    }
}

impl Dialogs for StdioDialogs {
    fn pick_color(&self, current: Color) -> Option<Color> {
        let current_name = util::color_to_name(&current);
        let reply = Self::read_reply(&format!(
            "Color name or R,G,B 0-255 (current: {current_name})"
        ))?;
        let reply = reply.trim();
        if reply.is_empty() {
            return None;
        }
        match parse_color_input(reply) {
            Some(color) => Some(color),
            None => {
                log::warn!("Unrecognized color '{reply}', keeping the current color");
                None
            }
        }
    }

    fn ask_integer(&self, prompt: &str) -> Option<i32> {
        let reply = Self::read_reply(prompt)?;
        let reply = reply.trim();
        if reply.is_empty() {
            return None;
        }
        match reply.parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Not a number: '{reply}'");
                None
            }
        }
    }

    fn ask_string(&self, prompt: &str) -> Option<String> {
        let reply = Self::read_reply(prompt)?;
        if reply.trim().is_empty() {
            None
        } else {
            Some(reply)
        }
    }

    fn save_path(&self, default_name: &str) -> Option<PathBuf> {
        let reply = Self::read_reply(&format!("Save as [{default_name}], - to cancel"))?;
        let reply = reply.trim();
        if reply == "-" {
            None
        } else if reply.is_empty() {
            Some(PathBuf::from(default_name))
        } else {
            Some(PathBuf::from(reply))
        }
    }

    fn open_path(&self) -> Option<PathBuf> {
        let reply = Self::read_reply("Image file to open")?;
        let reply = reply.trim();
        if reply.is_empty() {
            None
        } else {
            Some(PathBuf::from(reply))
        }
    }
}

/// Parses a color reply: either a palette name or an `R,G,B` byte triplet.
pub fn parse_color_input(input: &str) -> Option<Color> {
    if let Some(color) = util::name_to_color(input) {
        return Some(color);
    }

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, PINK};

    #[test]
    fn color_input_accepts_palette_names() {
        assert_eq!(parse_color_input("blue").unwrap(), BLUE);
        assert_eq!(parse_color_input("Pink").unwrap(), PINK);
    }

    #[test]
    fn color_input_accepts_byte_triplets() {
        let color = parse_color_input("255, 128, 0").unwrap();
        assert!((color.r - 1.0).abs() < 1e-9);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((color.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn color_input_rejects_out_of_range_components() {
        assert!(parse_color_input("256,0,0").is_none());
        assert!(parse_color_input("-1,0,0").is_none());
    }

    #[test]
    fn color_input_rejects_malformed_replies() {
        assert!(parse_color_input("rgb(1,2,3)").is_none());
        assert!(parse_color_input("12,34").is_none());
        assert!(parse_color_input("a,b,c").is_none());
        assert!(parse_color_input("").is_none());
    }
}
