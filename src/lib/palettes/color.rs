use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^#?(?P<digits>[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// An RGBA color with normalized channels.
/// Channels are stored exactly as read; nothing is clamped or gamma-converted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
	pub red: f64,
	pub green: f64,
	pub blue: f64,
	pub alpha: f64,
}

impl Default for Color {
	fn default() -> Self {
		Self { red: 0.0, green: 0.0, blue: 0.0, alpha: 1.0 }
	}
}

impl From<[u8; 4]> for Color {
	fn from(v: [u8; 4]) -> Self {
		Self {
			red: v[0] as f64 / 255.0,
			green: v[1] as f64 / 255.0,
			blue: v[2] as f64 / 255.0,
			alpha: v[3] as f64 / 255.0,
		}
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self::from([v[0], v[1], v[2], 0xFF])
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
	InvalidHex(String),
	NotAString,
	NotAnObject,
	MissingChannel(&'static str),
	NonNumericChannel(&'static str),
}

impl Display for ColorError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColorError::InvalidHex(s) => write!(f, "\"{s}\" is not a valid hexadecimal color value"),
			ColorError::NotAString => write!(f, "expected a hex color string"),
			ColorError::NotAnObject => write!(f, "expected an object with red, green, blue, and alpha fields"),
			ColorError::MissingChannel(c) => write!(f, "missing \"{c}\" channel"),
			ColorError::NonNumericChannel(c) => write!(f, "the \"{c}\" channel is not a number"),
		}
	}
}

// expands a single hex digit to a full byte, so that "F" becomes 0xFF
fn expand_nibble(c: u8) -> u8 {
	(c << 4) | c
}

impl Color {
	pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
		Self { red, green, blue, alpha }
	}

	/// Parses the hex notation used by palette files older than version 1.4.
	/// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`, with or without the leading `#`.
	pub fn from_hex(s: &str) -> Result<Color, ColorError> {
		let trimmed = s.trim();
		let digits = HEX_COLOR.captures(trimmed)
			.and_then(|c| c.name("digits"))
			.ok_or_else(|| ColorError::InvalidHex(trimmed.to_string()))?
			.as_str();

		// digit count is already validated by the regex
		let parsed_int = u32::from_str_radix(digits, 16)
			.map_err(|_| ColorError::InvalidHex(trimmed.to_string()))?;

		let bytes = match digits.len() {
			3 => [
				expand_nibble(((parsed_int >> 8) & 0xF) as u8),
				expand_nibble(((parsed_int >> 4) & 0xF) as u8),
				expand_nibble((parsed_int & 0xF) as u8),
				0xFF,
			],
			4 => [
				expand_nibble(((parsed_int >> 12) & 0xF) as u8),
				expand_nibble(((parsed_int >> 8) & 0xF) as u8),
				expand_nibble(((parsed_int >> 4) & 0xF) as u8),
				expand_nibble((parsed_int & 0xF) as u8),
			],
			6 => [
				((parsed_int >> 16) & 0xFF) as u8,
				((parsed_int >> 8) & 0xFF) as u8,
				(parsed_int & 0xFF) as u8,
				0xFF,
			],
			_ => parsed_int.to_be_bytes(),
		};

		Ok(Color::from(bytes))
	}

	/// Decodes a legacy palette entry, which must be a JSON string.
	pub fn from_legacy_value(v: &Value) -> Result<Color, ColorError> {
		match v {
			Value::String(s) => Self::from_hex(s),
			_ => Err(ColorError::NotAString),
		}
	}

	/// Decodes a `{red, green, blue, alpha}` object.
	/// Out-of-range channel values are passed through untouched.
	pub fn from_structured_value(v: &Value) -> Result<Color, ColorError> {
		let obj = v.as_object().ok_or(ColorError::NotAnObject)?;

		let channel = |name: &'static str| -> Result<f64, ColorError> {
			obj.get(name)
				.ok_or(ColorError::MissingChannel(name))?
				.as_f64()
				.ok_or(ColorError::NonNumericChannel(name))
		};

		Ok(Color {
			red: channel("red")?,
			green: channel("green")?,
			blue: channel("blue")?,
			alpha: channel("alpha")?,
		})
	}

	/// Encodes this color in the structured form written by every palette file this tool saves.
	pub fn to_structured_value(&self) -> Value {
		serde_json::json!({
			"red": self.red,
			"green": self.green,
			"blue": self.blue,
			"alpha": self.alpha,
		})
	}

	/// Renders the color as a Swift color literal.
	pub fn to_swift_literal(&self) -> String {
		format!(
			"#colorLiteral(red: {}, green: {}, blue: {}, alpha: {})",
			self.red, self.green, self.blue, self.alpha
		)
	}

	/// Converts the channels to bytes, clamping anything outside of [0;1].
	pub fn to_bytes(&self) -> [u8; 4] {
		let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
		[to_byte(self.red), to_byte(self.green), to_byte(self.blue), to_byte(self.alpha)]
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let [r, g, b, a] = self.to_bytes();
		write!(f, "#{:08X}", u32::from_be_bytes([r, g, b, a]))
	}
}

impl std::error::Error for ColorError {}
