use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::files::write_atomically;
use crate::palettes::STRUCTURED_COLORS_VERSION;
use crate::palettes::color::{Color, ColorError};
use crate::palettes::version::{Version, check_loadable};

/// How the entries of a palette's `colors` array are encoded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorEncoding {
	/// Hex strings, used by files older than version 1.4 and by files that declare no version.
	LegacyHex,
	/// `{red, green, blue, alpha}` objects.
	Structured,
}

impl ColorEncoding {
	pub fn for_version(compatible_version: Option<&Version>) -> ColorEncoding {
		// the constant is a valid version, so this can't fail
		let threshold = STRUCTURED_COLORS_VERSION.parse::<Version>().ok();

		match (compatible_version, threshold) {
			(Some(v), Some(t)) if *v >= t => ColorEncoding::Structured,
			_ => ColorEncoding::LegacyHex,
		}
	}
}

/// The raw contents of a palette file, before any color has been decoded.
#[derive(Clone, Debug, Default)]
pub struct PaletteFile {
	pub compatible_version: Option<Version>,
	pub plugin_version: Option<String>,
	pub colors: Vec<Value>,
}

impl PaletteFile {
	fn parse_internal<R: Read>(reader: R) -> Result<PaletteFile, PaletteError> {
		let contents: Value = serde_json::from_reader(reader)
			.map_err(|e| PaletteError::InvalidFileFormat(format!("not valid JSON ({e})")))?;

		let Value::Object(obj) = contents else {
			return Err(PaletteError::InvalidFileFormat("the file does not contain a JSON object".to_string()));
		};

		Self::from_object(obj)
	}

	fn from_object(mut obj: Map<String, Value>) -> Result<PaletteFile, PaletteError> {
		let compatible_version = match obj.get("compatibleVersion") {
			None | Some(Value::Null) => None,
			Some(v) => Some(Version::from_json_value(v)?),
		};

		// purely informational, so anything unexpected is ignored
		let plugin_version = match obj.get("pluginVersion") {
			Some(Value::String(s)) => Some(s.clone()),
			Some(Value::Number(n)) => Some(n.to_string()),
			_ => None,
		};

		let colors = match obj.remove("colors") {
			None | Some(Value::Null) => Vec::new(),
			Some(Value::Array(colors)) => colors,
			Some(_) => return Err(PaletteError::InvalidFileFormat("\"colors\" is not an array".to_string())),
		};

		Ok(PaletteFile { compatible_version, plugin_version, colors })
	}

	pub fn parse(raw: &str) -> Result<PaletteFile, PaletteError> {
		Self::parse_internal(raw.as_bytes())
	}

	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PaletteFile, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::parse_internal(reader)
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Decodes every entry of `colors` with the one encoding implied by `compatible_version`.
	/// Mixed arrays are not supported; the first entry that doesn't match fails the whole decode.
	pub fn decode_colors(&self, compatible_version: Option<&Version>) -> Result<Vec<Color>, PaletteError> {
		let encoding = ColorEncoding::for_version(compatible_version);
		log::debug!("decoding {} colors as {encoding:?}", self.colors.len());

		self.colors.iter().enumerate().map(|(i, v)| {
			let decoded = match encoding {
				ColorEncoding::LegacyHex => Color::from_legacy_value(v),
				ColorEncoding::Structured => Color::from_structured_value(v),
			};

			decoded.map_err(|source| PaletteError::MalformedColor { index: i, source })
		}).collect()
	}

	/// Checks the declared version against `running` and decodes the colors.
	/// Nothing is decoded if the file is too new.
	pub fn decode(&self, running: &Version) -> Result<Vec<Color>, PaletteError> {
		check_loadable(self.compatible_version.as_ref(), running)?;
		self.decode_colors(self.compatible_version.as_ref())
	}

	/// Parses, version-checks, and decodes a palette in one go.
	pub fn load(raw: &str, running: &Version) -> Result<Vec<Color>, PaletteError> {
		Self::parse(raw)?.decode(running)
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P, running: &Version) -> Result<Vec<Color>, PaletteError> {
		Self::from_file(path)?.decode(running)
	}

	/// Writes `colors` in the structured format, declaring the minimum version able to read it.
	pub fn serialize(colors: &[Color], plugin_version: &str) -> String {
		let colors = colors.iter().map(Color::to_structured_value).collect::<Vec<Value>>();

		serde_json::json!({
			"compatibleVersion": STRUCTURED_COLORS_VERSION,
			"pluginVersion": plugin_version,
			"colors": colors,
		}).to_string()
	}

	/// Serializes `colors` and writes them to `path`, returning the number of bytes written.
	pub fn save_to_file<P: AsRef<Path>>(path: P, colors: &[Color], plugin_version: &str) -> Result<u64, PaletteError> {
		let contents = Self::serialize(colors, plugin_version);
		write_atomically(path, &contents)?;
		Ok(contents.len() as u64)
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidFileFormat(String),
	MalformedColor { index: usize, source: ColorError },
	IncompatibleVersion { file: Version, running: Version },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidFileFormat(msg) => write!(f, "Invalid palette file: {msg}"),
			PaletteError::MalformedColor { index, source } => write!(f, "Invalid color at index {index}: {source}"),
			PaletteError::IncompatibleVersion { file, running } => write!(
				f,
				"This palette needs version {file} or newer, but you are running {running}. Please update to the latest version."
			),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::MalformedColor { source, .. } => Some(source),
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
