use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_json::Value;

use crate::palettes::palette::PaletteError;

/// A dotted numeric version like `1.4` or `1.10.2`.
///
/// Versions compare component by component, so `1.4 < 1.10`, and missing trailing
/// components count as zero, so `1.4 == 1.4.0`. The original text is kept for display.
#[derive(Clone, Debug)]
pub struct Version {
	raw: String,
	parts: Vec<u64>,
}

impl Version {
	pub fn parts(&self) -> &[u64] {
		&self.parts
	}

	/// Reads a version that may have been written as either a JSON string or a JSON number.
	pub fn from_json_value(v: &Value) -> Result<Version, PaletteError> {
		let s = match v {
			Value::String(s) => s.clone(),
			Value::Number(n) => n.to_string(),
			_ => return Err(PaletteError::InvalidFileFormat(format!("version {v} is neither a string nor a number"))),
		};

		s.parse::<Version>()
	}

	fn component(&self, i: usize) -> u64 {
		self.parts.get(i).copied().unwrap_or(0)
	}
}

impl FromStr for Version {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		// pre-release and build metadata don't take part in comparisons
		let core = trimmed.split(['-', '+']).next().unwrap_or_default();

		let parts = core.split('.')
			.map(|p| p.parse::<u64>())
			.collect::<Result<Vec<u64>, _>>()
			.map_err(|_| PaletteError::InvalidFileFormat(format!("\"{trimmed}\" is not a valid version")))?;

		Ok(Version { raw: trimmed.to_string(), parts })
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.raw)
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> Ordering {
		let len = self.parts.len().max(other.parts.len());
		(0..len)
			.map(|i| self.component(i).cmp(&other.component(i)))
			.find(|o| o.is_ne())
			.unwrap_or(Ordering::Equal)
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Version {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Version {}

/// Fails if the file declares a compatible version newer than the running tool.
/// Files without a declared version always pass.
pub fn check_loadable(file_version: Option<&Version>, running: &Version) -> Result<(), PaletteError> {
	match file_version {
		Some(file) if file > running => {
			log::debug!("palette requires version {file}, running {running}");
			Err(PaletteError::IncompatibleVersion { file: file.clone(), running: running.clone() })
		}
		_ => Ok(()),
	}
}
