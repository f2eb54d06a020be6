use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::{AssetStore, Scope};
use crate::files::write_atomically;
use crate::palettes::color::Color;
use crate::palettes::gradient::Gradient;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Assets {
	#[serde(default)]
	pub colors: Vec<Color>,
	#[serde(default)]
	pub gradients: Vec<Gradient>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct LibraryContents {
	#[serde(default)]
	global: Assets,
	#[serde(default)]
	document: Assets,
}

/// An [AssetStore] kept in a JSON file with one section per [Scope].
/// Changes stay in memory until [AssetLibrary::save] is called.
#[derive(Clone, Debug, Default)]
pub struct AssetLibrary {
	path: PathBuf,
	contents: LibraryContents,
}

impl AssetLibrary {
	/// Opens the library at `path`. A missing file is treated as an empty library.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<AssetLibrary, AssetError> {
		let path = path.as_ref().to_path_buf();

		let contents = match fs::read_to_string(&path) {
			Ok(s) => serde_json::from_str::<LibraryContents>(&s)
				.map_err(|e| AssetError::InvalidLibrary { path: path.clone(), msg: e.to_string() })?,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				log::debug!("{} does not exist, starting with an empty library", path.display());
				LibraryContents::default()
			}
			Err(e) => return Err(AssetError::IoErr(e)),
		};

		Ok(AssetLibrary { path, contents })
	}

	pub fn assets(&self, scope: Scope) -> &Assets {
		match scope {
			Scope::Global => &self.contents.global,
			Scope::Document => &self.contents.document,
		}
	}

	fn assets_mut(&mut self, scope: Scope) -> &mut Assets {
		match scope {
			Scope::Global => &mut self.contents.global,
			Scope::Document => &mut self.contents.document,
		}
	}

	/// Writes the library back to its file.
	pub fn save(&self) -> Result<(), AssetError> {
		let serialized = serde_json::to_string_pretty(&self.contents)
			.map_err(|e| AssetError::InvalidLibrary { path: self.path.clone(), msg: e.to_string() })?;

		write_atomically(&self.path, &serialized)?;
		Ok(())
	}
}

impl AssetStore for AssetLibrary {
	fn colors(&self, scope: Scope) -> &[Color] {
		&self.assets(scope).colors
	}

	fn gradients(&self, scope: Scope) -> &[Gradient] {
		&self.assets(scope).gradients
	}

	fn replace_colors(&mut self, scope: Scope, colors: Vec<Color>) {
		log::debug!("replacing {} {scope} colors with {}", self.colors(scope).len(), colors.len());
		self.assets_mut(scope).colors = colors;
	}
}

#[derive(Debug)]
pub enum AssetError {
	InvalidLibrary { path: PathBuf, msg: String },
	IoErr(std::io::Error),
}

impl Display for AssetError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AssetError::InvalidLibrary { path, msg } => write!(f, "Invalid asset library {}: {msg}", path.display()),
			AssetError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for AssetError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			AssetError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for AssetError {
	fn from(e: std::io::Error) -> Self {
		AssetError::IoErr(e)
	}
}
