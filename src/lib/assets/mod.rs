use std::fmt::{Display, Formatter};

use crate::palettes::color::Color;
use crate::palettes::gradient::Gradient;

pub mod library;

/// Which set of assets an operation reads from or writes to.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
	/// Assets shared by every document.
	#[default]
	Global,
	/// Assets that belong to the current document.
	Document,
}

impl Display for Scope {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Scope::Global => write!(f, "global"),
			Scope::Document => write!(f, "document"),
		}
	}
}

/// The host's color and gradient storage.
///
/// Colors are never edited in place: [AssetStore::replace_colors] swaps out the whole list.
pub trait AssetStore {
	fn colors(&self, scope: Scope) -> &[Color];
	fn gradients(&self, scope: Scope) -> &[Gradient];
	fn replace_colors(&mut self, scope: Scope, colors: Vec<Color>);
}
