use std::path::Path;

use anyhow::Result;

use sketchpal_rs::assets::AssetStore;
use sketchpal_rs::assets::library::AssetLibrary;
use sketchpal_rs::files::write_atomically;
use sketchpal_rs::palettes::pal_swift::{SWIFT_EXTENSION, has_swift_content, to_swift_source};

use crate::commands::SwiftArgs;
use crate::common::{Outcome, with_default_extension};

pub(crate) fn palette_swift(args: &SwiftArgs, library_path: &Path) -> Result<Outcome> {
	let library = AssetLibrary::open(library_path)?;

	let colors = library.colors(args.scope);
	let gradients = library.gradients(args.scope);
	if !has_swift_content(colors, gradients) {
		return Ok(Outcome::NothingToDo("No colors or linear gradients in palette!"));
	}

	let source = to_swift_source(colors, gradients);

	let output = with_default_extension(&args.output, SWIFT_EXTENSION);
	write_atomically(&output, &source)?;

	Ok(Outcome::Written(output))
}
