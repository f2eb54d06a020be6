use std::path::Path;

use anyhow::Result;

use sketchpal_rs::assets::AssetStore;
use sketchpal_rs::assets::library::AssetLibrary;
use sketchpal_rs::palettes::PALETTE_EXTENSION;
use sketchpal_rs::palettes::palette::PaletteFile;
use sketchpal_rs::palettes::version::Version;

use crate::commands::SaveArgs;
use crate::common::{Outcome, with_default_extension};

pub(crate) fn palette_save(args: &SaveArgs, library_path: &Path, running: &Version) -> Result<Outcome> {
	let library = AssetLibrary::open(library_path)?;

	let colors = library.colors(args.scope);
	if colors.is_empty() {
		return Ok(Outcome::NothingToDo("No colors in palette!"));
	}

	let output = with_default_extension(&args.output, PALETTE_EXTENSION);
	PaletteFile::save_to_file(&output, colors, &running.to_string())?;

	Ok(Outcome::Written(output))
}
