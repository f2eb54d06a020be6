use std::path::Path;

use anyhow::{Context, Result};

use sketchpal_rs::assets::AssetStore;
use sketchpal_rs::assets::library::AssetLibrary;
use sketchpal_rs::palettes::palette::PaletteFile;
use sketchpal_rs::palettes::version::Version;

use crate::commands::LoadArgs;
use crate::common::Outcome;

pub(crate) fn palette_load(args: &LoadArgs, library_path: &Path, running: &Version) -> Result<Outcome> {
	// the palette is fully decoded before the library is touched
	let colors = PaletteFile::load_from_file(&args.input, running)
		.with_context(|| format!("Couldn't load {}", args.input.display()))?;

	let mut library = AssetLibrary::open(library_path)?;
	let count = colors.len();
	library.replace_colors(args.scope, colors);
	library.save()?;

	Ok(Outcome::Applied { scope: args.scope, count })
}
