use std::path::Path;

use anyhow::Result;

use sketchpal_rs::assets::AssetStore;
use sketchpal_rs::assets::library::AssetLibrary;

use crate::commands::ClearArgs;
use crate::common::Outcome;

pub(crate) fn palette_clear(args: &ClearArgs, library_path: &Path) -> Result<Outcome> {
	let mut library = AssetLibrary::open(library_path)?;
	library.replace_colors(args.scope, Vec::new());
	library.save()?;

	Ok(Outcome::Applied { scope: args.scope, count: 0 })
}
