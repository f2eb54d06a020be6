use anyhow::{Context, Result};
use colored::Colorize;

use sketchpal_rs::palettes::palette::{ColorEncoding, PaletteFile};
use sketchpal_rs::palettes::version::Version;

use crate::commands::InfoArgs;
use crate::common::Outcome;

pub(crate) fn palette_info(args: &InfoArgs, running: &Version) -> Result<Outcome> {
	let palette = PaletteFile::from_file(&args.input)
		.with_context(|| format!("Couldn't read {}", args.input.display()))?;

	// nothing is printed for palettes this version can't load
	let colors = palette.decode(running)?;

	let compatible_version = palette.compatible_version.as_ref()
		.map(|v| v.to_string())
		.unwrap_or("none".to_string());
	let plugin_version = palette.plugin_version.as_deref().unwrap_or("unknown");
	let encoding = match ColorEncoding::for_version(palette.compatible_version.as_ref()) {
		ColorEncoding::LegacyHex => "hex strings",
		ColorEncoding::Structured => "RGBA objects",
	};

	println!("compatible version: {compatible_version}, saved with: {plugin_version}, colors stored as {encoding}");

	if colors.is_empty() {
		eprintln!("NOTE: The palette is empty!");
		return Ok(Outcome::Printed);
	}

	for (i, color) in colors.iter().enumerate() {
		let [r, g, b, _] = color.to_bytes();
		println!(
			"[{i}] {} {color} (red: {}, green: {}, blue: {}, alpha: {})",
			"    ".on_truecolor(r, g, b),
			color.red, color.green, color.blue, color.alpha
		);
	}

	Ok(Outcome::Printed)
}
