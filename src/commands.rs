use std::path::PathBuf;

use clap::{Parser, Subcommand};
use const_format::formatcp;

use sketchpal_rs::assets::Scope;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

/// The version palettes are checked against and stamped with, unless overridden.
pub(crate) const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Imports and exports color palettes and generates Swift color constants")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Enables debug logging.")]
	pub debug: bool,

	#[arg(short = 'L', long, global = true, help = "The asset library holding the global and document colors.", default_value = "assets.json")]
	pub library: PathBuf,

	#[arg(long = "tool-version", global = true, help = "Overrides the tool version palettes are checked against and saved with.")]
	pub tool_version: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct LoadArgs {
	#[arg(short, help = "The palette file.")]
	pub input: PathBuf,

	#[arg(short, long, value_enum, help = "The colors to replace.", default_value_t = Scope::default())]
	pub scope: Scope,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SaveArgs {
	#[arg(help = "The output file. (.sketchpalette is added if there is no extension)")]
	pub output: PathBuf,

	#[arg(short, long, value_enum, help = "The colors to save.", default_value_t = Scope::default())]
	pub scope: Scope,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SwiftArgs {
	#[arg(help = "The output file. (.swift is added if there is no extension)")]
	pub output: PathBuf,

	#[arg(short, long, value_enum, help = "The colors and gradients to export.", default_value_t = Scope::default())]
	pub scope: Scope,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ClearArgs {
	#[arg(short, long, value_enum, help = "The colors to remove.", default_value_t = Scope::default())]
	pub scope: Scope,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct InfoArgs {
	#[arg(short, help = "The palette file.")]
	pub input: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Replaces the library's colors with the ones from a palette file")]
	Load(LoadArgs),

	#[command(about = "Saves the library's colors as a palette file")]
	Save(SaveArgs),

	#[command(about = "Exports the library's colors and linear gradients as Swift source")]
	Swift(SwiftArgs),

	#[command(about = "Removes all colors from the library")]
	Clear(ClearArgs),

	#[command(about = "Prints the contents of a palette file")]
	Info(InfoArgs),
}
