use std::path::{Path, PathBuf};

use colored::Colorize;

use sketchpal_rs::assets::Scope;

/// What a command did, for `main` to report.
pub(crate) enum Outcome {
	Written(PathBuf),
	Applied { scope: Scope, count: usize },
	Printed,
	NothingToDo(&'static str),
}

/// Adds `extension` to `path` unless it already has one. A trailing dot counts as no extension.
pub(crate) fn with_default_extension<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
	let path = path.as_ref();
	match path.extension() {
		Some(ext) if !ext.is_empty() => path.to_path_buf(),
		_ => path.with_extension(extension),
	}
}

/// Shows a message that needs the user's attention but isn't an error.
pub(crate) fn display_message(msg: &str) {
	eprintln!("{}", msg.yellow().bold());
}

pub(crate) fn display_error(msg: &str) {
	eprintln!("{} {msg}", "error:".red().bold());
}
