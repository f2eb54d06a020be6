use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use sketchpal_rs::assets::library::AssetLibrary;
use sketchpal_rs::assets::{AssetStore, Scope};
use sketchpal_rs::palettes::color::Color;

fn test_file(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/palettes/{name}"))
}

fn spal(library: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_spal"))
		.arg("--library").arg(library)
		.arg("--tool-version").arg("1.5.0")
		.args(args)
		.output()
		.unwrap()
}

fn path_str(p: &Path) -> &str {
	p.to_str().unwrap()
}

#[test]
fn cli_load_replaces_colors() {
	let dir = tempfile::tempdir().unwrap();
	let library = dir.path().join("assets.json");

	let out = spal(&library, &["load", "-i", path_str(&test_file("legacy.sketchpalette")), "--scope", "document"]);
	assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

	let lib = AssetLibrary::open(&library).unwrap();
	assert_eq!(lib.colors(Scope::Document).len(), 4);
	assert!(lib.colors(Scope::Global).is_empty());

	let out = spal(&library, &["load", "-i", path_str(&test_file("legacy_1.3.sketchpalette")), "--scope", "document"]);
	assert!(out.status.success());
	assert_eq!(AssetLibrary::open(&library).unwrap().colors(Scope::Document), &[
		Color::from([0x1E, 0x3D, 0x54]),
		Color::from([0xE2, 0xED, 0xF5]),
	]);
}

#[test]
fn cli_failed_load_leaves_library_alone() {
	let dir = tempfile::tempdir().unwrap();
	let library = dir.path().join("assets.json");

	let out = spal(&library, &["load", "-i", path_str(&test_file("structured.sketchpalette"))]);
	assert!(out.status.success());
	let before = fs::read(&library).unwrap();

	for broken in ["future.sketchpalette", "broken_json.sketchpalette", "broken_legacy.sketchpalette", "broken_structured.sketchpalette"] {
		println!("Testing load of {broken}…");
		let out = spal(&library, &["load", "-i", path_str(&test_file(broken))]);
		assert!(!out.status.success(), "{broken} should fail to load");
		assert_eq!(fs::read(&library).unwrap(), before, "{broken} changed the library");
	}

	// a library that never existed isn't created by a failed load
	let missing = dir.path().join("missing.json");
	let out = spal(&missing, &["load", "-i", path_str(&test_file("future.sketchpalette"))]);
	assert!(!out.status.success());
	assert!(!missing.exists());
}

#[test]
fn cli_save_and_swift_with_nothing_to_do() {
	let dir = tempfile::tempdir().unwrap();
	let library = dir.path().join("assets.json");
	fs::write(&library, r#"{"global": {"gradients": [{"type": "radial", "from": {"x": 0, "y": 0}, "to": {"x": 1, "y": 1}}]}}"#).unwrap();

	let output = dir.path().join("o.sketchpalette");
	let out = spal(&library, &["save", path_str(&output)]);
	assert!(out.status.success());
	assert!(String::from_utf8_lossy(&out.stderr).contains("No colors in palette!"));
	assert!(!output.exists());

	let output = dir.path().join("o.swift");
	let out = spal(&library, &["swift", path_str(&output)]);
	assert!(out.status.success());
	assert!(String::from_utf8_lossy(&out.stderr).contains("No colors or linear gradients in palette!"));
	assert!(!output.exists());
}

#[test]
fn cli_output_extensions() {
	let dir = tempfile::tempdir().unwrap();
	let library = dir.path().join("assets.json");
	assert!(spal(&library, &["load", "-i", path_str(&test_file("structured.sketchpalette"))]).status.success());

	let cases = [
		("save", "plain", "plain.sketchpalette"),
		("save", "dotted.", "dotted.sketchpalette"),
		("save", "palette.json", "palette.json"),
		("swift", "Palette", "Palette.swift"),
		("swift", "Colors.", "Colors.swift"),
		("swift", "Colors.txt", "Colors.txt"),
	];

	for (command, given, expected) in cases {
		println!("Testing {command} to {given}…");
		let out = spal(&library, &[command, path_str(&dir.path().join(given))]);
		assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
		assert!(dir.path().join(expected).exists(), "{expected} was not written");
	}

	let saved = fs::read_to_string(dir.path().join("plain.sketchpalette")).unwrap();
	assert!(saved.starts_with(r#"{"compatibleVersion":"1.4","pluginVersion":"1.5.0","colors":["#));

	let swift = fs::read_to_string(dir.path().join("Palette.swift")).unwrap();
	assert!(swift.starts_with("import UIKit\n\nextension UIColor {\n"));
}

#[test]
fn cli_clear() {
	let dir = tempfile::tempdir().unwrap();
	let library = dir.path().join("assets.json");
	assert!(spal(&library, &["load", "-i", path_str(&test_file("structured.sketchpalette")), "-s", "global"]).status.success());
	assert!(spal(&library, &["load", "-i", path_str(&test_file("legacy.sketchpalette")), "-s", "document"]).status.success());

	assert!(spal(&library, &["clear", "-s", "global"]).status.success());

	let lib = AssetLibrary::open(&library).unwrap();
	assert!(lib.colors(Scope::Global).is_empty());
	assert_eq!(lib.colors(Scope::Document).len(), 4);
}

#[test]
fn cli_info() {
	let dir = tempfile::tempdir().unwrap();
	let library = dir.path().join("assets.json");

	let out = spal(&library, &["info", "-i", path_str(&test_file("legacy_1.3.sketchpalette"))]);
	assert!(out.status.success());
	let stdout = String::from_utf8_lossy(&out.stdout);
	assert!(stdout.contains("compatible version: 1.3"));
	assert!(stdout.contains("#1E3D54FF"));

	// too new: the error comes without a summary
	let out = spal(&library, &["info", "-i", path_str(&test_file("future.sketchpalette"))]);
	assert!(!out.status.success());
	assert!(out.stdout.is_empty());
	assert!(!library.exists());
}

#[test]
fn cli_without_command_fails() {
	let dir = tempfile::tempdir().unwrap();
	let out = spal(&dir.path().join("assets.json"), &[]);
	assert!(!out.status.success());
}
