use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Writes `contents` to `path` through a temporary file in the same directory,
/// so `path` either keeps its old contents or receives all of the new ones.
pub fn write_atomically<P: AsRef<Path>>(path: P, contents: &str) -> std::io::Result<()> {
	let path = path.as_ref();
	let dir = match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};

	let mut temp_file = NamedTempFile::new_in(dir)?;
	temp_file.write_all(contents.as_bytes())?;
	temp_file.flush()?;
	temp_file.persist(path).map_err(|e| e.error)?;

	log::debug!("wrote {} bytes to {}", contents.len(), path.display());
	Ok(())
}
