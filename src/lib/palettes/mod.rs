pub mod color;
pub mod gradient;
pub mod pal_swift;
pub mod palette;
pub mod version;

/// The file extension used for palette files.
pub const PALETTE_EXTENSION: &str = "sketchpalette";

/// The minimum tool version able to read what [palette::PaletteFile::serialize] writes.
/// Files declaring an older version (or none at all) store their colors as hex strings.
pub const STRUCTURED_COLORS_VERSION: &str = "1.4";
