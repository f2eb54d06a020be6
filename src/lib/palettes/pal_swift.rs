use crate::palettes::color::Color;
use crate::palettes::gradient::Gradient;

const SWIFT_HEADER: &str = "import UIKit\n\n";

/// The file extension of generated source files.
pub const SWIFT_EXTENSION: &str = "swift";

/// Returns true if [to_swift_source] would output anything besides the header.
pub fn has_swift_content(colors: &[Color], gradients: &[Gradient]) -> bool {
	!colors.is_empty() || gradients.iter().any(Gradient::is_linear)
}

/// Generates a Swift source file declaring every color as a `UIColor` class variable
/// and every linear gradient as a `CAGradientLayer` class variable.
///
/// Gradients are named after their index in `gradients`, so skipped non-linear
/// gradients leave gaps in the numbering.
pub fn to_swift_source(colors: &[Color], gradients: &[Gradient]) -> String {
	let mut source = SWIFT_HEADER.to_string();

	if !colors.is_empty() {
		source += "extension UIColor {\n";
		for (i, color) in colors.iter().enumerate() {
			source += &format!("\tclass var color{i}: UIColor {{ return {} }}\n", color.to_swift_literal());
		}
		source += "}\n\n";
	}

	let linear = gradients.iter()
		.enumerate()
		.filter(|(_, g)| g.is_linear())
		.collect::<Vec<(usize, &Gradient)>>();

	let skipped = gradients.len() - linear.len();
	if skipped > 0 {
		log::debug!("skipping {skipped} non-linear gradients");
	}

	if !linear.is_empty() {
		source += "extension CAGradientLayer {\n";
		for (i, gradient) in linear {
			source += &gradient.to_swift_declaration(&format!("gradient{i}"));
			source += "\n\n";
		}
		source += "}\n\n";
	}

	source
}
