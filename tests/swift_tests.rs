use sketchpal_rs::palettes::color::Color;
use sketchpal_rs::palettes::gradient::{Gradient, GradientKind, GradientStop, Point};
use sketchpal_rs::palettes::pal_swift::{has_swift_content, to_swift_source};

const RED: Color = Color { red: 1.0, green: 0.0, blue: 0.0, alpha: 1.0 };
const BLUE: Color = Color { red: 0.0, green: 0.0, blue: 1.0, alpha: 1.0 };

fn vertical_gradient() -> Gradient {
	Gradient::linear(
		Point::new(0.5, 0.0),
		Point::new(0.5, 1.0),
		vec![
			GradientStop { position: 0.0, color: RED },
			GradientStop { position: 1.0, color: BLUE },
		],
	)
}

fn radial_gradient() -> Gradient {
	Gradient { kind: GradientKind::Radial, ..vertical_gradient() }
}

#[test]
fn swift_colors_and_gradients() {
	let colors = vec![RED, Color::new(0.5, 0.25, 0.125, 0.75)];
	let source = to_swift_source(&colors, &[vertical_gradient()]);

	let expected = "import UIKit\n\n\
		extension UIColor {\n\
		\tclass var color0: UIColor { return #colorLiteral(red: 1, green: 0, blue: 0, alpha: 1) }\n\
		\tclass var color1: UIColor { return #colorLiteral(red: 0.5, green: 0.25, blue: 0.125, alpha: 0.75) }\n\
		}\n\n\
		extension CAGradientLayer {\n\
		\tclass var gradient0: CAGradientLayer {\n\
		\t\tlet layer = CAGradientLayer()\n\
		\t\tlayer.locations = [0, 1]\n\
		\t\tlayer.colors = [#colorLiteral(red: 1, green: 0, blue: 0, alpha: 1).cgColor, #colorLiteral(red: 0, green: 0, blue: 1, alpha: 1).cgColor]\n\
		\t\tlayer.startPoint = CGPoint(x: 0.5, y: 0)\n\
		\t\tlayer.endPoint = CGPoint(x: 0.5, y: 1)\n\
		\t\treturn layer\n\
		\t}\n\n\
		}\n\n";

	assert_eq!(source, expected);
}

#[test]
fn swift_colors_only() {
	let source = to_swift_source(&[BLUE], &[]);
	assert_eq!(
		source,
		"import UIKit\n\nextension UIColor {\n\tclass var color0: UIColor { return #colorLiteral(red: 0, green: 0, blue: 1, alpha: 1) }\n}\n\n"
	);
	assert!(!source.contains("CAGradientLayer"));
}

#[test]
fn swift_skips_non_linear_gradients() {
	let source = to_swift_source(&[], &[vertical_gradient(), radial_gradient()]);
	assert_eq!(source.matches("class var").count(), 1);
	assert!(source.contains("class var gradient0: CAGradientLayer"));
	assert!(!source.contains("gradient1"));
	assert!(!source.contains("extension UIColor"));

	// names follow the position in the full list
	let source = to_swift_source(&[], &[radial_gradient(), vertical_gradient()]);
	assert!(source.contains("class var gradient1: CAGradientLayer"));
	assert!(!source.contains("gradient0"));

	// nothing but non-linear gradients leaves out the whole block
	let source = to_swift_source(&[], &[radial_gradient()]);
	assert_eq!(source, "import UIKit\n\n");
}

#[test]
fn swift_keeps_stop_order() {
	let gradient = Gradient::linear(
		Point::new(0.0, 0.0),
		Point::new(1.0, 1.0),
		vec![
			GradientStop { position: 0.75, color: BLUE },
			GradientStop { position: 0.25, color: RED },
		],
	);

	let decl = gradient.to_swift_declaration("backwards");
	assert!(decl.starts_with("\tclass var backwards: CAGradientLayer {\n"));
	assert!(decl.contains("layer.locations = [0.75, 0.25]"));
	assert!(decl.contains("layer.colors = [#colorLiteral(red: 0, green: 0, blue: 1, alpha: 1).cgColor, #colorLiteral(red: 1, green: 0, blue: 0, alpha: 1).cgColor]"));
	assert!(decl.ends_with("\t\treturn layer\n\t}"));
}

#[test]
fn swift_content_check() {
	assert!(!has_swift_content(&[], &[]));
	assert!(!has_swift_content(&[], &[radial_gradient()]));
	assert!(has_swift_content(&[], &[radial_gradient(), vertical_gradient()]));
	assert!(has_swift_content(&[RED], &[]));
}
