use serde::{Deserialize, Serialize};

use crate::palettes::color::Color;

/// A point in the normalized gradient coordinate space (0.0 to 1.0 per axis, origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
	pub position: f64,
	pub color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
	#[default]
	Linear,
	Radial,
	Angular,
}

/// A gradient as stored by the host. Stop order is significant and never changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
	#[serde(rename = "type", default)]
	pub kind: GradientKind,
	pub from: Point,
	pub to: Point,
	#[serde(default)]
	pub stops: Vec<GradientStop>,
}

impl Gradient {
	pub fn linear(from: Point, to: Point, stops: Vec<GradientStop>) -> Self {
		Self { kind: GradientKind::Linear, from, to, stops }
	}

	/// Linear (axial) gradients are the only kind that can be turned into source code.
	pub fn is_linear(&self) -> bool {
		self.kind == GradientKind::Linear
	}

	/// Renders a Swift class variable that builds a `CAGradientLayer` for this gradient.
	pub fn to_swift_declaration(&self, name: &str) -> String {
		let positions = self.stops.iter()
			.map(|s| s.position.to_string())
			.collect::<Vec<String>>()
			.join(", ");
		let colors = self.stops.iter()
			.map(|s| format!("{}.cgColor", s.color.to_swift_literal()))
			.collect::<Vec<String>>()
			.join(", ");

		let mut lines: Vec<String> = Vec::new();
		lines.push(format!("\tclass var {name}: CAGradientLayer {{"));
		lines.push("\t\tlet layer = CAGradientLayer()".to_string());
		lines.push(format!("\t\tlayer.locations = [{positions}]"));
		lines.push(format!("\t\tlayer.colors = [{colors}]"));
		lines.push(format!("\t\tlayer.startPoint = CGPoint(x: {}, y: {})", self.from.x, self.from.y));
		lines.push(format!("\t\tlayer.endPoint = CGPoint(x: {}, y: {})", self.to.x, self.to.y));
		lines.push("\t\treturn layer".to_string());
		lines.push("\t}".to_string());
		lines.join("\n")
	}
}
