use std::fmt::{self, Display, Formatter};

use strum::EnumIter;

/// A single element of an icon's geometry, in the coordinates of a
/// `0 0 24 24` view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
	/// `<path d=...>`
	Path(&'static str),
	/// `<circle>`
	Circle {
		/// Centre x
		cx: f64,
		/// Centre y
		cy: f64,
		/// Radius
		r: f64,
	},
	/// `<ellipse>`
	Ellipse {
		/// Centre x
		cx: f64,
		/// Centre y
		cy: f64,
		/// Horizontal radius
		rx: f64,
		/// Vertical radius
		ry: f64,
	},
	/// `<line>`
	Line {
		/// Start x
		x1: f64,
		/// Start y
		y1: f64,
		/// End x
		x2: f64,
		/// End y
		y2: f64,
	},
	/// `<polyline points=...>`
	Polyline(&'static str),
	/// `<polygon points=...>`
	Polygon(&'static str),
	/// `<rect>` with equal corner radii
	Rect {
		/// Left edge
		x: f64,
		/// Top edge
		y: f64,
		/// Width
		width: f64,
		/// Height
		height: f64,
		/// Corner radius
		r: f64,
	},
}

/// Shorthand for a [`Shape::Circle`]. Expands to a struct literal, which
/// keeps the shape tables below promotable to `'static`.
macro_rules! circle {
	($cx:expr, $cy:expr, $r:expr) => {
		Shape::Circle {
			cx: $cx,
			cy: $cy,
			r: $r,
		}
	};
}

/// Shorthand for a [`Shape::Line`].
macro_rules! segment {
	($x1:expr, $y1:expr, $x2:expr, $y2:expr) => {
		Shape::Line {
			x1: $x1,
			y1: $y1,
			x2: $x2,
			y2: $y2,
		}
	};
}

/// Shorthand for a [`Shape::Rect`].
macro_rules! rect {
	($x:expr, $y:expr, $width:expr, $height:expr, $r:expr) => {
		Shape::Rect {
			x: $x,
			y: $y,
			width: $width,
			height: $height,
			r: $r,
		}
	};
}

/// The kind of icon to display. The geometry is taken directly from the
/// Feather icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum IconType {
	/// <https://feathericons.com/?query=activity>
	Activity,
	/// <https://feathericons.com/?query=alert-circle>
	AlertCircle,
	/// <https://feathericons.com/?query=alert-triangle>
	AlertTriangle,
	/// <https://feathericons.com/?query=arrow-down>
	ArrowDown,
	/// <https://feathericons.com/?query=arrow-left>
	ArrowLeft,
	/// <https://feathericons.com/?query=arrow-right>
	ArrowRight,
	/// <https://feathericons.com/?query=arrow-up>
	ArrowUp,
	/// <https://feathericons.com/?query=check-circle>
	CheckCircle,
	/// <https://feathericons.com/?query=check>
	Check,
	/// <https://feathericons.com/?query=chevron-down>
	ChevronDown,
	/// <https://feathericons.com/?query=chevron-left>
	ChevronLeft,
	/// <https://feathericons.com/?query=chevron-right>
	ChevronRight,
	/// <https://feathericons.com/?query=chevron-up>
	ChevronUp,
	/// <https://feathericons.com/?query=circle>
	Circle,
	/// <https://feathericons.com/?query=clock>
	Clock,
	/// <https://feathericons.com/?query=copy>
	Copy,
	/// <https://feathericons.com/?query=database>
	Database,
	/// <https://feathericons.com/?query=download>
	Download,
	/// <https://feathericons.com/?query=edit-2>
	Edit2,
	/// <https://feathericons.com/?query=external-link>
	ExternalLink,
	/// <https://feathericons.com/?query=eye>
	Eye,
	/// <https://feathericons.com/?query=file>
	File,
	/// <https://feathericons.com/?query=folder>
	Folder,
	/// <https://feathericons.com/?query=help-circle>
	HelpCircle,
	/// <https://feathericons.com/?query=home>
	Home,
	/// <https://feathericons.com/?query=info>
	Info,
	/// <https://feathericons.com/?query=lock>
	Lock,
	/// <https://feathericons.com/?query=menu>
	Menu,
	/// <https://feathericons.com/?query=minus>
	Minus,
	/// <https://feathericons.com/?query=more-horizontal>
	MoreHorizontal,
	/// <https://feathericons.com/?query=plus>
	Plus,
	/// <https://feathericons.com/?query=search>
	Search,
	/// <https://feathericons.com/?query=server>
	Server,
	/// <https://feathericons.com/?query=star>
	Star,
	/// <https://feathericons.com/?query=trash-2>
	Trash2,
	/// <https://feathericons.com/?query=upload>
	Upload,
	/// <https://feathericons.com/?query=user>
	User,
	/// <https://feathericons.com/?query=x-circle>
	XCircle,
	/// <https://feathericons.com/?query=x>
	X,
	/// <https://feathericons.com/?query=zap>
	Zap,
}

impl Display for IconType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_name())
	}
}

impl IconType {
	/// The Feather name of the icon.
	pub const fn as_name(self) -> &'static str {
		match self {
			Self::Activity => "activity",
			Self::AlertCircle => "alert-circle",
			Self::AlertTriangle => "alert-triangle",
			Self::ArrowDown => "arrow-down",
			Self::ArrowLeft => "arrow-left",
			Self::ArrowRight => "arrow-right",
			Self::ArrowUp => "arrow-up",
			Self::CheckCircle => "check-circle",
			Self::Check => "check",
			Self::ChevronDown => "chevron-down",
			Self::ChevronLeft => "chevron-left",
			Self::ChevronRight => "chevron-right",
			Self::ChevronUp => "chevron-up",
			Self::Circle => "circle",
			Self::Clock => "clock",
			Self::Copy => "copy",
			Self::Database => "database",
			Self::Download => "download",
			Self::Edit2 => "edit-2",
			Self::ExternalLink => "external-link",
			Self::Eye => "eye",
			Self::File => "file",
			Self::Folder => "folder",
			Self::HelpCircle => "help-circle",
			Self::Home => "home",
			Self::Info => "info",
			Self::Lock => "lock",
			Self::Menu => "menu",
			Self::Minus => "minus",
			Self::MoreHorizontal => "more-horizontal",
			Self::Plus => "plus",
			Self::Search => "search",
			Self::Server => "server",
			Self::Star => "star",
			Self::Trash2 => "trash-2",
			Self::Upload => "upload",
			Self::User => "user",
			Self::XCircle => "x-circle",
			Self::X => "x",
			Self::Zap => "zap",
		}
	}

	/// The shapes the icon is drawn with.
	pub const fn shapes(self) -> &'static [Shape] {
		use Shape::{Ellipse, Path, Polygon, Polyline};

		match self {
			Self::Activity => &[Polyline("22 12 18 12 15 21 9 3 6 12 2 12")],
			Self::AlertCircle => &[
				circle!(12., 12., 10.),
				segment!(12., 8., 12., 12.),
				segment!(12., 16., 12.01, 16.),
			],
			Self::AlertTriangle => &[
				Path("M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"),
				segment!(12., 9., 12., 13.),
				segment!(12., 17., 12.01, 17.),
			],
			Self::ArrowDown => &[segment!(12., 5., 12., 19.), Polyline("19 12 12 19 5 12")],
			Self::ArrowLeft => &[segment!(19., 12., 5., 12.), Polyline("12 19 5 12 12 5")],
			Self::ArrowRight => &[segment!(5., 12., 19., 12.), Polyline("12 5 19 12 12 19")],
			Self::ArrowUp => &[segment!(12., 19., 12., 5.), Polyline("5 12 12 5 19 12")],
			Self::CheckCircle => &[
				Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
				Polyline("22 4 12 14.01 9 11.01"),
			],
			Self::Check => &[Polyline("20 6 9 17 4 12")],
			Self::ChevronDown => &[Polyline("6 9 12 15 18 9")],
			Self::ChevronLeft => &[Polyline("15 18 9 12 15 6")],
			Self::ChevronRight => &[Polyline("9 18 15 12 9 6")],
			Self::ChevronUp => &[Polyline("18 15 12 9 6 15")],
			Self::Circle => &[circle!(12., 12., 10.)],
			Self::Clock => &[circle!(12., 12., 10.), Polyline("12 6 12 12 16 14")],
			Self::Copy => &[
				rect!(9., 9., 13., 13., 2.),
				Path("M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"),
			],
			Self::Database => &[
				Ellipse {
					cx: 12.,
					cy: 5.,
					rx: 9.,
					ry: 3.,
				},
				Path("M21 12c0 1.66-4 3-9 3s-9-1.34-9-3"),
				Path("M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"),
			],
			Self::Download => &[
				Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
				Polyline("7 10 12 15 17 10"),
				segment!(12., 15., 12., 3.),
			],
			Self::Edit2 => &[Path("M17 3a2.828 2.828 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5L17 3z")],
			Self::ExternalLink => &[
				Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
				Polyline("15 3 21 3 21 9"),
				segment!(10., 14., 21., 3.),
			],
			Self::Eye => &[
				Path("M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"),
				circle!(12., 12., 3.),
			],
			Self::File => &[
				Path("M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z"),
				Polyline("13 2 13 9 20 9"),
			],
			Self::Folder => &[Path(
				"M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z",
			)],
			Self::HelpCircle => &[
				circle!(12., 12., 10.),
				Path("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"),
				segment!(12., 17., 12.01, 17.),
			],
			Self::Home => &[
				Path("M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
				Polyline("9 22 9 12 15 12 15 22"),
			],
			Self::Info => &[
				circle!(12., 12., 10.),
				segment!(12., 16., 12., 12.),
				segment!(12., 8., 12.01, 8.),
			],
			Self::Lock => &[
				rect!(3., 11., 18., 11., 2.),
				Path("M7 11V7a5 5 0 0 1 10 0v4"),
			],
			Self::Menu => &[
				segment!(3., 12., 21., 12.),
				segment!(3., 6., 21., 6.),
				segment!(3., 18., 21., 18.),
			],
			Self::Minus => &[segment!(5., 12., 19., 12.)],
			Self::MoreHorizontal => &[
				circle!(12., 12., 1.),
				circle!(19., 12., 1.),
				circle!(5., 12., 1.),
			],
			Self::Plus => &[segment!(12., 5., 12., 19.), segment!(5., 12., 19., 12.)],
			Self::Search => &[circle!(11., 11., 8.), segment!(21., 21., 16.65, 16.65)],
			Self::Server => &[
				rect!(2., 2., 20., 8., 2.),
				rect!(2., 14., 20., 8., 2.),
				segment!(6., 6., 6.01, 6.),
				segment!(6., 18., 6.01, 18.),
			],
			Self::Star => &[Polygon(
				"12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
			)],
			Self::Trash2 => &[
				Polyline("3 6 5 6 21 6"),
				Path("M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"),
				segment!(10., 11., 10., 17.),
				segment!(14., 11., 14., 17.),
			],
			Self::Upload => &[
				Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
				Polyline("17 8 12 3 7 8"),
				segment!(12., 3., 12., 15.),
			],
			Self::User => &[
				Path("M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"),
				circle!(12., 7., 4.),
			],
			Self::XCircle => &[
				circle!(12., 12., 10.),
				segment!(15., 9., 9., 15.),
				segment!(9., 9., 15., 15.),
			],
			Self::X => &[segment!(18., 6., 6., 18.), segment!(6., 6., 18., 18.)],
			Self::Zap => &[Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
		}
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;

	use strum::IntoEnumIterator;

	use super::{IconType, Shape};

	/// Every coordinate a shape is given as a number.
	fn coordinates(shape: &Shape) -> Vec<f64> {
		match *shape {
			Shape::Circle { cx, cy, r } => vec![cx - r, cy - r, cx + r, cy + r],
			Shape::Ellipse { cx, cy, rx, ry } => vec![cx - rx, cy - ry, cx + rx, cy + ry],
			Shape::Line { x1, y1, x2, y2 } => vec![x1, y1, x2, y2],
			Shape::Rect {
				x,
				y,
				width,
				height,
				..
			} => vec![x, y, x + width, y + height],
			Shape::Polyline(points) | Shape::Polygon(points) => points
				.split_whitespace()
				.map(|point| point.parse().unwrap())
				.collect(),
			Shape::Path(_) => vec![],
		}
	}

	#[test]
	fn every_icon_has_geometry() {
		for icon in IconType::iter() {
			assert!(!icon.shapes().is_empty(), "{icon} has no shapes");
		}
	}

	#[test]
	fn geometry_stays_inside_the_view_box() {
		for icon in IconType::iter() {
			for coordinate in icon.shapes().iter().flat_map(coordinates) {
				assert!(
					(0. ..=24.).contains(&coordinate),
					"{icon} has a coordinate outside the view box: {coordinate}"
				);
			}
		}
	}

	#[test]
	fn names_are_unique_kebab_case() {
		let names = IconType::iter().map(IconType::as_name).collect::<HashSet<_>>();
		assert_eq!(names.len(), IconType::iter().count());

		for name in names {
			assert!(name
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
		}
		assert_eq!(IconType::Trash2.to_string(), "trash-2");
	}
}
