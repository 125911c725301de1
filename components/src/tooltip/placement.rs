use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The side of the trigger a tooltip is drawn on.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
	/// Above the trigger. This is the default.
	#[default]
	Top,
	/// Below the trigger
	Bottom,
	/// Left of the trigger
	Left,
	/// Right of the trigger
	Right,
}

impl Display for Placement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_css_name())
	}
}

impl Placement {
	/// The value written into `data-placement`.
	pub const fn as_css_name(self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Bottom => "bottom",
			Self::Left => "left",
			Self::Right => "right",
		}
	}

	/// The placement on the other side of the trigger.
	pub const fn opposite(self) -> Self {
		match self {
			Self::Top => Self::Bottom,
			Self::Bottom => Self::Top,
			Self::Left => Self::Right,
			Self::Right => Self::Left,
		}
	}

	/// Whether the tooltip sits above or below the trigger.
	pub const fn is_vertical(self) -> bool {
		matches!(self, Self::Top | Self::Bottom)
	}
}

/// Size of the arrow's triangle, in em.
const ARROW_SIZE: &str = "0.25em";

/// Styling of the arrow drawn between a tooltip and its trigger. The arrow
/// is a zero sized box whose one colored border forms a triangle pointing
/// at the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowStyle {
	/// The placement this arrow belongs to
	pub placement: Placement,
	/// The edge of the tooltip the arrow hangs off, as a CSS property
	pub anchor: &'static str,
	/// `border-width`, in top, right, bottom, left order
	pub border_width: [&'static str; 4],
	/// `border-color`, in top, right, bottom, left order. Exactly one of
	/// these is not `transparent`.
	pub border_color: [String; 4],
}

impl ArrowStyle {
	/// The arrow for a tooltip resolved to `placement`, drawn in `color`.
	pub fn for_placement(placement: Placement, color: &str) -> Self {
		let edge = Self::colored_edge(placement);
		let mut border_width = [ARROW_SIZE; 4];
		// the edge opposite the colored one collapses to turn the box into a
		// triangle
		border_width[(edge + 2) % 4] = "0";
		let border_color = [0, 1, 2, 3].map(|index| {
			if index == edge {
				color.to_string()
			} else {
				"transparent".to_string()
			}
		});

		Self {
			placement,
			anchor: match placement {
				Placement::Top => "top",
				Placement::Bottom => "bottom",
				Placement::Left => "left",
				Placement::Right => "right",
			},
			border_width,
			border_color,
		}
	}

	/// Index of the colored border, in top, right, bottom, left order. A
	/// tooltip above the trigger points down, so its top border is colored.
	pub const fn colored_edge(placement: Placement) -> usize {
		match placement {
			Placement::Top => 0,
			Placement::Right => 1,
			Placement::Bottom => 2,
			Placement::Left => 3,
		}
	}

	/// Inline style for the arrow. `offset` is the distance in pixels from the
	/// tooltip's start edge on the cross axis to where the arrow should point.
	pub fn to_css(&self, offset: f64) -> String {
		let cross_axis = if self.placement.is_vertical() {
			"left"
		} else {
			"top"
		};

		format!(
			"position: absolute; {}: 100%; {cross_axis}: calc({offset:.2}px - {ARROW_SIZE}); \
			 width: 0; height: 0; border-style: solid; border-width: {}; border-color: {};",
			self.anchor,
			self.border_width.join(" "),
			self.border_color.join(" "),
		)
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;

	use serde_test::{assert_tokens, Token};
	use strum::IntoEnumIterator;

	use super::{ArrowStyle, Placement};

	#[test]
	fn assert_placement_tokens() {
		assert_tokens(
			&Placement::Left,
			&[Token::UnitVariant {
				name: "Placement",
				variant: "left",
			}],
		);
	}

	#[test]
	fn exactly_one_border_is_colored() {
		for placement in Placement::iter() {
			let arrow = ArrowStyle::for_placement(placement, "#323f4b");
			let colored = arrow
				.border_color
				.iter()
				.enumerate()
				.filter(|(_, color)| *color != "transparent")
				.collect::<Vec<_>>();

			assert_eq!(colored.len(), 1, "{placement}");
			assert_eq!(colored[0].0, ArrowStyle::colored_edge(placement));
			assert_eq!(colored[0].1, "#323f4b");
		}
	}

	#[test]
	fn every_placement_has_its_own_orientation() {
		let orientations = Placement::iter()
			.map(|placement| {
				let arrow = ArrowStyle::for_placement(placement, "red");
				(arrow.anchor, arrow.border_width, arrow.border_color)
			})
			.collect::<HashSet<_>>();

		assert_eq!(orientations.len(), 4);
	}

	#[test]
	fn arrow_matches_placement_geometry() {
		let arrow = ArrowStyle::for_placement(Placement::Bottom, "red");
		assert_eq!(arrow.anchor, "bottom");
		assert_eq!(arrow.border_width, ["0", "0.25em", "0.25em", "0.25em"]);
		assert_eq!(
			arrow.border_color,
			["transparent", "transparent", "red", "transparent"].map(String::from)
		);

		let arrow = ArrowStyle::for_placement(Placement::Right, "red");
		assert_eq!(arrow.anchor, "right");
		assert_eq!(arrow.border_width, ["0.25em", "0.25em", "0.25em", "0"]);
		assert_eq!(arrow.border_color[1], "red");
	}

	#[test]
	fn css_places_arrow_on_the_cross_axis() {
		let css = ArrowStyle::for_placement(Placement::Top, "red").to_css(40.);
		assert!(css.contains("top: 100%;"));
		assert!(css.contains("left: calc(40.00px - 0.25em);"));
		assert!(css.contains("border-color: red transparent transparent transparent;"));

		let css = ArrowStyle::for_placement(Placement::Left, "red").to_css(12.5);
		assert!(css.contains("left: 100%;"));
		assert!(css.contains("top: calc(12.50px - 0.25em);"));
	}

	#[test]
	fn opposite_is_an_involution() {
		for placement in Placement::iter() {
			assert_ne!(placement.opposite(), placement);
			assert_eq!(placement.opposite().opposite(), placement);
			assert_eq!(placement.opposite().is_vertical(), placement.is_vertical());
		}
	}
}
