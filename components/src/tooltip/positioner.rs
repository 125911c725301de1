use super::Placement;

/// A rectangle in viewport coordinates, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
	/// Distance from the top of the viewport
	pub top: f64,
	/// Distance from the left of the viewport
	pub left: f64,
	/// Width of the rectangle
	pub width: f64,
	/// Height of the rectangle
	pub height: f64,
}

impl Rect {
	/// Right edge of the rectangle.
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	/// Bottom edge of the rectangle.
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// Horizontal centre of the rectangle.
	pub fn center_x(&self) -> f64 {
		self.left + self.width / 2.
	}

	/// Vertical centre of the rectangle.
	pub fn center_y(&self) -> f64 {
		self.top + self.height / 2.
	}
}

/// Width and height, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
	/// Width
	pub width: f64,
	/// Height
	pub height: f64,
}

/// Where a tooltip is drawn, as resolved by a [`PositionResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
	/// The side of the trigger the tooltip ended up on. This may differ from
	/// the requested placement.
	pub placement: Placement,
	/// Top edge of the tooltip in viewport coordinates
	pub top: f64,
	/// Left edge of the tooltip in viewport coordinates
	pub left: f64,
	/// Distance from the tooltip's start edge on the cross axis to the point
	/// the arrow should point at
	pub arrow_offset: f64,
}

impl Position {
	/// The position before anything has been measured.
	pub fn unresolved(placement: Placement) -> Self {
		Self {
			placement,
			..Self::default()
		}
	}

	/// Inline style placing the tooltip.
	pub fn to_css(&self) -> String {
		format!(
			"position: fixed; top: {:.2}px; left: {:.2}px;",
			self.top, self.left
		)
	}
}

/// Resolves where a floating element is drawn relative to the element it is
/// anchored to.
pub trait PositionResolver {
	/// Places a `floating` box next to `trigger`, preferably on the `hint`
	/// side. `viewport` is the size of the visible area, when it is known.
	fn resolve(
		&self,
		trigger: Rect,
		floating: Dimensions,
		hint: Placement,
		viewport: Option<Dimensions>,
	) -> Position;
}

/// Places the tooltip centred on the trigger's cross axis, `gap` pixels away
/// from the requested side. If the requested side overflows the viewport and
/// the opposite side does not, the tooltip flips. It is never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredPositioner {
	/// Space between the trigger and the tooltip, in pixels
	pub gap: f64,
}

impl Default for AnchoredPositioner {
	fn default() -> Self {
		Self { gap: 8. }
	}
}

impl AnchoredPositioner {
	/// Top-left corner of the floating box on the given side.
	fn place(&self, trigger: Rect, floating: Dimensions, placement: Placement) -> (f64, f64) {
		let centred_left = trigger.center_x() - floating.width / 2.;
		let centred_top = trigger.center_y() - floating.height / 2.;

		match placement {
			Placement::Top => (trigger.top - self.gap - floating.height, centred_left),
			Placement::Bottom => (trigger.bottom() + self.gap, centred_left),
			Placement::Left => (centred_top, trigger.left - self.gap - floating.width),
			Placement::Right => (centred_top, trigger.right() + self.gap),
		}
	}

	/// Whether the box fits the viewport on its main axis.
	fn fits(
		(top, left): (f64, f64),
		floating: Dimensions,
		placement: Placement,
		viewport: Dimensions,
	) -> bool {
		match placement {
			Placement::Top => top >= 0.,
			Placement::Bottom => top + floating.height <= viewport.height,
			Placement::Left => left >= 0.,
			Placement::Right => left + floating.width <= viewport.width,
		}
	}
}

impl PositionResolver for AnchoredPositioner {
	fn resolve(
		&self,
		trigger: Rect,
		floating: Dimensions,
		hint: Placement,
		viewport: Option<Dimensions>,
	) -> Position {
		let mut placement = hint;
		let mut corner = self.place(trigger, floating, hint);

		if let Some(viewport) = viewport {
			let flipped = self.place(trigger, floating, hint.opposite());
			if !Self::fits(corner, floating, hint, viewport) &&
				Self::fits(flipped, floating, hint.opposite(), viewport)
			{
				placement = hint.opposite();
				corner = flipped;
			}
		}

		let (top, left) = corner;
		Position {
			placement,
			top,
			left,
			arrow_offset: if placement.is_vertical() {
				trigger.center_x() - left
			} else {
				trigger.center_y() - top
			},
		}
	}
}
