use crate::imports::*;

/// How big an icon is drawn: a token looked up in the theme's icon sizes, or
/// an explicit size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconSize {
	/// A size token, resolved through the theme
	Token(Size),
	/// A size in pixels
	Pixels(f64),
}

impl Default for IconSize {
	fn default() -> Self {
		Self::Token(Size::Medium)
	}
}

impl From<Size> for IconSize {
	fn from(size: Size) -> Self {
		Self::Token(size)
	}
}

impl From<f64> for IconSize {
	fn from(pixels: f64) -> Self {
		Self::Pixels(pixels)
	}
}

impl From<u32> for IconSize {
	fn from(pixels: u32) -> Self {
		Self::Pixels(pixels.into())
	}
}

impl From<i32> for IconSize {
	fn from(pixels: i32) -> Self {
		Self::Pixels(pixels.into())
	}
}

impl IconSize {
	/// The size in pixels under the given theme.
	pub fn resolve(self, theme: &Theme) -> f64 {
		match self {
			Self::Token(size) => theme.icon_size(size),
			Self::Pixels(pixels) => pixels,
		}
	}
}

/// The themed attributes of an icon's `<svg>` root.
#[derive(Debug, Clone, PartialEq)]
pub struct IconAttrs {
	/// `width`, in pixels
	pub width: f64,
	/// `height`, always equal to the width
	pub height: f64,
	/// `stroke`
	pub stroke: String,
}

impl IconAttrs {
	/// Resolves the size and stroke of an icon. Without a color the icon is
	/// stroked in the theme's default text color.
	pub fn resolve(theme: &Theme, size: IconSize, color: Option<&str>) -> Self {
		let width = size.resolve(theme);
		Self {
			width,
			height: width,
			stroke: color
				.map(str::to_string)
				.unwrap_or_else(|| theme.colors.text.default.clone()),
		}
	}
}

/// Renders a single shape of an icon.
fn render_shape(shape: &Shape) -> View {
	match *shape {
		Shape::Path(d) => view! { <path d=d></path> }.into_view(),
		Shape::Circle { cx, cy, r } => view! { <circle cx=cx cy=cy r=r></circle> }.into_view(),
		Shape::Ellipse { cx, cy, rx, ry } => {
			view! { <ellipse cx=cx cy=cy rx=rx ry=ry></ellipse> }.into_view()
		}
		Shape::Line { x1, y1, x2, y2 } => {
			view! { <line x1=x1 y1=y1 x2=x2 y2=y2></line> }.into_view()
		}
		Shape::Polyline(points) => view! { <polyline points=points></polyline> }.into_view(),
		Shape::Polygon(points) => view! { <polygon points=points></polygon> }.into_view(),
		Shape::Rect {
			x,
			y,
			width,
			height,
			r,
		} => view! {
			<rect x=x y=y width=width height=height rx=r ry=r></rect>
		}
		.into_view(),
	}
}

/// Renders an icon under the theme in context. Shared by [`Icon`] and the
/// named icon components.
pub(super) fn render_icon(
	icon: IconType,
	size: IconSize,
	color: Option<String>,
	class: String,
	attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
	let theme = use_theme();
	let IconAttrs {
		width,
		height,
		stroke,
	} = IconAttrs::resolve(&theme, size, color.as_deref());

	view! {
		<svg
			xmlns="http://www.w3.org/2000/svg"
			class=format!("icon icon-{icon} {class}")
			width=width
			height=height
			viewBox="0 0 24 24"
			fill="none"
			stroke=stroke
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			{..attributes}
		>
			{icon.shapes().iter().map(render_shape).collect_view()}
		</svg>
	}
}

/// Icon component. Draws one of the Feather icons, sized and stroked from
/// the theme.
#[component]
pub fn Icon(
	/// The icon to display
	icon: IconType,
	/// Size token or size in pixels. Defaults to the `md` token
	#[prop(into, optional)]
	size: IconSize,
	/// Stroke color. Defaults to the theme's default text color
	#[prop(into, optional)]
	color: Option<String>,
	/// Class names to add to the icon
	#[prop(into, optional)]
	class: String,
	/// Any other attributes, passed through to the `<svg>` element
	#[prop(attrs)]
	attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
	render_icon(icon, size, color, class, attributes)
}

#[cfg(test)]
mod test {
	use strum::IntoEnumIterator;

	use super::{IconAttrs, IconSize};
	use crate::{theme::Theme, utils::Size};

	#[test]
	fn token_sizes_come_from_the_theme() {
		let theme = Theme::default();
		for size in Size::iter() {
			let attrs = IconAttrs::resolve(&theme, size.into(), None);
			assert_eq!(attrs.width, theme.icon_sizes[&size]);
			assert_eq!(attrs.height, attrs.width);
		}
	}

	#[test]
	fn token_sizes_follow_a_custom_theme() {
		let theme = Theme::from_json(r#"{ "iconSizes": { "lg": 28 } }"#).unwrap();
		let attrs = IconAttrs::resolve(&theme, Size::Large.into(), None);
		assert_eq!((attrs.width, attrs.height), (28., 28.));
	}

	#[test]
	fn explicit_sizes_are_used_as_is() {
		let theme = Theme::default();
		let attrs = IconAttrs::resolve(&theme, 37u32.into(), None);
		assert_eq!((attrs.width, attrs.height), (37., 37.));
		assert_eq!(IconSize::from(12.5).resolve(&theme), 12.5);
	}

	#[test]
	fn default_size_is_medium() {
		let theme = Theme::default();
		assert_eq!(
			IconSize::default().resolve(&theme),
			theme.icon_size(Size::Medium)
		);
	}

	#[test]
	fn stroke_defaults_to_text_color() {
		let theme = Theme::default();
		let attrs = IconAttrs::resolve(&theme, IconSize::default(), None);
		assert_eq!(attrs.stroke, theme.colors.text.default);
	}

	#[test]
	fn supplied_stroke_is_used_exactly() {
		let theme = Theme::default();
		for color in ["red", "#FF00aa", "rgb(1, 2, 3)", "currentColor"] {
			let attrs = IconAttrs::resolve(&theme, IconSize::default(), Some(color));
			assert_eq!(attrs.stroke, color);
		}
	}
}
