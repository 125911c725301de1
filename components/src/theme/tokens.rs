use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::imports::*;

/// The design tokens every component reads from. All values are treated as
/// read-only lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
	/// Pixel size of an icon for each size token
	pub icon_sizes: BTreeMap<Size, f64>,
	/// The color palette
	pub colors: Colors,
	/// Spacing scale, as CSS lengths
	pub spaces: BTreeMap<Size, String>,
	/// Font size scale, smallest first
	pub sizes: Vec<String>,
	/// Box shadows, as CSS values
	pub shadows: BTreeMap<Size, String>,
	/// Border radii, as CSS lengths
	pub radii: BTreeMap<Size, String>,
}

/// The colors of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
	/// Text colors
	pub text: TextColors,
	/// Raw palette the other colors are picked from
	pub palette: Palette,
}

/// Colors used for text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
	/// Body text. Icons are stroked with this unless told otherwise.
	pub default: String,
	/// Secondary text
	pub muted: String,
}

/// The palette of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
	/// Greys
	pub neutral: Shades,
}

/// Light to dark variants of a single hue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shades {
	/// Lightest shade
	pub light: String,
	/// Middle shade
	pub base: String,
	/// Darkest shade. Tooltips are drawn in this.
	pub dark: String,
}

impl Default for Theme {
	fn default() -> Self {
		fn table<T: Clone>(values: &[(Size, T)]) -> BTreeMap<Size, T> {
			values.iter().cloned().collect()
		}

		Self {
			icon_sizes: table(&[
				(ExtraExtraSmall, 10.),
				(ExtraSmall, 12.),
				(Small, 16.),
				(Medium, 20.),
				(Large, 24.),
				(ExtraLarge, 32.),
				(ExtraExtraLarge, 48.),
			]),
			colors: Colors {
				text: TextColors {
					default: "#1f2933".to_string(),
					muted: "#616e7c".to_string(),
				},
				palette: Palette {
					neutral: Shades {
						light: "#e4e7eb".to_string(),
						base: "#9aa5b1".to_string(),
						dark: "#323f4b".to_string(),
					},
				},
			},
			spaces: table(&[
				(ExtraExtraSmall, "0.125rem".to_string()),
				(ExtraSmall, "0.25rem".to_string()),
				(Small, "0.5rem".to_string()),
				(Medium, "0.75rem".to_string()),
				(Large, "1rem".to_string()),
				(ExtraLarge, "1.5rem".to_string()),
				(ExtraExtraLarge, "2rem".to_string()),
			]),
			sizes: ["0.75rem", "0.875rem", "1rem", "1.25rem", "1.5rem", "2rem"]
				.map(String::from)
				.to_vec(),
			shadows: table(&[
				(Small, "0 1px 2px rgba(0, 0, 0, 0.12)".to_string()),
				(Medium, "0 3px 6px rgba(0, 0, 0, 0.16)".to_string()),
				(Large, "0 10px 20px rgba(0, 0, 0, 0.19)".to_string()),
			]),
			radii: table(&[
				(Small, "0.25rem".to_string()),
				(Medium, "0.5rem".to_string()),
				(Large, "1rem".to_string()),
			]),
		}
	}
}

impl Theme {
	/// Loads a theme from a JSON document, layered over the default theme.
	/// Objects are merged key by key, so a document only needs to carry the
	/// tokens it changes. Any other value replaces the default outright.
	pub fn from_json(json: &str) -> Result<Self, ThemeError> {
		let overrides = serde_json::from_str::<Value>(json).map_err(ThemeError::Parse)?;
		if !overrides.is_object() {
			return Err(ThemeError::NotAnObject);
		}

		let mut theme = serde_json::to_value(Self::default()).map_err(ThemeError::Invalid)?;
		merge(&mut theme, overrides);

		serde_json::from_value(theme).map_err(ThemeError::Invalid)
	}

	/// Pixel size of an icon for the given token. A token missing from this
	/// theme falls back to the default theme's value.
	pub fn icon_size(&self, size: Size) -> f64 {
		if let Some(pixels) = self.icon_sizes.get(&size) {
			return *pixels;
		}

		warn!("icon size `{size}` is missing from the theme, using the default");
		Self::default()
			.icon_sizes
			.get(&size)
			.copied()
			.unwrap_or_default()
	}

	/// Spacing for the given token, falling back to the default theme.
	pub fn space(&self, size: Size) -> String {
		lookup(&self.spaces, size, "space", |theme| &theme.spaces)
	}

	/// Box shadow for the given token, falling back to the default theme.
	pub fn shadow(&self, size: Size) -> String {
		lookup(&self.shadows, size, "shadow", |theme| &theme.shadows)
	}

	/// Border radius for the given token, falling back to the default theme.
	pub fn radius(&self, size: Size) -> String {
		lookup(&self.radii, size, "radius", |theme| &theme.radii)
	}

	/// Font size at the given step of the scale, falling back to the default
	/// theme and finally to `1rem`.
	pub fn font_size(&self, step: usize) -> String {
		self.sizes
			.get(step)
			.cloned()
			.or_else(|| {
				warn!("font size {step} is missing from the theme, using the default");
				Self::default().sizes.get(step).cloned()
			})
			.unwrap_or_else(|| "1rem".to_string())
	}
}

/// Looks up a token, falling back to the default theme's table.
fn lookup(
	table: &BTreeMap<Size, String>,
	size: Size,
	kind: &str,
	default_table: impl FnOnce(&Theme) -> &BTreeMap<Size, String>,
) -> String {
	if let Some(value) = table.get(&size) {
		return value.clone();
	}

	warn!("{kind} `{size}` is missing from the theme, using the default");
	default_table(&Theme::default())
		.get(&size)
		.cloned()
		.unwrap_or_default()
}

/// Merges `overrides` into `base`.
fn merge(base: &mut Value, overrides: Value) {
	match (base, overrides) {
		(Value::Object(base), Value::Object(overrides)) => {
			for (key, value) in overrides {
				merge(base.entry(key).or_insert(Value::Null), value);
			}
		}
		(base, overrides) => *base = overrides,
	}
}
