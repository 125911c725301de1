use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// All size tokens a theme can carry a value for. Serialised by the short
/// name used in the theme's token tables.
#[derive(
	Debug,
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
	EnumIter,
)]
pub enum Size {
	/// XXS
	#[serde(rename = "xxs")]
	ExtraExtraSmall,
	/// XS
	#[serde(rename = "xs")]
	ExtraSmall,
	/// SM
	#[serde(rename = "sm")]
	Small,
	/// MD - This is the default.
	#[default]
	#[serde(rename = "md")]
	Medium,
	/// LG
	#[serde(rename = "lg")]
	Large,
	/// XL
	#[serde(rename = "xl")]
	ExtraLarge,
	/// XXL
	#[serde(rename = "xxl")]
	ExtraExtraLarge,
}

impl Display for Size {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_css_name())
	}
}

impl Size {
	/// Returns the short name of the size, as used in class names and in the
	/// theme's token tables.
	pub const fn as_css_name(&self) -> &'static str {
		match self {
			ExtraExtraSmall => "xxs",
			ExtraSmall => "xs",
			Small => "sm",
			Medium => "md",
			Large => "lg",
			ExtraLarge => "xl",
			ExtraExtraLarge => "xxl",
		}
	}
}

pub use Size::*;

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};
	use strum::IntoEnumIterator;

	use super::Size;

	#[test]
	fn assert_size_tokens() {
		assert_tokens(
			&Size::Medium,
			&[Token::UnitVariant {
				name: "Size",
				variant: "md",
			}],
		);
		assert_tokens(
			&Size::ExtraExtraLarge,
			&[Token::UnitVariant {
				name: "Size",
				variant: "xxl",
			}],
		);
	}

	#[test]
	fn display_matches_serialised_name() {
		for size in Size::iter() {
			assert_eq!(
				serde_json::to_string(&size).unwrap(),
				format!("\"{size}\"")
			);
		}
	}

	#[test]
	fn sizes_are_ordered_small_to_large() {
		let sizes = Size::iter().collect::<Vec<_>>();
		let mut sorted = sizes.clone();
		sorted.sort();
		assert_eq!(sizes, sorted);
		assert_eq!(sizes.first(), Some(&Size::ExtraExtraSmall));
		assert_eq!(sizes.last(), Some(&Size::ExtraExtraLarge));
	}
}
