#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Themed Feather icons and an anchored, animated tooltip for Leptos
//! applications.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{icon::*, theme::*, tooltip::*, utils::*};
}

/// Everything the components themselves need in scope.
mod imports {
	pub use leptos::*;
	pub use log::{debug, warn};

	pub use crate::prelude::*;
}

/// The icon components and the geometry of every icon.
pub mod icon;
/// The design tokens, how they are loaded and how they are provided to
/// components.
pub mod theme;
/// The tooltip component along with its state, positioning and animation.
pub mod tooltip;
/// Types shared between components.
pub mod utils;
