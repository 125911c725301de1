use thiserror::Error as ThisError;

/// Errors that can occur while loading a theme from a JSON document.
#[derive(ThisError, Debug)]
pub enum ThemeError {
	/// The document is not valid JSON
	#[error("unable to parse theme document: {0}")]
	Parse(#[source] serde_json::Error),
	/// The document parsed, but its top level is not a JSON object
	#[error("theme document must be a JSON object")]
	NotAnObject,
	/// The document merged over the default theme does not have the shape of
	/// a theme, for example a color given as a number
	#[error("invalid theme: {0}")]
	Invalid(#[source] serde_json::Error),
}
