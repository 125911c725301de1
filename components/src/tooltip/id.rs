use std::{
	cell::Cell,
	fmt::{self, Display, Formatter},
	rc::Rc,
};

use uuid::Uuid;

use crate::imports::*;

/// The id linking a tooltip to its trigger through `aria-describedby`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TooltipId(String);

impl TooltipId {
	/// An id that does not come from any sequence. Used when no
	/// [`IdSequence`] has been provided.
	pub fn random() -> Self {
		Self(format!("tooltip-{}", Uuid::new_v4().simple()))
	}

	/// The id as it is written into the DOM.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for TooltipId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A sequence of tooltip ids, shared through context by everything below a
/// [`ThemeProvider`](crate::theme::ThemeProvider). Cloning the sequence
/// shares the counter.
#[derive(Debug, Clone)]
pub struct IdSequence {
	prefix: Rc<str>,
	next: Rc<Cell<u64>>,
}

impl Default for IdSequence {
	fn default() -> Self {
		Self::new("tooltip-")
	}
}

impl IdSequence {
	/// Creates a sequence handing out `{prefix}0`, `{prefix}1`, ...
	pub fn new(prefix: impl Into<Rc<str>>) -> Self {
		Self {
			prefix: prefix.into(),
			next: Rc::new(Cell::new(0)),
		}
	}

	/// A sequence whose prefix no other sequence shares, so that ids from two
	/// unrelated sequences on the same page never collide.
	pub fn unique() -> Self {
		let tag = Uuid::new_v4().simple().to_string();
		Self::new(format!("tooltip-{}-", &tag[..8]))
	}

	/// The prefix every id of this sequence starts with.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Takes the next id off the sequence.
	pub fn next_id(&self) -> TooltipId {
		let next = self.next.get();
		self.next.set(next + 1);

		TooltipId(format!("{}{next}", self.prefix))
	}
}

/// Makes the sequence available to every tooltip below the current owner.
pub fn provide_id_sequence(sequence: IdSequence) {
	provide_context(sequence);
}

/// Takes an id for a new tooltip from the sequence in context, or a random
/// one if no sequence was provided.
pub fn use_tooltip_id() -> TooltipId {
	match use_context::<IdSequence>() {
		Some(sequence) => sequence.next_id(),
		None => {
			let id = TooltipId::random();
			debug!("no id sequence in context, using random tooltip id {id}");
			id
		}
	}
}
