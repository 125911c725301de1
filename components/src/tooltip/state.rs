use super::TooltipId;

/// Events on the trigger element that drive a tooltip's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
	/// The pointer entered the trigger
	PointerEnter,
	/// The pointer left the trigger
	PointerLeave,
	/// The trigger received focus
	Focus,
	/// The trigger lost focus
	Blur,
}

impl TriggerEvent {
	/// Whether the event asks for the tooltip to be shown.
	pub const fn shows(self) -> bool {
		matches!(self, Self::PointerEnter | Self::Focus)
	}
}

/// The state of a single tooltip instance: hidden or visible, plus the id
/// that links the floating element back to its trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipState {
	id: TooltipId,
	visible: bool,
	transitions: usize,
}

/// Attributes written onto the trigger element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAttrs {
	/// Value of `aria-describedby`
	pub aria_describedby: TooltipId,
}

impl TriggerAttrs {
	/// The attributes to set on the trigger once it is mounted. When the
	/// tooltip wraps an element, that element is the trigger and gets
	/// described. Otherwise the wrapper itself is described and made
	/// focusable, so keyboard users can still reach the tooltip.
	pub fn to_attributes(&self, wraps_element: bool) -> Vec<(&'static str, String)> {
		let mut attributes = vec![("aria-describedby", self.aria_describedby.to_string())];
		if !wraps_element {
			attributes.push(("tabindex", String::from("0")));
		}
		attributes
	}
}

/// Attributes written onto the floating element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingAttrs {
	/// Value of `id`
	pub id: TooltipId,
	/// Value of `role`
	pub role: &'static str,
}

impl TooltipState {
	/// A hidden tooltip with the given id.
	pub fn new(id: TooltipId) -> Self {
		Self {
			id,
			visible: false,
			transitions: 0,
		}
	}

	/// Applies a trigger event. Returns whether the visibility changed.
	pub fn apply(&mut self, event: TriggerEvent) -> bool {
		if event.shows() {
			self.show()
		} else {
			self.hide()
		}
	}

	/// Shows the tooltip. Does nothing if it is already visible.
	pub fn show(&mut self) -> bool {
		if self.visible {
			return false;
		}

		self.visible = true;
		self.transitions += 1;
		true
	}

	/// Hides the tooltip. Does nothing if it is already hidden.
	pub fn hide(&mut self) -> bool {
		if !self.visible {
			return false;
		}

		self.visible = false;
		self.transitions += 1;
		true
	}

	/// Whether the tooltip is currently shown.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Number of show/hide transitions applied so far.
	pub fn transitions(&self) -> usize {
		self.transitions
	}

	/// The id of this tooltip.
	pub fn id(&self) -> &TooltipId {
		&self.id
	}

	/// Attributes for the trigger element.
	pub fn trigger_attrs(&self) -> TriggerAttrs {
		TriggerAttrs {
			aria_describedby: self.id.clone(),
		}
	}

	/// Attributes for the floating element.
	pub fn floating_attrs(&self) -> FloatingAttrs {
		FloatingAttrs {
			id: self.id.clone(),
			role: "tooltip",
		}
	}
}

#[cfg(test)]
mod test {
	use super::{TooltipState, TriggerEvent};
	use crate::tooltip::IdSequence;

	fn tooltip() -> TooltipState {
		TooltipState::new(IdSequence::default().next_id())
	}

	#[test]
	fn enter_then_leave() {
		let mut state = tooltip();
		let mut seen = vec![state.is_visible()];

		for event in [TriggerEvent::PointerEnter, TriggerEvent::PointerLeave] {
			state.apply(event);
			seen.push(state.is_visible());
		}

		assert_eq!(seen, [false, true, false]);
		assert_eq!(state.transitions(), 2);
	}

	#[test]
	fn redundant_enter_is_a_no_op() {
		let mut state = tooltip();
		assert!(state.apply(TriggerEvent::PointerEnter));
		assert!(!state.apply(TriggerEvent::PointerEnter));
		assert!(!state.apply(TriggerEvent::Focus));

		assert!(state.is_visible());
		assert_eq!(state.transitions(), 1);
	}

	#[test]
	fn redundant_hide_is_a_no_op() {
		let mut state = tooltip();
		assert!(!state.apply(TriggerEvent::Blur));
		assert!(!state.apply(TriggerEvent::PointerLeave));

		assert!(!state.is_visible());
		assert_eq!(state.transitions(), 0);
	}

	#[test]
	fn focus_and_pointer_share_the_flag() {
		let mut state = tooltip();
		state.apply(TriggerEvent::Focus);
		assert!(state.is_visible());

		// leaving with the pointer hides even though focus was what showed it
		state.apply(TriggerEvent::PointerLeave);
		assert!(!state.is_visible());

		state.apply(TriggerEvent::PointerEnter);
		state.apply(TriggerEvent::Blur);
		assert!(!state.is_visible());
		assert_eq!(state.transitions(), 4);
	}

	#[test]
	fn both_ends_carry_the_same_id() {
		let state = tooltip();
		let trigger = state.trigger_attrs();
		let floating = state.floating_attrs();

		assert_eq!(trigger.aria_describedby, floating.id);
		assert_eq!(&floating.id, state.id());
		assert_eq!(floating.role, "tooltip");
	}

	#[test]
	fn wrapped_element_is_described_without_becoming_focusable() {
		let state = tooltip();
		let attributes = state.trigger_attrs().to_attributes(true);

		assert_eq!(
			attributes,
			[("aria-describedby", state.floating_attrs().id.to_string())]
		);
	}

	#[test]
	fn text_trigger_becomes_focusable() {
		let state = tooltip();
		let attributes = state.trigger_attrs().to_attributes(false);

		assert_eq!(
			attributes,
			[
				("aria-describedby", String::from("tooltip-0")),
				("tabindex", String::from("0")),
			]
		);
	}
}
