use std::rc::Rc;

use crate::imports::*;

/// Makes the given theme available to every component below the current
/// owner.
pub fn provide_theme(theme: Theme) {
	provide_context(Rc::new(theme));
}

/// Returns the theme provided by the nearest [`ThemeProvider`] or
/// [`provide_theme`] call, or the default theme if there is none.
pub fn use_theme() -> Rc<Theme> {
	use_context::<Rc<Theme>>().unwrap_or_else(|| Rc::new(Theme::default()))
}

/// Provides the design tokens and the tooltip id sequence to all of its
/// children.
///
/// Without an `id_prefix` the provider keeps handing out ids from the
/// sequence of an enclosing provider. The outermost provider starts a
/// sequence with a prefix of its own, so sibling providers never give two
/// tooltips the same id.
#[component]
pub fn ThemeProvider(
	/// The theme to provide. Defaults to [`Theme::default`]
	#[prop(optional)]
	theme: Option<Theme>,
	/// Starts a new id sequence with this prefix for the tooltips below this
	/// provider. The prefix has to be unique on the page
	#[prop(into, optional)]
	id_prefix: Option<String>,
	/// The children that get access to the theme
	children: Children,
) -> impl IntoView {
	provide_theme(theme.unwrap_or_default());
	provide_id_sequence(match id_prefix {
		Some(prefix) => IdSequence::new(prefix),
		None => use_context::<IdSequence>().unwrap_or_else(IdSequence::unique),
	});

	children()
}

#[cfg(test)]
mod test {
	use std::{cell::RefCell, rc::Rc};

	use super::{ThemeProvider, ThemeProviderProps};
	use crate::imports::*;

	type Ids = Rc<RefCell<Vec<TooltipId>>>;

	/// Children that take one tooltip id, the way a `Tooltip` would.
	fn take_id(ids: &Ids) -> Children {
		let ids = Rc::clone(ids);
		Box::new(move || {
			ids.borrow_mut().push(use_tooltip_id());
			Fragment::new(vec![])
		})
	}

	/// Mounts a provider under its own owner, like a sibling in the view tree.
	fn mount(id_prefix: Option<&str>, children: Children) {
		let id_prefix = id_prefix.map(String::from);
		let children = RefCell::new(Some(children));
		let mount = as_child_of_current_owner(move |_: ()| {
			let Some(children) = children.borrow_mut().take() else {
				return;
			};
			_ = ThemeProvider(ThemeProviderProps {
				theme: None,
				id_prefix: id_prefix.clone(),
				children,
			});
		});
		mount(());
	}

	fn ids(ids: &Ids) -> Vec<String> {
		ids.borrow().iter().map(ToString::to_string).collect()
	}

	#[test]
	fn sibling_providers_hand_out_distinct_ids() {
		let runtime = create_runtime();
		let taken = Ids::default();

		mount(None, take_id(&taken));
		mount(None, take_id(&taken));

		let ids = ids(&taken);
		assert_eq!(ids.len(), 2);
		assert_ne!(ids[0], ids[1]);

		runtime.dispose();
	}

	#[test]
	fn nested_provider_continues_the_enclosing_sequence() {
		let runtime = create_runtime();
		let taken = Ids::default();

		mount(Some("page-"), {
			let taken = Rc::clone(&taken);
			Box::new(move || {
				taken.borrow_mut().push(use_tooltip_id());
				mount(None, take_id(&taken));
				mount(None, take_id(&taken));
				Fragment::new(vec![])
			})
		});

		assert_eq!(ids(&taken), ["page-0", "page-1", "page-2"]);

		runtime.dispose();
	}

	#[test]
	fn explicit_prefix_starts_a_new_sequence() {
		let runtime = create_runtime();
		let taken = Ids::default();

		mount(Some("sidebar-"), take_id(&taken));
		mount(Some("main-"), take_id(&taken));

		assert_eq!(ids(&taken), ["sidebar-0", "main-0"]);

		runtime.dispose();
	}
}
