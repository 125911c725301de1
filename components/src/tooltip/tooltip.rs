use std::{rc::Rc, time::Duration};

use leptos_use::{use_event_listener, use_raf_fn, use_resize_observer, UseRafFnCallbackArgs};

use crate::imports::*;

/// Longest frame the fade is allowed to advance by. The first frame after the
/// frame loop resumes reports the whole time it was paused.
const MAX_FRAME: Duration = Duration::from_millis(50);

/// Tooltip for displaying additional information when hovering over or
/// focusing an element. The children are the trigger: they get wrapped in a
/// span that listens for pointer and focus events, and the first element
/// among them is given `aria-describedby` once mounted. The tooltip itself is
/// rendered in a portal at the position resolved by the positioner.
#[component]
pub fn Tooltip(
	/// The content of the tooltip. Any view, so rich content works as well as
	/// plain text
	#[prop(into)]
	content: ViewFn,
	/// The side of the trigger to show the tooltip on. The positioner may pick
	/// another one if this one does not fit.
	#[prop(into, optional)]
	placement: MaybeSignal<Placement>,
	/// Resolves where the tooltip is drawn. Defaults to an
	/// [`AnchoredPositioner`]
	#[prop(optional)]
	positioner: Option<Rc<dyn PositionResolver>>,
	/// Drives the fade in and out. Defaults to a 200ms [`Fade`]
	#[prop(optional)]
	transition: Option<Rc<dyn OpacityTransition>>,
	/// The trigger element
	children: Children,
) -> impl IntoView {
	let theme = use_theme();
	let positioner = positioner
		.unwrap_or_else(|| Rc::new(AnchoredPositioner::default()) as Rc<dyn PositionResolver>);
	let transition = transition
		.unwrap_or_else(|| Rc::new(Fade::default()) as Rc<dyn OpacityTransition>);

	let state = store_value(TooltipState::new(use_tooltip_id()));
	let trigger_attrs = state.with_value(TooltipState::trigger_attrs);
	let floating_attrs = store_value(state.with_value(TooltipState::floating_attrs));

	let is_visible = create_rw_signal(false);
	let position = create_rw_signal(Position::unresolved(placement.get_untracked()));
	let placement = Signal::derive(move || placement.get());
	let opacity = create_rw_signal(0f64);

	let trigger_ref = create_node_ref::<html::Span>();
	let tooltip_ref = create_node_ref::<html::Div>();

	trigger_ref.on_load(move |wrapper| {
		let trigger = wrapper.first_element_child();
		for (name, value) in trigger_attrs.to_attributes(trigger.is_some()) {
			let result = match &trigger {
				Some(trigger) => trigger.set_attribute(name, &value),
				None => wrapper.set_attribute(name, &value),
			};
			if let Err(error) = result {
				warn!("could not set {name} on the tooltip trigger: {error:?}");
			}
		}
	});

	let on_trigger = move |event: TriggerEvent| {
		let changed = state
			.try_update_value(|state| state.apply(event))
			.unwrap_or_default();
		if changed {
			let visible = state.with_value(TooltipState::is_visible);
			debug!(
				"tooltip {} is now {}",
				floating_attrs.with_value(|attrs| attrs.id.to_string()),
				if visible { "visible" } else { "hidden" }
			);
			is_visible.set(visible);
		}
	};

	let update_position = Rc::new(move || {
		let Some((trigger, tooltip)) = trigger_ref
			.get_untracked()
			.zip(tooltip_ref.get_untracked())
		else {
			debug!("tooltip is not mounted yet, keeping its previous position");
			return;
		};

		let bounds = trigger.get_bounding_client_rect();
		let trigger = Rect {
			top: bounds.top(),
			left: bounds.left(),
			width: bounds.width(),
			height: bounds.height(),
		};
		let floating = Dimensions {
			width: tooltip.offset_width() as f64,
			height: tooltip.offset_height() as f64,
		};
		let window = window();
		let viewport = window
			.inner_width()
			.ok()
			.and_then(|width| width.as_f64())
			.zip(window.inner_height().ok().and_then(|height| height.as_f64()))
			.map(|(width, height)| Dimensions { width, height });

		position.set(positioner.resolve(
			trigger,
			floating,
			placement.get_untracked(),
			viewport,
		));
	});

	create_effect({
		let update_position = Rc::clone(&update_position);
		move |_| {
			// re-resolve when the requested placement changes while visible
			let _ = placement.get();
			if is_visible.get() {
				update_position();
			}
		}
	});

	// the box can change size after it moved, or when its content changes
	_ = use_resize_observer(tooltip_ref, {
		let update_position = Rc::clone(&update_position);
		move |_, _| {
			if is_visible.get_untracked() {
				update_position();
			}
		}
	});

	_ = use_event_listener(window(), ev::resize, {
		let update_position = Rc::clone(&update_position);
		move |_| {
			if is_visible.get_untracked() {
				update_position();
			}
		}
	});
	_ = use_event_listener(window(), ev::scroll, move |_| {
		if is_visible.get_untracked() {
			update_position();
		}
	});

	let animator = store_value(OpacityAnimator::new(transition));
	let is_animating = create_rw_signal(false);
	let frames = use_raf_fn(move |args: UseRafFnCallbackArgs| {
		let delta = Duration::from_secs_f64(args.delta.max(0.) / 1000.).min(MAX_FRAME);
		let Some((value, settled)) = animator
			.try_update_value(|animator| (animator.advance(delta), animator.is_settled()))
		else {
			return;
		};

		opacity.set(value);
		if settled {
			is_animating.set(false);
		}
	});

	create_effect(move |_| {
		let target = if is_visible.get() { 1. } else { 0. };
		animator.update_value(|animator| animator.retarget(target));
		is_animating.set(true);
	});

	create_effect(move |_| {
		if is_animating.get() {
			(frames.resume)();
		} else {
			(frames.pause)();
		}
	});

	let arrow_color = store_value(theme.colors.palette.neutral.dark.clone());
	let bubble_style = store_value(format!(
		"display: inline-block; margin: 0; font-size: {}; box-shadow: {}; border-radius: {}; \
		 padding: {} {}; color: white; background: {};",
		theme.font_size(0),
		theme.shadow(Medium),
		theme.radius(Small),
		theme.space(ExtraSmall),
		theme.space(Medium),
		theme.colors.palette.neutral.dark,
	));

	view! {
		<>
			<span
				ref={trigger_ref}
				class="tooltip-trigger"
				style="display: inline-block;"
				on:mouseenter={move |_| on_trigger(TriggerEvent::PointerEnter)}
				on:mouseleave={move |_| on_trigger(TriggerEvent::PointerLeave)}
				on:focusin={move |_| on_trigger(TriggerEvent::Focus)}
				on:focusout={move |_| on_trigger(TriggerEvent::Blur)}
			>
				{children()}
			</span>
			<Portal>
				<div
					ref={tooltip_ref}
					id={floating_attrs.with_value(|attrs| attrs.id.to_string())}
					role={floating_attrs.with_value(|attrs| attrs.role)}
					data-placement={move || position.get().placement.as_css_name()}
					style={move || {
						format!(
							"{} z-index: 1000; opacity: {}; pointer-events: {};",
							position.get().to_css(),
							opacity.get(),
							if opacity.get() > 0. { "auto" } else { "none" },
						)
					}}
				>
					<div
						data-placement={move || position.get().placement.as_css_name()}
						style={move || {
							let position = position.get();
							arrow_color.with_value(|color| {
								ArrowStyle::for_placement(position.placement, color)
									.to_css(position.arrow_offset)
							})
						}}
					></div>
					<span class="txt-body" style={bubble_style.get_value()}>
						{content.run()}
					</span>
				</div>
			</Portal>
		</>
	}
}

#[cfg(test)]
mod test {
	use crate::imports::*;

	#[test]
	fn content_takes_text_or_markup() {
		let runtime = create_runtime();

		let text: ViewFn = (|| "Database").into();
		let markup: ViewFn = (|| view! { <strong>"Database"</strong> }).into();

		// the portal may render its children more than once
		for content in [text, markup] {
			_ = content.run();
			_ = content.run();
		}

		runtime.dispose();
	}
}
