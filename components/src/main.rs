use design_system::prelude::*;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use strum::IntoEnumIterator;

fn main() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(Showcase)
}

/// Every icon, each with its name in a tooltip, and a tooltip on each side.
#[component]
fn Showcase() -> impl IntoView {
	provide_meta_context();

	view! {
		<>
			<Title text="Design system" />
			<ThemeProvider>
				<section class="icons">
					{IconType::iter()
						.map(|icon| {
							view! {
								<Tooltip content={move || icon.to_string()}>
									<Icon icon={icon} size={Size::Large} />
								</Tooltip>
							}
						})
						.collect_view()}
				</section>
				<section class="placements">
					{Placement::iter()
						.map(|placement| {
							view! {
								<Tooltip content={move || format!("Shown on the {placement}")} placement={placement}>
									<button>{placement.to_string()}</button>
								</Tooltip>
							}
						})
						.collect_view()}
				</section>
				<section class="named">
					<Tooltip content={|| view! { <><strong>"Database"</strong>" connections"</> }}>
						<IconDatabase size={32u32} color="#2186eb" />
					</Tooltip>
					<IconInfo size={Size::Small} attr:aria-label="info" />
				</section>
			</ThemeProvider>
		</>
	}
}
