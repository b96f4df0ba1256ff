//! Client-side rendered ecosystem site built around interactive mind-map
//! panels. Everything runs in the browser; there is no server half.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;
mod reveal;
mod topics;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Wires the console logger and panic hook. Call once before mounting.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Root component: document metadata plus the router. The landing page is
/// the only real route; anything else falls through to the 404 view.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="Meta Web 3.0 | Decentralized Ecosystem" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Explore the Meta Web 3.0 decentralized ecosystem" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
