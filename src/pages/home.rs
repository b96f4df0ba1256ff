use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;

use crate::components::mind_map::MindMapPanel;
use crate::reveal::RevealSequence;
use crate::topics::{self, TopicContent};

const LOGO_DELAY_MS: u64 = 300;
const BUTTONS_DELAY_MS: u64 = 800;
const SETTLED_DELAY_MS: u64 = 1500;
/// Distance of the radial nav buttons from the logo center.
const NAV_RADIUS_PX: f64 = 220.0;

/// The four topic panels reachable from the radial navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
	Dao,
	Defi,
	Trade,
	Nft,
}

impl Section {
	const ALL: [Section; 4] = [Section::Dao, Section::Defi, Section::Trade, Section::Nft];

	fn label(self) -> &'static str {
		match self {
			Section::Dao => "DAO",
			Section::Defi => "DeFi",
			Section::Trade => "Trade",
			Section::Nft => "NFT",
		}
	}

	fn glyph(self) -> &'static str {
		match self {
			Section::Dao => "⬡",
			Section::Defi => "↗",
			Section::Trade => "⇅",
			Section::Nft => "◆",
		}
	}

	fn angle_deg(self) -> f64 {
		match self {
			Section::Dao => 0.0,
			Section::Defi => 90.0,
			Section::Trade => 180.0,
			Section::Nft => 270.0,
		}
	}

	fn content(self) -> TopicContent {
		match self {
			Section::Dao => topics::dao(),
			Section::Defi => topics::defi(),
			Section::Trade => topics::trade(),
			Section::Nft => topics::nft(),
		}
	}
}

/// Cancels whatever reveal stages are still pending when the page scope is
/// disposed.
struct SequenceGuard(Rc<RefCell<Option<RevealSequence>>>);

impl Drop for SequenceGuard {
	fn drop(&mut self) {
		if let Some(mut seq) = self.0.borrow_mut().take() {
			seq.cancel();
		}
	}
}

/// Landing page: central logo, four radial nav buttons, staged entry
/// reveal, and the full-screen topic panel overlay.
#[component]
pub fn Home() -> impl IntoView {
	let loading = RwSignal::new(true);
	let logo_loaded = RwSignal::new(false);
	let buttons_loaded = RwSignal::new(false);
	let returning = RwSignal::new(false);
	let active = RwSignal::new(None::<Section>);
	// Bumped whenever the entry reveal should replay (initial mount and
	// every return from a panel).
	let reveal_epoch = RwSignal::new(0u32);

	let sequence: Rc<RefCell<Option<RevealSequence>>> = Rc::new(RefCell::new(None));
	let _guard = StoredValue::new_local(SequenceGuard(sequence.clone()));

	let sequence_start = sequence.clone();
	Effect::new(move |_| {
		let epoch = reveal_epoch.get();
		info!("starting reveal sequence (epoch {epoch})");

		logo_loaded.set(false);
		buttons_loaded.set(false);

		let stages: Vec<(u64, Box<dyn FnOnce()>)> = vec![
			(LOGO_DELAY_MS, Box::new(move || logo_loaded.set(true))),
			(BUTTONS_DELAY_MS, Box::new(move || buttons_loaded.set(true))),
			(
				SETTLED_DELAY_MS,
				Box::new(move || {
					loading.set(false);
					returning.set(false);
				}),
			),
		];
		// Replacing the previous sequence drops it, discarding any stage
		// that has not fired yet.
		*sequence_start.borrow_mut() = Some(RevealSequence::start(stages));
	});

	let on_close = Callback::new(move |_: ()| {
		active.set(None);
		returning.set(true);
		reveal_epoch.update(|e| *e += 1);
	});

	let main_class = move || {
		let mut class = String::from("landing");
		if active.get().is_some() {
			class.push_str(" dimmed");
		}
		if loading.get() || returning.get() {
			class.push_str(" settling");
		}
		class
	};

	view! {
		<div class="ecosystem-root">
			<div class=main_class>
				<div class="landing-header">
					<div class="kicker">"DECENTRALIZED ECOSYSTEM"</div>
				</div>

				<div class="orbit-area">
					<div class=move || {
						if logo_loaded.get() { "central-logo revealed" } else { "central-logo" }
					}>
						<div class="logo-mark">"MW3"</div>
						<div class="logo-caption">"META WEB 3.0"</div>
					</div>

					{Section::ALL
						.iter()
						.enumerate()
						.map(|(index, &section)| {
							let angle = section.angle_deg().to_radians();
							let (dx, dy) = (angle.cos() * NAV_RADIUS_PX, angle.sin() * NAV_RADIUS_PX);
							let style = move || {
								if buttons_loaded.get() {
									format!(
										"transform: translate({dx:.1}px, {dy:.1}px); transition-delay: {}ms",
										index * 150 + 200,
									)
								} else {
									"transform: translate(0px, 0px); opacity: 0".to_string()
								}
							};
							view! {
								<button
									class="nav-button"
									style=style
									on:click=move |_| active.set(Some(section))
								>
									<span class="nav-glyph">{section.glyph()}</span>
									<span class="nav-label">{section.label()}</span>
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="landing-footer">"Click any section to explore the ecosystem"</div>
			</div>

			{move || {
				loading
					.get()
					.then(|| {
						view! {
							<div class="loading-overlay">
								<div class="spinner" />
								<div class="loading-title">"INITIALIZING"</div>
								<div class="loading-caption">"META WEB 3.0"</div>
							</div>
						}
					})
			}}

			{move || {
				active
					.get()
					.map(|section| {
						view! {
							<div class="panel-overlay">
								<MindMapPanel content=section.content() on_close=on_close />
							</div>
						}
					})
			}}
		</div>
	}
}
