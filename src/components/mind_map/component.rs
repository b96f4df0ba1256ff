use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::MindMapState;
use super::types::NodeDetail;
use crate::components::sections::{MetricsGrid, PricingGrid, TechFooter, UseCaseGrid};
use crate::topics::TopicContent;

const DIAGRAM_HEIGHT: f64 = 600.0;

/// Cancels the pending animation frame and drops the diagram state when the
/// owning panel is disposed, so no staged reveal change lands on a dead
/// view. Held in component-local storage; leptos drops it on unmount.
struct FrameGuard {
	frame_id: Rc<Cell<Option<i32>>>,
	state: Rc<RefCell<Option<MindMapState>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for FrameGuard {
	fn drop(&mut self) {
		if let Some(id) = self.frame_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		*self.state.borrow_mut() = None;
		*self.animate.borrow_mut() = None;
	}
}

/// One full-screen topic panel: the canvas diagram with its hover/selection
/// state machine, the detail panel, and the content sections below. All
/// interaction state lives inside this component and dies with it.
#[component]
pub fn MindMapPanel(content: TopicContent, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<MindMapState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	// Selection mirrored into a signal so the detail panel DOM reacts.
	let selected = RwSignal::new(None::<String>);
	let stored = StoredValue::new(content.clone());

	let (state_init, animate_init, frame_init) = (state.clone(), animate.clone(), frame_id.clone());
	let map = content.map.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let w = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(800.0);
		let h = DIAGRAM_HEIGHT;
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(MindMapState::new(&map, w, h));

		let (state_anim, animate_inner, frame_inner) =
			(state_init.clone(), animate_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if state_anim.borrow().is_none() {
				// Panel disposed while a frame was in flight.
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx, w, h);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_inner.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(Some(id));
			}
		}
	});

	let _guard = StoredValue::new_local(FrameGuard {
		frame_id: frame_id.clone(),
		state: state.clone(),
		animate: animate.clone(),
	});

	let canvas_pos = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = canvas_pos(&ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hit = s.node_at(x, y);
			s.set_hover(hit);
			if let Some(canvas) = canvas_ref.get() {
				let canvas: HtmlCanvasElement = canvas.into();
				let cursor = if hit.is_some() { "pointer" } else { "default" };
				// Qualified call: leptos' prelude brings in an `ElementExt::style`
				// extension that would otherwise shadow the DOM getter.
				let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let (x, y) = canvas_pos(&ev);
		if let Some(ref mut s) = *state_click.borrow_mut() {
			if let Some(idx) = s.node_at(x, y) {
				let now = s.toggle_select(idx).map(String::from);
				selected.set(now);
			}
		}
	};

	let detail = move || -> Option<(String, NodeDetail)> {
		let id = selected.get()?;
		stored.with_value(|c| {
			let detail = c.map.detail_for(&id)?.clone();
			let label = c
				.map
				.nodes
				.iter()
				.find(|n| n.id == id)
				.map(|n| n.label.clone())?;
			Some((label, detail))
		})
	};

	view! {
		<div class="mind-map-panel">
			<button class="panel-close" on:click=move |_| on_close.run(())>
				"✕"
			</button>

			<div class="panel-header">
				<h2>{content.heading.clone()}</h2>
				<p>{content.tagline.clone()}</p>
			</div>

			<div class="diagram-section">
				<h3 class="diagram-title">{content.diagram_title.clone()}</h3>
				<div class="diagram-box">
					<canvas
						node_ref=canvas_ref
						class="mind-map-canvas"
						on:mousemove=on_mousemove
						on:mouseleave=on_mouseleave
						on:click=on_click
						style="display: block;"
					/>
				</div>

				{(!content.flow_steps.is_empty()).then(|| {
					view! {
						<div class="flow-strip">
							<div class="flow-title">{content.flow_title.clone()}</div>
							<ol>
								{content
									.flow_steps
									.iter()
									.map(|step| view! { <li>{step.clone()}</li> })
									.collect_view()}
							</ol>
						</div>
					}
				})}

				{move || {
					detail()
						.map(|(label, d)| {
							view! {
								<div class="detail-panel">
									<h3>{label}</h3>
									<p>{d.summary}</p>
									<ul>
										{d.points
											.into_iter()
											.map(|p| view! { <li>{p}</li> })
											.collect_view()}
									</ul>
								</div>
							}
						})
				}}

				<div class="scroll-hint">"Scroll for more content"</div>
			</div>

			<UseCaseGrid
				title=content.cases_title.clone()
				tagline=content.cases_tagline.clone()
				cases=content.cases.clone()
			/>
			<MetricsGrid
				title=content.metrics_title.clone()
				note=content.metrics_note.clone()
				metrics=content.metrics.clone()
			/>
			<PricingGrid
				title=content.pricing_title.clone()
				tagline=content.pricing_tagline.clone()
				tiers=content.tiers.clone()
			/>
			<TechFooter
				title=content.tech_title.clone()
				blurb=content.tech_blurb.clone()
				chains=content.chains.clone()
			/>
		</div>
	}
}
