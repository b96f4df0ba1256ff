//! Data-driven content sections shown below the diagram. No per-topic
//! branching lives here; every string comes in through props.

use leptos::prelude::*;

use crate::topics::{Metric, PricingTier, UseCase};

/// Expandable card grid with single-expanded toggle semantics: clicking a
/// card expands it, re-clicking collapses, clicking another moves the
/// expansion. State is local to the grid and dies with the panel.
#[component]
pub fn UseCaseGrid(title: String, tagline: String, cases: Vec<UseCase>) -> impl IntoView {
	let expanded = RwSignal::new(None::<String>);

	view! {
		<div class="use-case-section">
			<div class="section-header">
				<h3>{title}</h3>
				<p>{tagline}</p>
			</div>
			<div class="use-case-grid">
				{cases
					.into_iter()
					.map(|case| {
						let id = case.id.clone();
						let toggle_id = case.id.clone();
						let open = move || expanded.get().as_deref() == Some(id.as_str());
						let card_class = {
							let open = open.clone();
							move || if open() { "use-case-card expanded" } else { "use-case-card" }
						};
						view! {
							<div
								class=card_class
								on:click=move |_| {
									expanded
										.update(|e| {
											*e = if e.as_deref() == Some(toggle_id.as_str()) {
												None
											} else {
												Some(toggle_id.clone())
											};
										});
								}
							>
								<h4>{case.title.clone()}</h4>
								<p>{case.blurb.clone()}</p>
								{move || {
									open()
										.then(|| {
											view! {
												<div class="use-case-benefits">
													<h5>{format!("{} Benefits:", case.title)}</h5>
													<ul>
														{case
															.benefits
															.iter()
															.map(|b| view! { <li>{b.clone()}</li> })
															.collect_view()}
													</ul>
												</div>
											}
										})
								}}
							</div>
						}
					})
					.collect_view()}
			</div>
			<div class="scroll-hint">"Continue scrolling for pricing"</div>
		</div>
	}
}

fn trend_class(trend: &str) -> &'static str {
	if trend.starts_with('+') {
		"trend-up"
	} else if trend.starts_with('-') {
		"trend-down"
	} else {
		"trend-flat"
	}
}

/// Static metrics table.
#[component]
pub fn MetricsGrid(title: String, note: String, metrics: Vec<Metric>) -> impl IntoView {
	view! {
		<div class="metrics-section">
			<div class="section-header">
				<h3>{title}</h3>
				<span class="metrics-note">{note}</span>
			</div>
			<div class="metrics-grid">
				{metrics
					.into_iter()
					.map(|m| {
						let trend = trend_class(&m.trend);
						view! {
							<div class="metric-cell">
								<div class="metric-value">{m.value}</div>
								<div class="metric-title">{m.title}</div>
								<div class="metric-subtitle">{m.subtitle}</div>
								<div class=format!("metric-trend {trend}")>{m.trend}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

/// Pricing tier grid; exactly one tier carries the "popular" ribbon.
#[component]
pub fn PricingGrid(title: String, tagline: String, tiers: Vec<PricingTier>) -> impl IntoView {
	view! {
		<div class="pricing-section">
			<div class="section-header">
				<h3>{title}</h3>
				<p>{tagline}</p>
			</div>
			<div class="pricing-grid">
				{tiers
					.into_iter()
					.map(|t| {
						view! {
							<div class=if t.popular { "pricing-card popular" } else { "pricing-card" }>
								{t.popular.then(|| view! { <span class="popular-ribbon">"POPULAR"</span> })}
								<div class="tier-badge">{t.badge}</div>
								<h4>{t.name}</h4>
								<div class="tier-price">{t.price}</div>
								<ul>
									{t.features
										.into_iter()
										.map(|f| view! { <li>{f}</li> })
										.collect_view()}
								</ul>
								<button class="tier-cta">{t.cta}</button>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

/// Closing blurb with the chain badge strip.
#[component]
pub fn TechFooter(title: String, blurb: String, chains: Vec<(String, String)>) -> impl IntoView {
	view! {
		<div class="tech-footer">
			<h4>{title}</h4>
			<p>{blurb}</p>
			<div class="chain-strip">
				{chains
					.into_iter()
					.map(|(abbrev, name)| {
						view! {
							<div class="chain-badge">
								<span class="chain-abbrev">{abbrev}</span>
								<span class="chain-name">{name}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
