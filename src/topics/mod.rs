//! Per-topic panel content: the diagram dataset plus every piece of copy the
//! sections below the diagram render. Adding a node or a card is a data
//! change here, never a code change in the components.

mod dao;
mod defi;
mod nft;
mod trade;

pub use dao::dao;
pub use defi::defi;
pub use nft::nft;
pub use trade::trade;

use crate::components::mind_map::{MapData, MapNode, NodeDetail, SizeTier};

/// One expandable card in the use-case grid.
#[derive(Clone, Debug)]
pub struct UseCase {
	pub id: String,
	pub title: String,
	pub blurb: String,
	pub benefits: Vec<String>,
}

/// One static metric cell. `trend` keeps its sign prefix ("+12%", "-8%",
/// "0%") and drives the up/down/flat styling.
#[derive(Clone, Debug)]
pub struct Metric {
	pub title: String,
	pub value: String,
	pub subtitle: String,
	pub trend: String,
}

/// One pricing tier card.
#[derive(Clone, Debug)]
pub struct PricingTier {
	pub badge: String,
	pub name: String,
	pub price: String,
	pub features: Vec<String>,
	pub cta: String,
	pub popular: bool,
}

/// Everything one full-screen topic panel needs: graph dataset, detail
/// table, and section copy.
#[derive(Clone, Debug)]
pub struct TopicContent {
	pub heading: String,
	pub tagline: String,
	pub diagram_title: String,
	/// Optional numbered process strip; empty means the panel has none.
	pub flow_title: String,
	pub flow_steps: Vec<String>,
	pub map: MapData,
	pub cases_title: String,
	pub cases_tagline: String,
	pub cases: Vec<UseCase>,
	pub metrics_title: String,
	pub metrics_note: String,
	pub metrics: Vec<Metric>,
	pub pricing_title: String,
	pub pricing_tagline: String,
	pub tiers: Vec<PricingTier>,
	pub tech_title: String,
	pub tech_blurb: String,
	pub chains: Vec<(String, String)>,
}

fn strs(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn node(
	id: &str,
	glyph: &str,
	label: &str,
	x: f64,
	y: f64,
	size: SizeTier,
	connections: &[&str],
) -> MapNode {
	MapNode {
		id: id.into(),
		label: label.into(),
		glyph: glyph.into(),
		x,
		y,
		size,
		connections: strs(connections),
	}
}

pub(crate) fn detail(id: &str, summary: &str, points: &[&str]) -> NodeDetail {
	NodeDetail {
		id: id.into(),
		summary: summary.into(),
		points: strs(points),
	}
}

pub(crate) fn case(id: &str, title: &str, blurb: &str, benefits: &[&str]) -> UseCase {
	UseCase {
		id: id.into(),
		title: title.into(),
		blurb: blurb.into(),
		benefits: strs(benefits),
	}
}

pub(crate) fn metric(title: &str, value: &str, subtitle: &str, trend: &str) -> Metric {
	Metric {
		title: title.into(),
		value: value.into(),
		subtitle: subtitle.into(),
		trend: trend.into(),
	}
}

pub(crate) fn tier(
	badge: &str,
	name: &str,
	price: &str,
	features: &[&str],
	cta: &str,
	popular: bool,
) -> PricingTier {
	PricingTier {
		badge: badge.into(),
		name: name.into(),
		price: price.into(),
		features: strs(features),
		cta: cta.into(),
		popular,
	}
}

/// The standard chain badge strip shared by every topic footer.
pub(crate) fn chains() -> Vec<(String, String)> {
	vec![
		("ETH".into(), "Ethereum".into()),
		("POLY".into(), "Polygon".into()),
		("ARB".into(), "Arbitrum".into()),
		("OP".into(), "Optimism".into()),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mind_map::MindMapState;
	use std::collections::HashSet;

	fn all_topics() -> Vec<TopicContent> {
		vec![dao(), defi(), trade(), nft()]
	}

	#[test]
	fn node_ids_are_unique_within_each_dataset() {
		for topic in all_topics() {
			let mut seen = HashSet::new();
			for node in &topic.map.nodes {
				assert!(seen.insert(node.id.clone()), "duplicate id {}", node.id);
			}
		}
	}

	#[test]
	fn every_detail_entry_references_an_existing_node() {
		for topic in all_topics() {
			let ids: HashSet<_> = topic.map.nodes.iter().map(|n| n.id.as_str()).collect();
			for d in &topic.map.details {
				assert!(ids.contains(d.id.as_str()), "detail for unknown node {}", d.id);
			}
		}
	}

	#[test]
	fn dao_dataset_resolves_every_declared_connection() {
		let topic = dao();
		let declared: usize = topic.map.nodes.iter().map(|n| n.connections.len()).sum();
		let state = MindMapState::new(&topic.map, 1000.0, 600.0);
		assert_eq!(declared, 28);
		assert_eq!(state.edges().len(), declared);
	}

	#[test]
	fn nft_dataset_tolerates_its_dangling_royalties_id() {
		let topic = nft();
		let declared: usize = topic.map.nodes.iter().map(|n| n.connections.len()).sum();
		let state = MindMapState::new(&topic.map, 1000.0, 600.0);
		// "digital-art" declares a connection to "royalties", which has no
		// node; that single pair is dropped silently.
		assert_eq!(declared, 35);
		assert_eq!(state.edges().len(), 34);
	}

	#[test]
	fn only_the_trade_panel_draws_arrowheads() {
		assert!(trade().map.arrowheads);
		assert!(!dao().map.arrowheads);
		assert!(!defi().map.arrowheads);
		assert!(!nft().map.arrowheads);
	}

	#[test]
	fn defi_panel_has_no_flow_strip() {
		assert!(defi().flow_steps.is_empty());
		assert_eq!(dao().flow_steps.len(), 4);
		assert_eq!(trade().flow_steps.len(), 4);
		assert_eq!(nft().flow_steps.len(), 4);
	}

	#[test]
	fn every_topic_ships_full_section_content() {
		for topic in all_topics() {
			assert_eq!(topic.cases.len(), 3);
			assert_eq!(topic.metrics.len(), 10);
			assert_eq!(topic.tiers.len(), 4);
			assert_eq!(topic.tiers.iter().filter(|t| t.popular).count(), 1);
			assert_eq!(topic.chains.len(), 4);
		}
	}
}
