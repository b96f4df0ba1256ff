/// Visual size class of a node, mapping to a fixed circle radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeTier {
	Small,
	Medium,
	Large,
}

impl SizeTier {
	/// Circle radius in pixels.
	pub fn radius(self) -> f64 {
		match self {
			SizeTier::Small => 20.0,
			SizeTier::Medium => 24.0,
			SizeTier::Large => 32.0,
		}
	}
}

/// One labeled, positioned point in a mind-map diagram.
///
/// `x` and `y` are percentages of the diagram box in `[0, 100]`; they are
/// trusted author data and not validated at runtime. `connections` lists the
/// ids this node declares an edge to; ids that resolve to no node in the
/// same dataset are dropped silently when edges are derived.
#[derive(Clone, Debug)]
pub struct MapNode {
	pub id: String,
	pub label: String,
	pub glyph: String,
	pub x: f64,
	pub y: f64,
	pub size: SizeTier,
	pub connections: Vec<String>,
}

/// Static descriptive content shown in the detail panel for one node id.
/// Nodes without an entry are decorative-only and show no panel.
#[derive(Clone, Debug)]
pub struct NodeDetail {
	pub id: String,
	pub summary: String,
	pub points: Vec<String>,
}

/// A complete, immutable diagram dataset for one topic panel.
#[derive(Clone, Debug, Default)]
pub struct MapData {
	pub nodes: Vec<MapNode>,
	pub details: Vec<NodeDetail>,
	/// Draw decorative arrowheads at edge ends. Purely cosmetic; edges carry
	/// no directional meaning either way.
	pub arrowheads: bool,
}

impl MapData {
	pub fn detail_for(&self, id: &str) -> Option<&NodeDetail> {
		self.details.iter().find(|d| d.id == id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn size_tiers_map_to_distinct_radii() {
		assert!(SizeTier::Small.radius() < SizeTier::Medium.radius());
		assert!(SizeTier::Medium.radius() < SizeTier::Large.radius());
	}

	#[test]
	fn detail_lookup_misses_are_none() {
		let data = MapData {
			details: vec![NodeDetail {
				id: "token".into(),
				summary: "Token economics".into(),
				points: vec!["Voting power".into()],
			}],
			..MapData::default()
		};
		assert!(data.detail_for("token").is_some());
		assert!(data.detail_for("governance").is_none());
	}
}
