use std::collections::HashMap;

use super::types::{MapData, MapNode};

/// Seconds between one node's reveal start and the next one's.
pub const REVEAL_STAGGER: f64 = 0.1;
/// Seconds a single node takes to grow from zero to full scale.
pub const REVEAL_GROW: f64 = 0.4;

/// Visual weight of an edge, derived from the interaction state of its two
/// endpoints. Recomputed every frame; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEmphasis {
	/// Hovered node is an endpoint: heaviest stroke, solid.
	Highlighted,
	/// Selected node is an endpoint (and not highlighted): medium, solid.
	Selected,
	/// Neither: faint and dashed.
	Base,
}

/// One rendered line segment, by node index. A mutual pair declared on both
/// nodes yields two overlapping segments; that redundancy is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
}

/// Per-panel diagram state: the resolved dataset, the hover/selection state
/// machine, and the entry-reveal clock. Created on panel mount, dropped on
/// unmount; nothing survives an open/close cycle.
pub struct MindMapState {
	nodes: Vec<MapNode>,
	edges: Vec<Edge>,
	hovered: Option<usize>,
	selected: Option<usize>,
	width: f64,
	height: f64,
	reveal_t: f64,
	pub arrowheads: bool,
}

impl MindMapState {
	pub fn new(data: &MapData, width: f64, height: f64) -> Self {
		let index: HashMap<&str, usize> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect();

		// One segment per declared (source, target) pair that resolves.
		// Dangling ids are a tolerated sparse-dataset condition, not an error.
		let mut edges = Vec::new();
		for (source, node) in data.nodes.iter().enumerate() {
			for id in &node.connections {
				if let Some(&target) = index.get(id.as_str()) {
					edges.push(Edge { source, target });
				}
			}
		}

		Self {
			nodes: data.nodes.clone(),
			edges,
			hovered: None,
			selected: None,
			width,
			height,
			reveal_t: 0.0,
			arrowheads: data.arrowheads,
		}
	}

	pub fn nodes(&self) -> &[MapNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Projects a node's percentage position so that its visual center lands
	/// at that fraction of the diagram box.
	pub fn project(&self, node: &MapNode) -> (f64, f64) {
		(node.x / 100.0 * self.width, node.y / 100.0 * self.height)
	}

	/// Node index under the given pixel position, if any. The last matching
	/// node wins, mirroring paint order.
	pub fn node_at(&self, px: f64, py: f64) -> Option<usize> {
		let mut found = None;
		for (i, node) in self.nodes.iter().enumerate() {
			let (x, y) = self.project(node);
			let (dx, dy) = (px - x, py - y);
			if (dx * dx + dy * dy).sqrt() <= node.size.radius() {
				found = Some(i);
			}
		}
		found
	}

	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn selected_id(&self) -> Option<&str> {
		self.selected.map(|i| self.nodes[i].id.as_str())
	}

	pub fn pointer_enter(&mut self, idx: usize) {
		self.hovered = Some(idx);
	}

	/// Clears the hover only if `idx` still owns it, so a stale leave event
	/// arriving after a newer enter does not wipe the newer hover.
	pub fn pointer_leave(&mut self, idx: usize) {
		if self.hovered == Some(idx) {
			self.hovered = None;
		}
	}

	/// Applies a hit-test result: entering the node under the pointer and
	/// leaving whichever node held the hover before.
	pub fn set_hover(&mut self, idx: Option<usize>) {
		match idx {
			Some(i) => self.pointer_enter(i),
			None => {
				if let Some(prev) = self.hovered {
					self.pointer_leave(prev);
				}
			}
		}
	}

	/// Single-select toggle: clicking the selected node clears the
	/// selection. Returns the id selected afterwards, if any.
	pub fn toggle_select(&mut self, idx: usize) -> Option<&str> {
		self.selected = if self.selected == Some(idx) {
			None
		} else {
			Some(idx)
		};
		self.selected_id()
	}

	pub fn is_node_emphasized(&self, idx: usize) -> bool {
		self.hovered == Some(idx) || self.selected == Some(idx)
	}

	pub fn edge_emphasis(&self, edge: Edge) -> EdgeEmphasis {
		let incident = |slot: Option<usize>| {
			slot == Some(edge.source) || slot == Some(edge.target)
		};
		if incident(self.hovered) {
			EdgeEmphasis::Highlighted
		} else if incident(self.selected) {
			EdgeEmphasis::Selected
		} else {
			EdgeEmphasis::Base
		}
	}

	/// Advances the entry-reveal clock. Forward-only; user input never
	/// affects it.
	pub fn tick(&mut self, dt: f64) {
		self.reveal_t += dt;
	}

	/// Entry-reveal progress of node `idx` in `[0, 1]`, staggered by index.
	pub fn node_reveal(&self, idx: usize) -> f64 {
		((self.reveal_t - idx as f64 * REVEAL_STAGGER) / REVEAL_GROW).clamp(0.0, 1.0)
	}

	/// Edges fade in with their connected nodes: progress is the slower of
	/// the two endpoints.
	pub fn edge_reveal(&self, edge: Edge) -> f64 {
		self.node_reveal(edge.source).min(self.node_reveal(edge.target))
	}

	pub fn reveal_done(&self) -> bool {
		match self.nodes.len() {
			0 => true,
			n => self.node_reveal(n - 1) >= 1.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mind_map::types::{NodeDetail, SizeTier};

	fn node(id: &str, x: f64, y: f64, connections: &[&str]) -> MapNode {
		MapNode {
			id: id.into(),
			label: id.into(),
			glyph: "●".into(),
			x,
			y,
			size: SizeTier::Medium,
			connections: connections.iter().map(|c| c.to_string()).collect(),
		}
	}

	fn two_node_state() -> MindMapState {
		let data = MapData {
			nodes: vec![node("a", 50.0, 50.0, &["b"]), node("b", 80.0, 50.0, &[])],
			details: vec![],
			arrowheads: false,
		};
		MindMapState::new(&data, 1000.0, 600.0)
	}

	#[test]
	fn projection_centers_nodes_exactly() {
		let state = two_node_state();
		assert_eq!(state.project(&state.nodes()[0]), (500.0, 300.0));
		assert_eq!(state.project(&state.nodes()[1]), (800.0, 300.0));
	}

	#[test]
	fn one_segment_per_declared_resolved_pair() {
		let data = MapData {
			nodes: vec![node("a", 0.0, 0.0, &["b"]), node("b", 100.0, 0.0, &["a"])],
			details: vec![],
			arrowheads: false,
		};
		let state = MindMapState::new(&data, 100.0, 100.0);
		// Mutual declaration yields two overlapping segments, not one.
		assert_eq!(state.edges().len(), 2);
		assert_eq!(state.edges()[0], Edge { source: 0, target: 1 });
		assert_eq!(state.edges()[1], Edge { source: 1, target: 0 });
	}

	#[test]
	fn dangling_connection_ids_emit_nothing() {
		let data = MapData {
			nodes: vec![node("a", 50.0, 50.0, &["b", "missing"]), node("b", 80.0, 50.0, &[])],
			details: vec![],
			arrowheads: false,
		};
		let state = MindMapState::new(&data, 1000.0, 600.0);
		assert_eq!(state.edges().len(), 1);
	}

	#[test]
	fn hover_highlights_incident_edges_only() {
		let mut state = two_node_state();
		let edge = state.edges()[0];
		assert_eq!(state.edge_emphasis(edge), EdgeEmphasis::Base);
		state.pointer_enter(0);
		assert_eq!(state.edge_emphasis(edge), EdgeEmphasis::Highlighted);
		assert!(state.is_node_emphasized(0));
		assert!(!state.is_node_emphasized(1));
	}

	#[test]
	fn hover_outranks_selection_on_shared_edge() {
		let mut state = two_node_state();
		let edge = state.edges()[0];
		state.toggle_select(1);
		assert_eq!(state.edge_emphasis(edge), EdgeEmphasis::Selected);
		state.pointer_enter(0);
		assert_eq!(state.edge_emphasis(edge), EdgeEmphasis::Highlighted);
	}

	#[test]
	fn click_toggle_is_idempotent_over_two_clicks() {
		let mut state = two_node_state();
		assert_eq!(state.toggle_select(0), Some("a"));
		assert_eq!(state.toggle_select(0), None);
		assert_eq!(state.selected(), None);
	}

	#[test]
	fn clicking_another_node_moves_the_selection() {
		let mut state = two_node_state();
		state.toggle_select(0);
		state.toggle_select(1);
		assert_eq!(state.selected_id(), Some("b"));
	}

	#[test]
	fn stale_pointer_leave_keeps_newer_hover() {
		let mut state = two_node_state();
		state.pointer_enter(0);
		state.pointer_enter(1);
		state.pointer_leave(0);
		assert_eq!(state.hovered(), Some(1));
		state.pointer_leave(1);
		assert_eq!(state.hovered(), None);
	}

	#[test]
	fn hit_test_uses_node_radius() {
		let state = two_node_state();
		assert_eq!(state.node_at(500.0, 300.0), Some(0));
		assert_eq!(state.node_at(500.0, 300.0 + SizeTier::Medium.radius() + 1.0), None);
		assert_eq!(state.node_at(650.0, 300.0), None);
	}

	#[test]
	fn reveal_is_staggered_by_index_and_clamped() {
		let mut state = two_node_state();
		assert_eq!(state.node_reveal(0), 0.0);
		state.tick(0.05);
		assert!(state.node_reveal(0) > 0.0);
		assert_eq!(state.node_reveal(1), 0.0);
		assert!(!state.reveal_done());
		state.tick(10.0);
		assert_eq!(state.node_reveal(0), 1.0);
		assert_eq!(state.node_reveal(1), 1.0);
		assert!(state.reveal_done());
	}

	#[test]
	fn edge_reveal_follows_the_slower_endpoint() {
		let mut state = two_node_state();
		state.tick(REVEAL_STAGGER + REVEAL_GROW * 0.5);
		let edge = state.edges()[0];
		assert_eq!(state.edge_reveal(edge), state.node_reveal(1));
		assert!(state.edge_reveal(edge) < state.node_reveal(0));
	}

	#[test]
	fn detail_panel_source_follows_selection() {
		let data = MapData {
			nodes: vec![node("token", 50.0, 50.0, &[])],
			details: vec![NodeDetail {
				id: "token".into(),
				summary: "Token economics and distribution".into(),
				points: vec!["Voting power allocation".into()],
			}],
			arrowheads: false,
		};
		let mut state = MindMapState::new(&data, 800.0, 600.0);
		assert_eq!(state.toggle_select(0), Some("token"));
		assert!(data.detail_for(state.selected_id().unwrap_or_default()).is_some());
		assert_eq!(state.toggle_select(0), None);
		assert_eq!(state.selected_id(), None);
	}
}
