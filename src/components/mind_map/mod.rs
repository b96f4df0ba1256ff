mod component;
mod render;
mod state;
mod types;

pub use component::MindMapPanel;
#[cfg(test)]
pub use state::MindMapState;
pub use types::{MapData, MapNode, NodeDetail, SizeTier};
