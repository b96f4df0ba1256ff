pub mod mind_map;
pub mod sections;
