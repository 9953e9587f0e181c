pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod format;
pub mod graph;
pub mod parse;
pub mod sort;

pub use error::{Result, TopoError};
pub use format::{OrderDocument, join_order};
pub use graph::Graph;
pub use parse::parse_edges;
pub use sort::{is_acyclic, topological_sort};
