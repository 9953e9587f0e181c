//! Printing an ordered sequence.

use crate::error::Result;
use serde::Serialize;
use std::fmt::Display;

/// Default separator between nodes in text output
pub const DEFAULT_SEPARATOR: &str = " ";

/// Join nodes into a single line with `separator` between them
pub fn join_order<N: Display>(order: &[N], separator: &str) -> String {
    order
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// JSON shape of a sort result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDocument {
    pub order: Vec<String>,
    pub nodes: usize,
}

impl OrderDocument {
    pub fn new(order: Vec<String>) -> Self {
        let nodes = order.len();
        Self { order, nodes }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
