use crate::error::TopoError;
use crate::format::{OrderDocument, join_order};
use crate::graph::Graph;
use crate::parse::parse_edges;
use crate::sort::topological_sort;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Handle the sort command
pub fn handle_sort(file: Option<&Path>, json: bool, separator: &str) -> Result<(), TopoError> {
    let graph = load_graph(file)?;
    write_sort(&graph, &mut io::stdout().lock(), json, separator)
}

/// Handle the check command
pub fn handle_check(file: Option<&Path>) -> Result<(), TopoError> {
    let graph = load_graph(file)?;
    topological_sort(&graph)?;

    writeln!(io::stdout().lock(), "acyclic")?;
    Ok(())
}

/// Sort `graph` and write the order to `out`. Write failures surface as IO errors.
fn write_sort(
    graph: &Graph<String>,
    out: &mut impl Write,
    json: bool,
    separator: &str,
) -> Result<(), TopoError> {
    let order = topological_sort(graph)?;

    if json {
        writeln!(out, "{}", OrderDocument::new(order).to_json()?)?;
    } else {
        writeln!(out, "{}", join_order(&order, separator))?;
    }
    out.flush()?;

    Ok(())
}

fn load_graph(file: Option<&Path>) -> Result<Graph<String>, TopoError> {
    let input = read_input(file)?;
    parse_edges(&input)
}

/// Read the whole input from `file`, or from stdin for `None` and `-`
fn read_input(file: Option<&Path>) -> Result<String, TopoError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
