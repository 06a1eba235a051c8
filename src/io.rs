//! Text format of a single query.
//!
//! The first non-empty line holds `n m s t k`; each of the next `m` non-empty
//! lines holds one edge `u v w`. The answer is the path's vertices joined by
//! spaces, or `-1` when there is no path.

use ordered_float::OrderedFloat;
use std::str::FromStr;

use crate::algorithm::k_shortest::ResolvedPath;
use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};

/// A parsed query: find the `k`-th distinct-cost path from `source` to `target`
#[derive(Debug, Clone)]
pub struct Query {
    pub graph: DirectedGraph<OrderedFloat<f64>>,
    pub source: usize,
    pub target: usize,
    pub k: usize,
}

fn field<T: FromStr>(
    tokens: &mut std::str::SplitWhitespace<'_>,
    line: usize,
    name: &str,
) -> Result<T> {
    let token = tokens.next().ok_or_else(|| Error::Parse {
        line,
        message: format!("missing {}", name),
    })?;
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {} {:?}", name, token),
    })
}

fn no_trailing(tokens: &mut std::str::SplitWhitespace<'_>, line: usize) -> Result<()> {
    match tokens.next() {
        Some(extra) => Err(Error::Parse {
            line,
            message: format!("unexpected trailing token {:?}", extra),
        }),
        None => Ok(()),
    }
}

/// Parses a query, validating vertex ids and weights
pub fn parse_query(input: &str) -> Result<Query> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text))
        .filter(|(_, text)| !text.trim().is_empty());

    let (line, header) = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        message: "empty input".to_string(),
    })?;
    let mut tokens = header.split_whitespace();
    let n: usize = field(&mut tokens, line, "vertex count")?;
    let m: usize = field(&mut tokens, line, "edge count")?;
    let source: usize = field(&mut tokens, line, "source")?;
    let target: usize = field(&mut tokens, line, "target")?;
    let k: usize = field(&mut tokens, line, "rank")?;
    no_trailing(&mut tokens, line)?;

    if source >= n {
        return Err(Error::InvalidVertex(source));
    }
    if target >= n {
        return Err(Error::InvalidVertex(target));
    }

    let mut graph = DirectedGraph::with_capacity(n);
    let mut last_line = line;
    for index in 0..m {
        let (line, text) = lines.next().ok_or_else(|| Error::Parse {
            line: last_line + 1,
            message: format!("expected {} edges, found {}", m, index),
        })?;
        last_line = line;

        let mut tokens = text.split_whitespace();
        let u: usize = field(&mut tokens, line, "edge source")?;
        let v: usize = field(&mut tokens, line, "edge target")?;
        let w: f64 = field(&mut tokens, line, "edge weight")?;
        no_trailing(&mut tokens, line)?;

        if u >= n || v >= n {
            return Err(Error::InvalidEdge(u, v));
        }
        if w.is_nan() || w < 0.0 {
            return Err(Error::NegativeWeight(w));
        }
        graph.add_edge(u, v, OrderedFloat(w));
    }

    Ok(Query { graph, source, target, k })
}

/// Formats the answer line: space-joined vertices, or `-1` for no path
pub fn format_answer<W>(path: Option<&ResolvedPath<W>>) -> String {
    match path {
        Some(path) => path
            .nodes
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        None => "-1".to_string(),
    }
}
