//! Migration graph and minimum-hop path search.
//!
//! Migrations do not form a simple chain: several origins may lead to the
//! same destination and a single migration may skip intermediate schemas.
//! Reaching a target is therefore a graph search, where every migration
//! counts as one hop.

use crate::migration::Migration;
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::collections::{HashMap, VecDeque};

/// The set of registered migrations, indexed for path finding
#[derive(Debug)]
pub struct MigrationGraph {
    /// Migrations in the order they were enumerated
    migrations: Vec<Migration>,

    /// Destination -> origins with an edge into it, in enumeration order
    incoming: HashMap<String, Vec<String>>,

    /// Destination -> origin -> index into `migrations`
    edges: HashMap<String, HashMap<String, usize>>,

    /// Schema identifiers as nodes, one edge per migration
    graph: DiGraph<String, usize>,

    /// Map from schema identifier to node index
    node_map: HashMap<String, NodeIndex>,
}

impl MigrationGraph {
    /// Index `migrations`.
    ///
    /// Enumeration order decides which of several equally short paths
    /// [`find_path`](Self::find_path) returns. If the same pair appears twice
    /// the later migration wins.
    pub fn build(migrations: Vec<Migration>) -> Self {
        let mut incoming: HashMap<String, Vec<String>> = HashMap::new();
        let mut edges: HashMap<String, HashMap<String, usize>> = HashMap::new();
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        for (idx, migration) in migrations.iter().enumerate() {
            let origins = edges.entry(migration.destination.clone()).or_default();
            if origins.insert(migration.origin.clone(), idx).is_none() {
                incoming
                    .entry(migration.destination.clone())
                    .or_default()
                    .push(migration.origin.clone());

                let from = node_index(&mut graph, &mut node_map, &migration.origin);
                let to = node_index(&mut graph, &mut node_map, &migration.destination);
                graph.add_edge(from, to, idx);
            }
        }

        Self {
            migrations,
            incoming,
            edges,
            graph,
            node_map,
        }
    }

    /// Find a minimum-hop sequence of migrations leading from `from` to `to`.
    ///
    /// Searches breadth-first backwards from `to`, recording for each origin
    /// the next hop towards `to` the first time it is reached. A node is
    /// never revisited once settled, so the first discovery is always via a
    /// shortest route and a single shortcut migration beats a longer chain.
    ///
    /// Returns `Some(vec![])` when `from == to` and `None` when `to` cannot
    /// be reached from `from`.
    pub fn find_path(&self, from: &str, to: &str) -> Option<Vec<Migration>> {
        if from == to {
            return Some(Vec::new());
        }

        // origin -> next hop towards `to`
        let mut next_hop: HashMap<&str, &str> = HashMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(to);

        'search: while let Some(current) = queue.pop_front() {
            let Some(origins) = self.incoming.get(current) else {
                continue;
            };
            for origin in origins {
                let origin = origin.as_str();
                if origin == to || next_hop.contains_key(origin) {
                    continue;
                }
                next_hop.insert(origin, current);
                if origin == from {
                    break 'search;
                }
                queue.push_back(origin);
            }
        }

        let mut path = Vec::new();
        let mut current = from;
        while current != to {
            let next = *next_hop.get(current)?;
            let idx = *self.edges.get(next)?.get(current)?;
            path.push(self.migrations[idx].clone());
            current = next;
        }
        Some(path)
    }

    /// All migrations in the graph, in enumeration order
    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    /// Number of distinct migrations
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if no migrations are registered
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Every schema identifier mentioned by a migration, sorted
    pub fn schemas(&self) -> Vec<&str> {
        let mut schemas: Vec<&str> = self.node_map.keys().map(String::as_str).collect();
        schemas.sort_unstable();
        schemas
    }

    /// Whether any schema can be migrated back to itself
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Groups of schemas that are mutually reachable, each sorted.
    ///
    /// Empty for an acyclic graph.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .map(|component| {
                let mut names: Vec<String> = component
                    .into_iter()
                    .map(|idx| self.graph[idx].clone())
                    .collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }

    /// Schemas reachable from `schema` through one or more migrations, sorted
    pub fn reachable_from(&self, schema: &str) -> Vec<String> {
        let Some(&start) = self.node_map.get(schema) else {
            return Vec::new();
        };

        let mut reachable = Vec::new();
        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(idx) = bfs.next(&self.graph) {
            if idx != start {
                reachable.push(self.graph[idx].clone());
            }
        }
        reachable.sort();
        reachable
    }
}

fn node_index(
    graph: &mut DiGraph<String, usize>,
    node_map: &mut HashMap<String, NodeIndex>,
    schema: &str,
) -> NodeIndex {
    if let Some(&idx) = node_map.get(schema) {
        idx
    } else {
        let idx = graph.add_node(schema.to_string());
        node_map.insert(schema.to_string(), idx);
        idx
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
