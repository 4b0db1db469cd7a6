//! Superclass graph with petgraph
//!
//! Directed graph where an edge A → B means "A declares B as superclass".
//! Tarjan SCC finds cycles (self-claims included); a topological sort
//! gives a base-before-derived order of all classes.

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::errors::{BindgenError, Result};
use crate::features::registry::Registry;

#[derive(Debug)]
pub struct SuperclassGraph {
    /// Directed graph: class → declared superclasses
    graph: DiGraph<String, ()>,

    /// Class name → node index
    name_to_node: BTreeMap<String, NodeIndex>,

    /// Base-before-derived order
    order: Vec<String>,
}

impl SuperclassGraph {
    /// Build and validate the relation declared by the registry's classes
    pub fn build(registry: &Registry) -> Result<Self> {
        Self::from_relation(
            registry
                .classes()
                .map(|c| (c.name.as_str(), c.superclasses.as_slice())),
        )
    }

    /// Build from `(class, declared superclasses)` pairs
    pub fn from_relation<'a, I, S>(relation: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [S])>,
        S: AsRef<str> + 'a,
    {
        let relation: Vec<(&str, &[S])> = relation.into_iter().collect();

        let mut graph = DiGraph::new();
        let mut name_to_node = BTreeMap::new();
        let mut names: Vec<&str> = relation.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        for name in names {
            let idx = graph.add_node(name.to_string());
            name_to_node.insert(name.to_string(), idx);
        }

        for (class, supers) in &relation {
            let from = name_to_node[*class];
            for superclass in supers.iter() {
                let superclass: &str = superclass.as_ref();
                let to = name_to_node.get(superclass).copied().ok_or_else(|| {
                    BindgenError::UnknownSuperclass {
                        class: class.to_string(),
                        superclass: superclass.to_string(),
                    }
                })?;
                graph.update_edge(from, to, ());
            }
        }

        if let Some(cycle) = Self::find_cycle(&graph) {
            return Err(BindgenError::SuperclassCycle { cycle });
        }

        // Edges point derived → base; toposort puts derived first
        let mut order: Vec<String> = toposort(&graph, None)
            .map_err(|cycle| BindgenError::SuperclassCycle {
                cycle: vec![graph[cycle.node_id()].clone()],
            })?
            .into_iter()
            .map(|idx| graph[idx].clone())
            .collect();
        order.reverse();

        tracing::debug!(
            "superclass graph: {} classes, {} relations",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            name_to_node,
            order,
        })
    }

    /// First cycle found, closed by repeating its first member
    fn find_cycle(graph: &DiGraph<String, ()>) -> Option<Vec<String>> {
        for scc in tarjan_scc(graph) {
            let is_cycle = scc.len() > 1 || graph.contains_edge(scc[0], scc[0]);
            if is_cycle {
                let mut cycle: Vec<String> =
                    scc.iter().map(|idx| graph[*idx].clone()).collect();
                cycle.sort();
                cycle.push(cycle[0].clone());
                return Some(cycle);
            }
        }
        None
    }

    /// Declared superclasses of `class`
    pub fn superclasses(&self, class: &str) -> Vec<String> {
        self.neighbors(class, Direction::Outgoing)
    }

    /// Classes that declare `class` as superclass
    pub fn subclasses(&self, class: &str) -> Vec<String> {
        self.neighbors(class, Direction::Incoming)
    }

    /// All transitive superclasses, nearest first
    ///
    /// This is the capability set a class implements when the target
    /// language has no multiple inheritance.
    pub fn ancestors(&self, class: &str) -> Vec<String> {
        let Some(&start) = self.name_to_node.get(class) else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let mut next: Vec<NodeIndex> = self
                .graph
                .neighbors_directed(node, Direction::Outgoing)
                .collect();
            next.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
            for n in next {
                if visited.insert(n) {
                    result.push(self.graph[n].clone());
                    queue.push_back(n);
                }
            }
        }
        result
    }

    /// Every class, bases before the classes deriving from them
    pub fn topological_order(&self) -> &[String] {
        &self.order
    }

    fn neighbors(&self, class: &str, direction: Direction) -> Vec<String> {
        let Some(&idx) = self.name_to_node.get(class) else {
            return Vec::new();
        };
        let mut names: Vec<String> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].clone())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(relation: &[(&'static str, Vec<&'static str>)]) -> Result<SuperclassGraph> {
        SuperclassGraph::from_relation(relation.iter().map(|(c, s)| (*c, s.as_slice())))
    }

    #[test]
    fn test_multiple_superclasses() {
        let graph = build(&[
            ("isl_basic_set", vec!["isl_set", "isl_union_set"]),
            ("isl_set", vec!["isl_union_set"]),
            ("isl_union_set", vec![]),
        ])
        .unwrap();

        assert_eq!(graph.superclasses("isl_basic_set"), vec!["isl_set", "isl_union_set"]);
        assert_eq!(graph.subclasses("isl_union_set"), vec!["isl_basic_set", "isl_set"]);
        assert_eq!(graph.ancestors("isl_basic_set"), vec!["isl_set", "isl_union_set"]);
    }

    #[test]
    fn test_topological_order_bases_first() {
        let graph = build(&[
            ("isl_basic_set", vec!["isl_set"]),
            ("isl_set", vec!["isl_union_set"]),
            ("isl_union_set", vec![]),
        ])
        .unwrap();

        assert_eq!(
            graph.topological_order(),
            &["isl_union_set", "isl_set", "isl_basic_set"]
        );
    }

    #[test]
    fn test_two_cycle_rejected() {
        let err = build(&[("a", vec!["b"]), ("b", vec!["a"])]).unwrap_err();
        match err {
            BindgenError::SuperclassCycle { cycle } => assert_eq!(cycle, vec!["a", "b", "a"]),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_self_claim_rejected() {
        assert!(matches!(
            build(&[("a", vec!["a"])]),
            Err(BindgenError::SuperclassCycle { .. })
        ));
    }

    #[test]
    fn test_dangling_superclass_rejected() {
        let err = build(&[("a", vec!["ghost"])]).unwrap_err();
        assert!(matches!(
            err,
            BindgenError::UnknownSuperclass { ref superclass, .. } if superclass == "ghost"
        ));
    }
}
