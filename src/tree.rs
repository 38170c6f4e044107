use std::collections::HashMap;

use crate::path::Segment;
use crate::route::RouteId;

/// The route table: a segment tree whose edges are `/`-delimited path
/// segments, with one disjoint subtree per HTTP method.
///
/// Nodes live in an arena and refer to each other by index. A node is keyed
/// by its full compiled segment (including the constraint source), so two
/// routes share a node only when their segments mean the same thing.
///
/// The tree is only mutated during registration; lookups take `&self` and
/// are safe to run from any number of threads once registration ends.
#[derive(Debug, Default)]
pub(crate) struct Tree {
    nodes: Vec<Node>,
    roots: HashMap<String, usize>,
}

#[derive(Debug)]
struct Node {
    token: Segment,
    route: Option<RouteId>,
    children: Vec<usize>,
}

impl Tree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts a route under `method`, creating nodes as needed. If the
    /// leaf already carries a route, it is replaced and the previous id is
    /// returned: the last registration of an identical method and path
    /// wins.
    pub(crate) fn insert(
        &mut self,
        method: &str,
        segments: &[Segment],
        route: RouteId,
    ) -> Option<RouteId> {
        let root = match self.roots.get(method) {
            Some(&root) => root,
            None => {
                let root = self.push(Segment::Static(String::new()));
                self.roots.insert(method.to_owned(), root);
                root
            }
        };

        let mut current = root;
        for segment in segments {
            let existing = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].token == *segment);

            current = match existing {
                Some(child) => child,
                None => {
                    let child = self.push(segment.clone());
                    self.nodes[current].children.push(child);
                    child
                }
            };
        }

        self.nodes[current].route.replace(route)
    }

    /// Looks up the route matching `method` and `path`.
    ///
    /// Candidates at each node are tried statics first, then parameters in
    /// registration order, then wildcard; a dead-ended descent falls back
    /// to the next candidate.
    pub(crate) fn find(&self, method: &str, path: &str) -> Option<RouteId> {
        let &root = self.roots.get(method)?;
        if !path.starts_with('/') {
            return None;
        }

        let segments: Vec<&str> = path.split('/').skip(1).collect();
        self.search(root, &segments)
    }

    fn search(&self, node: usize, segments: &[&str]) -> Option<RouteId> {
        let Some((&value, rest)) = segments.split_first() else {
            return self.nodes[node].route;
        };

        let children = &self.nodes[node].children;

        for &child in children {
            if self.nodes[child].token.is_static() {
                if let Some(route) = self.descend(child, value, rest) {
                    return Some(route);
                }
            }
        }

        for &child in children {
            let token = &self.nodes[child].token;
            if !token.is_static() && !token.is_wildcard() {
                if let Some(route) = self.descend(child, value, rest) {
                    return Some(route);
                }
            }
        }

        // A wildcard swallows the entire remaining suffix, empty included.
        for &child in children {
            if self.nodes[child].token.is_wildcard() {
                if let Some(route) = self.nodes[child].route {
                    return Some(route);
                }
            }
        }

        None
    }

    fn descend(&self, child: usize, value: &str, rest: &[&str]) -> Option<RouteId> {
        if !self.nodes[child].token.accepts(value) {
            return None;
        }
        self.search(child, rest)
    }

    fn push(&mut self, token: Segment) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            token,
            route: None,
            children: Vec::new(),
        });
        index
    }
}
