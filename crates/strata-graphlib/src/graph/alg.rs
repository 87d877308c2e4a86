//! Helper algorithms over [`Graph`].
//!
//! All results are deterministic: they follow the graph's vertex insertion order.

use super::Graph;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Weakly connected components, each listed in discovery order starting from the earliest
/// enumerated vertex.
pub fn components<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out: Vec<Vec<String>> = Vec::new();

    for start in g.node_ids() {
        if !seen.insert(start.clone()) {
            continue;
        }
        let mut comp: Vec<String> = Vec::new();
        let mut q: VecDeque<String> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            for n in g.neighbors(&v) {
                if seen.insert(n.to_string()) {
                    q.push_back(n.to_string());
                }
            }
            comp.push(v);
        }
        out.push(comp);
    }

    out
}

/// Kahn topological sort. Ready vertices are released in insertion order; returns `None` when
/// the graph has a cycle (self-loops count as cycles).
pub fn topsort<N, E>(g: &Graph<N, E>) -> Option<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
{
    let ids = g.node_ids();
    let mut indegree: BTreeMap<&str, usize> = ids.iter().map(|v| (v.as_str(), 0)).collect();
    for e in g.edges() {
        if let Some(d) = indegree.get_mut(e.w.as_str()) {
            *d += 1;
        }
    }

    let mut queue: VecDeque<&str> = ids
        .iter()
        .map(|v| v.as_str())
        .filter(|v| indegree.get(v).copied() == Some(0))
        .collect();
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    while let Some(v) = queue.pop_front() {
        out.push(v.to_string());
        for e in g.out_edges(v, None) {
            let Some(d) = indegree.get_mut(e.w.as_str()) else {
                continue;
            };
            *d -= 1;
            if *d == 0 {
                if let Some((w, _)) = indegree.get_key_value(e.w.as_str()) {
                    queue.push_back(*w);
                }
            }
        }
    }

    (out.len() == ids.len()).then_some(out)
}

pub fn is_acyclic<N, E>(g: &Graph<N, E>) -> bool
where
    N: Default + 'static,
    E: Default + 'static,
{
    topsort(g).is_some()
}

/// Strongly connected components (Tarjan) of size > 1, plus single vertices with a self-loop.
pub fn find_cycles<N, E>(g: &Graph<N, E>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
{
    struct Tarjan<'a, N, E>
    where
        N: Default + 'static,
        E: Default + 'static,
    {
        g: &'a Graph<N, E>,
        index: usize,
        stack: Vec<String>,
        on_stack: BTreeSet<String>,
        indices: BTreeMap<String, usize>,
        lowlink: BTreeMap<String, usize>,
        sccs: Vec<Vec<String>>,
    }

    impl<N, E> Tarjan<'_, N, E>
    where
        N: Default + 'static,
        E: Default + 'static,
    {
        fn strongconnect(&mut self, v: &str) {
            self.indices.insert(v.to_string(), self.index);
            self.lowlink.insert(v.to_string(), self.index);
            self.index += 1;
            self.stack.push(v.to_string());
            self.on_stack.insert(v.to_string());

            let g = self.g;
            for w in g.successors(v) {
                if !self.indices.contains_key(w) {
                    self.strongconnect(w);
                    let (Some(v_low), Some(w_low)) =
                        (self.lowlink.get(v).copied(), self.lowlink.get(w).copied())
                    else {
                        continue;
                    };
                    self.lowlink.insert(v.to_string(), v_low.min(w_low));
                } else if self.on_stack.contains(w) {
                    let (Some(v_low), Some(w_idx)) =
                        (self.lowlink.get(v).copied(), self.indices.get(w).copied())
                    else {
                        continue;
                    };
                    self.lowlink.insert(v.to_string(), v_low.min(w_idx));
                }
            }

            if self.lowlink.get(v) == self.indices.get(v) {
                let mut scc: Vec<String> = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack.remove(&w);
                    let done = w == v;
                    scc.push(w);
                    if done {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }

    let node_ids = g.node_ids();
    let mut tarjan = Tarjan {
        g,
        index: 0,
        stack: Vec::new(),
        on_stack: BTreeSet::new(),
        indices: BTreeMap::new(),
        lowlink: BTreeMap::new(),
        sccs: Vec::new(),
    };

    for v in &node_ids {
        if !tarjan.indices.contains_key(v) {
            tarjan.strongconnect(v);
        }
    }

    let mut cycles: Vec<Vec<String>> = Vec::new();
    for mut scc in tarjan.sccs {
        if scc.len() > 1 {
            scc.sort_by_key(|v| g.node_position(v).unwrap_or(usize::MAX));
            cycles.push(scc);
        } else if !g.out_edges(&scc[0], Some(&scc[0])).is_empty() {
            cycles.push(scc);
        }
    }

    cycles.sort_by(|a, b| a.first().cmp(&b.first()));
    cycles
}
