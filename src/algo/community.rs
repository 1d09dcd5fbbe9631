/*!
# Communities

Modularity of node sets and a greedy agglomerative community detection.

The modularity of a community `C` relates its inner edges to the number expected in a random graph
of density `p`:
```text
Q(C) = (inner(C) - |C| (|C| - 1) / 2 * p) / m
```
where `m` is the total number of edges and `p` defaults to the density `m / (n (n - 1) / 2)` of the
graph itself.

[`Communities::find_communities`] starts with every node as its own aggregate and repeatedly
merges an aggregate with the neighboring aggregate that yields the largest strictly higher
modularity, contracting a working copy of the graph along the way. It is a heuristic: the result
is a local optimum that depends on the order in which aggregates are visited. Aggregates are
visited by increasing id and ties are resolved in favor of the smallest neighbor id, so the result
is reproducible for a given graph.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// State of a community aggregate during contraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    /// The aggregate is alive and holds these original nodes
    Active(FxHashSet<Node>),
    /// The aggregate was absorbed by another one
    Merged,
}

/// Arena of [`Aggregate`]s, one per original node id.
#[derive(Debug, Clone, Default)]
pub struct CommunityArena {
    ids: Vec<Node>,
    index: FxHashMap<Node, usize>,
    aggregates: Vec<Aggregate>,
}

impl CommunityArena {
    /// Creates one active singleton aggregate per node
    pub fn singletons(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut arena = Self::default();
        for u in nodes {
            if arena.index.contains_key(&u) {
                continue;
            }

            arena.index.insert(u, arena.ids.len());
            arena.ids.push(u);
            arena.aggregates.push(Aggregate::Active(FxHashSet::from_iter([u])));
        }
        arena
    }

    /// Ids of all aggregates (active or not) in creation order
    pub fn ids(&self) -> &[Node] {
        &self.ids
    }

    /// Returns the aggregate with id `u`
    pub fn get(&self, u: Node) -> Option<&Aggregate> {
        self.index.get(&u).map(|&i| &self.aggregates[i])
    }

    /// Returns the members of aggregate `u` or `None` if it is unknown or merged
    pub fn members(&self, u: Node) -> Option<&FxHashSet<Node>> {
        match self.get(u)? {
            Aggregate::Active(members) => Some(members),
            Aggregate::Merged => None,
        }
    }

    /// Number of aggregates that are still active
    pub fn num_active(&self) -> usize {
        self.aggregates
            .iter()
            .filter(|a| matches!(a, Aggregate::Active(_)))
            .count()
    }

    /// Moves all members of `from` into `into` and marks `from` as merged.
    /// Returns *false* (and changes nothing) unless both aggregates are distinct and active.
    pub fn absorb(&mut self, from: Node, into: Node) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(&from), self.index.get(&into)) else {
            return false;
        };
        if i == j || !matches!(self.aggregates[j], Aggregate::Active(_)) {
            return false;
        }

        let Aggregate::Active(moved) = std::mem::replace(&mut self.aggregates[i], Aggregate::Merged)
        else {
            return false;
        };

        if let Aggregate::Active(members) = &mut self.aggregates[j] {
            members.extend(moved);
        }
        true
    }

    /// Returns the active aggregates keyed by their id
    pub fn into_communities(self) -> FxHashMap<Node, FxHashSet<Node>> {
        self.ids
            .into_iter()
            .zip(self.aggregates)
            .filter_map(|(u, aggregate)| match aggregate {
                Aggregate::Active(members) => Some((u, members)),
                Aggregate::Merged => None,
            })
            .collect()
    }
}

/// Modularity based community analysis.
pub trait Communities: AdjacencyList + AdjacencyTest + GraphEdgeOrder {
    /// Number of edges with both endpoints in `community`.
    /// Members that are not part of the graph contribute no edges.
    fn community_inner_edges<S>(&self, community: &S) -> NumEdges
    where
        S: Set<Node>,
    {
        let half_edges: usize = community
            .iter()
            .filter(|&u| self.has_node(u))
            .map(|u| {
                self.neighbors_of(u)
                    .filter(|v| community.contains(v))
                    .count()
            })
            .sum();

        (half_edges / 2) as NumEdges
    }

    /// Edge density `m / (n (n - 1) / 2)` used as default baseline for modularity
    fn edge_density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n < 2.0 {
            return 0.0;
        }
        self.number_of_edges() as f64 / (n * (n - 1.0) / 2.0)
    }

    /// Modularity of `community` with the graph's own density as baseline.
    /// `0` for graphs without edges.
    fn modularity<S>(&self, community: &S) -> f64
    where
        S: Set<Node>,
    {
        self.modularity_with_density(community, self.edge_density())
    }

    /// Modularity of `community` against a random graph of edge density `p`.
    /// `0` for graphs without edges.
    fn modularity_with_density<S>(&self, community: &S, p: f64) -> f64
    where
        S: Set<Node>,
    {
        let m = self.number_of_edges();
        if m == 0 {
            return 0.0;
        }

        let c = community.len() as f64;
        let expected = c * (c - 1.0) / 2.0 * p;
        (self.community_inner_edges(community) as f64 - expected) / m as f64
    }

    /// Greedy agglomerative community detection.
    ///
    /// Returns the surviving aggregates keyed by their representative id. Every node of the graph
    /// is member of exactly one community.
    fn find_communities(&self) -> FxHashMap<Node, FxHashSet<Node>>
    where
        Self: Clone + GraphEdgeEditing + GraphNodeEditing,
    {
        let density = self.edge_density();
        let mut contracted = self.clone();
        let mut arena = CommunityArena::singletons(self.ordered_vertices());
        let order = arena.ids().to_vec();

        for pass in 0.. {
            let mut merges = 0usize;

            for &u in &order {
                let Some(members) = arena.members(u) else {
                    continue;
                };

                let mut best_q = self.modularity_with_density(members, density);
                let mut best = None;

                for v in contracted.neighbors_of(u).sorted_unstable() {
                    let Some(other) = arena.members(v) else {
                        continue;
                    };

                    let union: FxHashSet<Node> = members.union(other).copied().collect();
                    let q = self.modularity_with_density(&union, density);
                    if q > best_q {
                        best_q = q;
                        best = Some((v, other.len()));
                    }
                }

                let Some((v, v_len)) = best else {
                    continue;
                };

                // the smaller aggregate is absorbed by the larger one
                let (from, into) = if members.len() > v_len { (v, u) } else { (u, v) };
                if !arena.absorb(from, into) {
                    continue;
                }

                let rewired = contracted
                    .neighbors_of(from)
                    .filter(|&w| w != into)
                    .collect_vec();
                for w in rewired {
                    contracted.add_edge(into, w);
                }
                let removed = contracted.remove_node(from);
                debug_assert!(removed.is_ok());

                merges += 1;
            }

            debug!(
                pass,
                merges,
                active = arena.num_active(),
                "community contraction pass"
            );
            if merges == 0 {
                break;
            }
        }

        let communities = arena.into_communities();
        debug!(communities = communities.len(), "found communities");
        communities
    }
}

impl<G> Communities for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder {}
