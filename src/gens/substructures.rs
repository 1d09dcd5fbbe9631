/*!
# Substructure Generators

Utility method to add **cliques** to an already existing graph. Missing nodes are created on the
fly; a clique on a single node adds no edges.

# Example

```rust
use netsci::{prelude::*, gens::*};

let mut g = Graph::new(5);
g.connect_clique([0, 2, 4]);
g.connect_clique([3, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 2), Edge(0, 4), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects all given nodes into a **clique** (complete subgraph).
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.iter().copied().tuple_combinations() {
            self.add_edge(u, v);
        }
    }
}
