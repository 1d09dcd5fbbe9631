use itertools::Itertools;
use netsci::{algo::*, dynamics::*, gens::*, prelude::*};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn check_invariants(graph: &Graph) {
    let mut half_edges = 0usize;
    for u in graph.vertices() {
        for v in graph.neighbors_of(u) {
            assert_ne!(u, v);
            assert!(graph.has_edge(v, u));
            half_edges += 1;
        }
    }
    assert_eq!(half_edges, 2 * graph.number_of_edges() as usize);
}

fn conflicts_by_scan(graph: &Graph, values: &[Opinion]) -> Vec<Edge> {
    graph
        .edges(true)
        .filter(|&Edge(u, v)| values[u as usize] != values[v as usize])
        .sorted_unstable()
        .collect()
}

proptest! {
    #[test]
    fn random_edits_keep_graph_well_formed(
        n in 1u32..40,
        edits in prop::collection::vec((any::<bool>(), 0u32..40, 0u32..40), 0..200),
    ) {
        let mut graph = Graph::new(n);
        for (insert, u, v) in edits {
            if insert {
                graph.add_edge(u, v);
            } else if graph.has_node(u) && graph.has_node(v) {
                let had_edge = graph.has_edge(u, v);
                prop_assert_eq!(graph.remove_edge(u, v), Ok(had_edge));
            } else {
                prop_assert!(graph.remove_edge(u, v).is_err());
            }
            check_invariants(&graph);
        }
    }

    #[test]
    fn generators_produce_well_formed_graphs(
        seed in any::<u64>(),
        n in 0u32..60,
        p in 0.0f64..=1.0,
        k in 0u32..5,
        m in 1u32..4,
    ) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let max_edges = n * n.saturating_sub(1) / 2;

        let graphs = [
            Graph::complete(n),
            Graph::gnm(rng, n, max_edges / 3).unwrap(),
            Graph::gnp(rng, n, p).unwrap(),
            Graph::watts_strogatz(rng, n, k, p).unwrap(),
            Graph::barabasi_albert(rng, n, m, m + 1).unwrap(),
            UniformAttachment::new().nodes(n).core(m).attachments(1, m + 1).build(rng).unwrap(),
        ];

        for graph in &graphs {
            check_invariants(graph);
            prop_assert_eq!(graph.number_of_nodes(), n);
        }
        prop_assert_eq!(graphs[1].number_of_edges(), max_edges / 3);
    }

    #[test]
    fn merge_is_a_disjoint_union(seed in any::<u64>(), n1 in 0u32..30, n2 in 0u32..30) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let mut a = Graph::gnp(rng, n1, 0.2).unwrap();
        let b = Graph::gnp(rng, n2, 0.2).unwrap();
        let a_edges = a.number_of_edges();

        a.merge(&b).unwrap();
        check_invariants(&a);
        prop_assert_eq!(a.number_of_nodes(), n1 + n2);
        prop_assert_eq!(a.number_of_edges(), a_edges + b.number_of_edges());

        for Edge(u, v) in b.edges(true) {
            prop_assert!(a.has_edge(u + n1, v + n1));
        }
        prop_assert!(a.edges(true).all(|Edge(u, v)| (u < n1) == (v < n1)));
    }

    #[test]
    fn conflict_edges_match_a_full_scan(
        seed in any::<u64>(),
        n in 2u32..40,
        p in 0.05f64..0.5,
        steps in 0usize..300,
    ) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let graph = Graph::gnp(rng, n, p).unwrap();
        let mut cvg = ConflictVoteGraph::new(graph, rng).unwrap();

        for _ in 0..steps {
            let Ok(edge) = cvg.random_conflict_edge(rng) else {
                break;
            };

            if rng.random_bool(0.7) {
                cvg.vote(edge, rng).unwrap();
            } else {
                cvg.remove_edge(edge).unwrap();
            }

            prop_assert_eq!(
                cvg.conflict_edges().sorted_unstable().collect_vec(),
                conflicts_by_scan(cvg.graph(), cvg.values())
            );
        }

        check_invariants(cvg.graph());
    }

    #[test]
    fn components_partition_the_nodes(seed in any::<u64>(), n in 0u32..50) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let graph = Graph::gnp(rng, n, 0.03).unwrap();

        let components = graph.connected_components(false);
        prop_assert_eq!(components.values().sum::<NumNodes>(), n);
        prop_assert_eq!(components.values().max().copied().unwrap_or(0), graph.size_lcc());
        prop_assert_eq!(graph.largest_connected_component().number_of_nodes(), graph.size_lcc());
    }
}
