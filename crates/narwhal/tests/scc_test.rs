use narwhal::graph::{AdjacencyList, DirectedGraph, MutableGraph};
use narwhal::{Components, Error, Tremaux, strongly_connected_components};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn components(rows: Vec<Vec<usize>>) -> Components {
    let g = AdjacencyList::from_rows(rows).unwrap();
    let t = Tremaux::compute(&g);
    Components::compute(&g, &t).unwrap()
}

#[test]
fn scc_isolates_the_node_outside_the_cycle() {
    let c = components(vec![vec![2, 3], vec![2], vec![3], vec![1]]);
    assert_eq!(c.count(), 2);
    assert_eq!(c.component(0), 1);
    for i in 1..4 {
        assert_eq!(c.component(i), 0);
    }
    assert!(c.same_component(1, 3));
    assert!(!c.same_component(0, 1));
}

#[test]
fn scc_counts_components_of_a_sparse_graph() {
    let c = components(vec![
        vec![2],
        vec![3],
        vec![5],
        vec![],
        vec![1, 3],
        vec![0],
        vec![],
        vec![],
        vec![4],
    ]);
    assert_eq!(c.count(), 7);
    assert!(c.same_component(0, 2));
    assert!(c.same_component(2, 5));
}

#[test]
fn scc_counts_components_of_the_fourteen_node_graph() {
    let c = components(vec![
        vec![13, 1, 2, 3, 4, 5, 6, 7],
        vec![8],
        vec![9],
        vec![8],
        vec![9],
        vec![10],
        vec![11],
        vec![12],
        vec![2, 4, 5, 13],
        vec![1, 3, 5, 6, 13],
        vec![6, 7],
        vec![13],
        vec![6, 13],
        vec![11, 12],
    ]);
    assert_eq!(c.count(), 6);
    assert_eq!(c.members()[4], vec![1, 2, 3, 4, 8, 9]);
    assert_eq!(c.members()[0], vec![6, 11, 12, 13]);
}

#[test]
fn scc_members_partition_the_nodes() {
    let c = components(vec![vec![1], vec![0], vec![3], vec![2], vec![]]);
    let members = c.members();
    assert_eq!(members.len(), c.count());
    let mut all: Vec<usize> = members.concat();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4]);
}

#[test]
fn scc_rejects_ordinals_from_another_edge_set() {
    let mut g = AdjacencyList::from_rows(vec![vec![1], vec![]]).unwrap();
    let t = Tremaux::compute(&g);
    g.add_edge(1, 0).unwrap();
    assert!(matches!(
        Components::compute(&g, &t),
        Err(Error::StaleTremaux { .. })
    ));
}

#[test]
fn scc_handles_a_long_cycle_without_recursion() {
    let n = 200_000;
    let rows: Vec<Vec<usize>> = (0..n).map(|i| vec![(i + 1) % n]).collect();
    let g = AdjacencyList::from_rows(rows).unwrap();
    let c = strongly_connected_components(&g);
    assert_eq!(c.count(), 1);
    assert!(c.same_component(0, n - 1));
}

fn reachability(g: &AdjacencyList) -> Vec<Vec<bool>> {
    let n = g.node_count();
    let mut reach = vec![vec![false; n]; n];
    for s in 0..n {
        let mut stack = vec![s];
        reach[s][s] = true;
        while let Some(u) = stack.pop() {
            for w in g.successors(u) {
                if !reach[s][w] {
                    reach[s][w] = true;
                    stack.push(w);
                }
            }
        }
    }
    reach
}

#[test]
fn scc_matches_mutual_reachability_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..200 {
        let n = rng.gen_range(1..25);
        let mut g = AdjacencyList::new(n);
        let edges = rng.gen_range(0..n * 3);
        for _ in 0..edges {
            g.add_edge(rng.gen_range(0..n), rng.gen_range(0..n)).unwrap();
        }

        let c = strongly_connected_components(&g);
        let reach = reachability(&g);
        for i in 0..n {
            assert!(c.component(i) < c.count());
            for j in 0..n {
                assert_eq!(
                    c.same_component(i, j),
                    reach[i][j] && reach[j][i],
                    "round {round}: nodes {i} and {j}"
                );
            }
        }
    }
}
