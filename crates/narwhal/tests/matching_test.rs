use narwhal::graph::{AdjacencyList, MutableGraph};
use narwhal::{Error, Matching, greedy_matching, maximum_matching, maximum_matching_from};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn small_bipartite() -> AdjacencyList {
    AdjacencyList::from_rows(vec![vec![4, 5], vec![3, 4], vec![3], vec![], vec![], vec![]])
        .unwrap()
}

fn path_cover_graph(n: usize) -> AdjacencyList {
    let mut g = AdjacencyList::new(2 * n);
    for i in 0..n - 1 {
        g.add_edge(i, i + n).unwrap();
        g.add_edge(i, i + n + 1).unwrap();
    }
    g.add_edge(n - 1, n).unwrap();
    g
}

fn assert_is_matching_of(g: &AdjacencyList, m: &Matching) {
    assert!(m.is_injective());
    for (end, start) in m.iter() {
        assert!(g.edges(start).contains(&end), "{start} -> {end} is not an edge");
    }
}

#[test]
fn greedy_matching_takes_first_free_end() {
    let m = greedy_matching(&small_bipartite(), 3).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(3), Some(1));
    assert_eq!(m.get(4), Some(0));
    assert_eq!(m.get(5), None);
}

#[test]
fn maximum_matching_improves_on_greedy() {
    let g = small_bipartite();
    let m = maximum_matching(&g, 3).unwrap();
    assert_eq!(m.len(), 3);
    assert_is_matching_of(&g, &m);
}

#[test]
fn maximum_matching_covers_the_path_graph() {
    let n = 1000;
    let g = path_cover_graph(n);
    let m = maximum_matching(&g, n).unwrap();
    assert_eq!(m.len(), n);
    assert_is_matching_of(&g, &m);
}

#[test]
fn maximum_matching_from_an_empty_matching() {
    let g = path_cover_graph(50);
    let m = maximum_matching_from(&g, 50, Matching::new(50, 100)).unwrap();
    assert_eq!(m.len(), 50);
}

#[test]
fn matching_rejects_invalid_partitions() {
    let g = small_bipartite();
    assert_eq!(
        greedy_matching(&g, 7),
        Err(Error::InvalidPartition {
            first_end: 7,
            node_count: 6
        })
    );
    assert_eq!(
        maximum_matching(&g, 1),
        Err(Error::NotBipartite { start: 1, end: 3 })
    );
    assert!(matches!(
        maximum_matching_from(&g, 3, Matching::new(2, 6)),
        Err(Error::InvalidPartition { .. })
    ));
}

#[test]
fn matching_rejects_edges_between_start_nodes() {
    let g = AdjacencyList::from_rows(vec![vec![1], vec![2], vec![]]).unwrap();
    assert_eq!(
        maximum_matching(&g, 2),
        Err(Error::NotBipartite { start: 0, end: 1 })
    );
}

#[test]
fn matching_insert_and_remove_track_len() {
    let mut m = Matching::new(2, 5);
    assert!(m.is_empty());
    assert_eq!(m.insert(3, 0), None);
    assert_eq!(m.insert(3, 1), Some(0));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get(0), None);
    assert_eq!(m.remove(3), Some(1));
    assert_eq!(m.remove(3), None);
    assert!(m.is_empty());
}

fn brute_force_maximum(g: &AdjacencyList, first_end: usize) -> usize {
    fn go(g: &AdjacencyList, u: usize, first_end: usize, used: &mut Vec<bool>) -> usize {
        if u == first_end {
            return 0;
        }
        let mut best = go(g, u + 1, first_end, used);
        for &v in g.edges(u) {
            if !used[v] {
                used[v] = true;
                best = best.max(1 + go(g, u + 1, first_end, used));
                used[v] = false;
            }
        }
        best
    }
    let mut used = vec![false; g.rows().len()];
    go(g, 0, first_end, &mut used)
}

#[test]
fn maximum_matching_is_maximum_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(11);
    for round in 0..200 {
        let starts = rng.gen_range(1..7);
        let ends = rng.gen_range(1..7);
        let mut g = AdjacencyList::new(starts + ends);
        for u in 0..starts {
            for v in starts..starts + ends {
                if rng.gen_bool(0.35) {
                    g.add_edge(u, v).unwrap();
                }
            }
        }

        let greedy = greedy_matching(&g, starts).unwrap();
        let best = maximum_matching(&g, starts).unwrap();
        assert_is_matching_of(&g, &best);
        assert!(best.len() >= greedy.len(), "round {round}");
        assert_eq!(best.len(), brute_force_maximum(&g, starts), "round {round}");
    }
}

#[test]
fn maximum_matching_from_rejects_starts_outside_the_partition() {
    let g = AdjacencyList::from_rows(vec![vec![2], vec![3], vec![], vec![]]).unwrap();
    let mut initial = Matching::new(2, 4);
    initial.insert(2, 7);
    assert_eq!(
        maximum_matching_from(&g, 2, initial),
        Err(Error::InvalidMatching { start: 7, end: 2 })
    );
}

#[test]
fn maximum_matching_from_rejects_pairs_that_are_not_edges() {
    let g = AdjacencyList::from_rows(vec![vec![2], vec![2], vec![], vec![]]).unwrap();
    let mut initial = Matching::new(2, 4);
    initial.insert(3, 0);
    assert_eq!(
        maximum_matching_from(&g, 2, initial),
        Err(Error::InvalidMatching { start: 0, end: 3 })
    );
}

#[test]
fn maximum_matching_from_rejects_a_start_used_twice() {
    let g = AdjacencyList::from_rows(vec![vec![2, 3], vec![3], vec![], vec![]]).unwrap();
    let mut initial = Matching::new(2, 4);
    initial.insert(2, 0);
    initial.insert(3, 0);
    assert!(!initial.is_injective());
    assert_eq!(
        maximum_matching_from(&g, 2, initial),
        Err(Error::InvalidMatching { start: 0, end: 3 })
    );
}

#[test]
fn maximum_matching_from_grows_a_valid_partial_matching() {
    let g = AdjacencyList::from_rows(vec![vec![2, 3], vec![2], vec![], vec![]]).unwrap();
    let mut initial = Matching::new(2, 4);
    initial.insert(2, 0);
    let m = maximum_matching_from(&g, 2, initial).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(2), Some(1));
    assert_eq!(m.get(3), Some(0));
}
