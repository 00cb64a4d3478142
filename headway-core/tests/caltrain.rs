//! End-to-end tests over a small Caltrain-style fixture feed.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use headway_core::prelude::*;

fn fixture_config() -> FeedConfig {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("caltrain");
    FeedConfig::new(dir, NaiveDate::from_ymd_opt(2009, 8, 7).unwrap())
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2009, 8, 7)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn wide_window() -> TimeDelta {
    TimeDelta::seconds(1_000_000_000)
}

fn load_graph() -> Graph {
    let mut graph = Graph::new();
    load_feed(&fixture_config(), &mut graph).unwrap();
    graph
}

fn load_kao_graph() -> KaoGraph {
    let mut graph = KaoGraph::new();
    load_feed(&fixture_config(), &mut graph).unwrap();
    graph
}

fn arrival_second(graph: &Graph, path: &GraphPath) -> i64 {
    let last = path.last_edge().expect("path has no edges");
    graph
        .payload(last)
        .and_then(EdgePayload::as_hop)
        .expect("last edge is not a hop")
        .arrival_second_of_day()
}

#[test]
fn feed_loads_every_stop_and_hop() {
    let graph = load_graph();
    assert_eq!(graph.vertex_count(), 8);
    // One hop per consecutive stop-time pair of each trip.
    assert_eq!(graph.edge_count(), 9);

    let millbrae = graph.vertex("Millbrae Caltrain").unwrap();
    assert_eq!(graph.out_degree(millbrae), 3);
    assert_eq!(graph.in_degree(millbrae), 0);

    // Listed in the feed but served by no trip.
    let gilroy = graph.vertex("Gilroy Caltrain").unwrap();
    assert_eq!(graph.out_degree(gilroy), 0);
    assert_eq!(graph.in_degree(gilroy), 0);
}

#[test]
fn kao_graph_registers_hops_in_the_flat_list() {
    let kg = load_kao_graph();
    assert_eq!(kg.hop_count(), 9);
    assert_eq!(kg.graph().edge_count(), 9);
}

#[test]
fn dijkstra_finds_the_earliest_mountain_view_arrival() {
    let graph = load_graph();
    let tree = shortest_path_tree(
        &graph,
        "Millbrae Caltrain",
        Some("Mountain View Caltrain"),
        State::new(noon()),
        &WalkOptions::default(),
    )
    .unwrap();

    let destination = graph.vertex("Mountain View Caltrain").unwrap();
    let path = tree.path(destination).unwrap();
    assert_eq!(arrival_second(&graph, &path), 48540);

    // 89 minutes door to door, all of it wait + ride.
    assert_eq!(tree.vertex(destination).unwrap().weight(), 5340);
}

#[test]
fn kao_reports_the_same_arrival_as_dijkstra() {
    let kg = load_kao_graph();
    let tree = earliest_arrival_tree(&kg, noon(), "Millbrae Caltrain", wide_window()).unwrap();

    let destination = kg.vertex("Mountain View Caltrain").unwrap();
    let path = tree.path(destination).unwrap();
    assert_eq!(arrival_second(kg.graph(), &path), 48540);
}

#[test]
fn sorted_edges_spans_first_departure_to_last_arrival() {
    let kg = load_kao_graph();
    let options = kg.sorted_edges(noon(), wide_window()).unwrap();

    // The already-departed 11:40 run is pruned, everything else survives.
    assert_eq!(options.len(), 8);

    let first_hop = kg
        .graph()
        .payload(options[0].edge())
        .and_then(EdgePayload::as_hop)
        .unwrap();
    assert_eq!(first_hop.departure_second_of_day(), 43200);

    let last_hop = kg
        .graph()
        .payload(options[options.len() - 1].edge())
        .and_then(EdgePayload::as_hop)
        .unwrap();
    assert_eq!(last_hop.arrival_second_of_day(), 82260);

    for pair in options.windows(2) {
        assert!(pair[0].time_to_arrival() <= pair[1].time_to_arrival());
    }
    for option in &options {
        assert!(option.time_to_arrival() <= wide_window());
    }
}

#[test]
fn kao_with_zero_window_keeps_only_the_root() {
    let kg = load_kao_graph();
    let tree = earliest_arrival_tree(&kg, noon(), "Millbrae Caltrain", TimeDelta::zero()).unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), kg.vertex("Millbrae Caltrain").unwrap());
}

#[test]
fn an_infeasible_transfer_never_enters_either_tree() {
    // The 12:30 Palo Alto shuttle leaves before the local from Millbrae
    // arrives at 12:40, so Sunnyvale is only reachable on the 22:21
    // evening run.
    let graph = load_graph();
    let spt = shortest_path_tree(
        &graph,
        "Millbrae Caltrain",
        None,
        State::new(noon()),
        &WalkOptions::default(),
    )
    .unwrap();
    let sunnyvale = graph.vertex("Sunnyvale Caltrain").unwrap();
    assert_eq!(
        spt.vertex(sunnyvale).unwrap().state().time(),
        noon().date().and_hms_opt(22, 30, 0).unwrap()
    );

    let kg = load_kao_graph();
    let tree = earliest_arrival_tree(&kg, noon(), "Millbrae Caltrain", wide_window()).unwrap();
    let sunnyvale = kg.vertex("Sunnyvale Caltrain").unwrap();
    assert_eq!(
        tree.state(sunnyvale).unwrap().time(),
        noon().date().and_hms_opt(22, 30, 0).unwrap()
    );
}

#[test]
fn replaying_parent_chains_reproduces_recorded_states() {
    let graph = load_graph();
    let spt = shortest_path_tree(
        &graph,
        "Millbrae Caltrain",
        None,
        State::new(noon()),
        &WalkOptions::default(),
    )
    .unwrap();

    for vertex in spt.vertices() {
        let mut replayed = State::new(noon());
        for edge in spt.path(vertex).unwrap().edges {
            let payload = graph.payload(edge).unwrap();
            replayed = payload.walk(&replayed, &WalkOptions::default()).unwrap();
        }
        assert_eq!(&replayed, spt.vertex(vertex).unwrap().state());
    }

    let kg = load_kao_graph();
    let tree = earliest_arrival_tree(&kg, noon(), "Millbrae Caltrain", wide_window()).unwrap();
    for vertex in tree.vertices() {
        let mut replayed = State::new(noon());
        for edge in tree.path(vertex).unwrap().edges {
            let payload = kg.graph().payload(edge).unwrap();
            replayed = payload.walk(&replayed, &WalkOptions::default()).unwrap();
        }
        assert_eq!(&replayed, tree.state(vertex).unwrap());
    }
}

#[test]
fn identical_queries_produce_identical_trees() {
    let graph = load_graph();
    let run = || {
        shortest_path_tree(
            &graph,
            "Millbrae Caltrain",
            None,
            State::new(noon()),
            &WalkOptions::default(),
        )
        .unwrap()
    };
    let first = run();
    let second = run();

    assert_eq!(first.len(), second.len());
    for vertex in first.vertices() {
        assert_eq!(
            first.vertex(vertex).unwrap().state(),
            second.vertex(vertex).unwrap().state()
        );
        assert_eq!(
            first.vertex(vertex).unwrap().incoming(),
            second.vertex(vertex).unwrap().incoming()
        );
    }

    let kg = load_kao_graph();
    let kao_run = || earliest_arrival_tree(&kg, noon(), "Millbrae Caltrain", wide_window()).unwrap();
    let first = kao_run();
    let second = kao_run();

    assert_eq!(first.len(), second.len());
    for vertex in first.vertices() {
        assert_eq!(first.parent(vertex), second.parent(vertex));
        assert_eq!(first.state(vertex), second.state(vertex));
    }
}

#[test]
fn unreachable_stops_yield_empty_results_not_errors() {
    let graph = load_graph();
    let tree = shortest_path_tree(
        &graph,
        "Millbrae Caltrain",
        None,
        State::new(noon()),
        &WalkOptions::default(),
    )
    .unwrap();

    let gilroy = graph.vertex("Gilroy Caltrain").unwrap();
    assert!(!tree.contains(gilroy));
    assert!(tree.path(gilroy).is_none());
}

#[test]
fn unknown_labels_are_lookup_errors() {
    let graph = load_graph();
    let result = shortest_path_tree(
        &graph,
        "Emeryville Amtrak",
        None,
        State::new(noon()),
        &WalkOptions::default(),
    );
    assert!(matches!(result, Err(Error::UnknownVertex(_))));
}
