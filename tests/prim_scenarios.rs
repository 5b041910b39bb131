//! End-to-end traversal scenarios and algorithm properties.

use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;
use petgraph::graph::UnGraph;

use primtrace::{
    build_graph, find_path, load_graph, parse_graph, FrontierEntry, Graph, GraphFormat, MstEdge,
    PrimEngine, SimulationRunner, TraceEvent, VecSink,
};

fn graph(json: &str) -> Graph {
    build_graph(&parse_graph(json, GraphFormat::Json).unwrap()).unwrap()
}

fn entry(weight: f64, from: &str, to: &str) -> FrontierEntry {
    FrontierEntry {
        weight,
        from: from.into(),
        to: to.into(),
    }
}

#[test]
fn triangle_selects_cheapest_spanning_edges() {
    let g = graph(r#"{"nodes":["A","B","C"],"edges":[["A","B",1],["B","C",2],["A","C",5]]}"#);
    let mut sink = VecSink::new();
    let result = PrimEngine::new(&g).run("A", &mut sink).unwrap();

    assert_eq!(
        result.edges,
        vec![MstEdge::new("A", "B", 1.0), MstEdge::new("B", "C", 2.0)]
    );
    assert_eq!(result.total_weight, 3.0);
    assert!(!result.disconnected);
}

#[test]
fn triangle_full_event_sequence() {
    let g = graph(r#"{"nodes":["A","B","C"],"edges":[["A","B",1],["B","C",2],["A","C",5]]}"#);
    let mut sink = VecSink::new();
    PrimEngine::new(&g).run("A", &mut sink).unwrap();

    let ab = MstEdge::new("A", "B", 1.0);
    let bc = MstEdge::new("B", "C", 2.0);
    let expected = vec![
        TraceEvent::RunStarted {
            start: "A".into(),
            vertex_count: 3,
        },
        TraceEvent::FrontierSnapshot {
            step: 1,
            entries: vec![entry(1.0, "A", "B"), entry(5.0, "A", "C")],
        },
        TraceEvent::EdgeSelected {
            edge: ab.clone(),
            visited: vec!["A".into(), "B".into()],
            mst_edges: vec![ab.clone()],
            total_weight: 1.0,
        },
        TraceEvent::FrontierExpanded {
            from: "B".into(),
            added: vec![entry(2.0, "B", "C")],
        },
        TraceEvent::FrontierSnapshot {
            step: 2,
            entries: vec![entry(2.0, "B", "C"), entry(5.0, "A", "C")],
        },
        TraceEvent::EdgeSelected {
            edge: bc.clone(),
            visited: vec!["A".into(), "B".into(), "C".into()],
            mst_edges: vec![ab.clone(), bc.clone()],
            total_weight: 3.0,
        },
        TraceEvent::FrontierExpanded {
            from: "C".into(),
            added: vec![],
        },
        TraceEvent::RunFinished {
            total_weight: 3.0,
            edges: vec![ab, bc],
            disconnected: false,
        },
    ];
    assert_eq!(sink.events(), expected.as_slice());
}

#[test]
fn triangle_path_lookup_over_mst() {
    let g = graph(r#"{"nodes":["A","B","C"],"edges":[["A","B",1],["B","C",2],["A","C",5]]}"#);
    let result = PrimEngine::new(&g).run("A", &mut VecSink::new()).unwrap();

    let path = find_path(&result.edges, "A", "C").unwrap();
    assert_eq!(path.vertices, vec!["A", "B", "C"]);
    assert_eq!(path.weight, 3.0);
}

#[test]
fn disconnected_graph_reports_forest() {
    let g = graph(r#"{"nodes":["A","B","C"],"edges":[["A","B",1]]}"#);
    let result = PrimEngine::new(&g).run("A", &mut VecSink::new()).unwrap();

    assert!(result.disconnected);
    assert_eq!(result.visited, vec!["A", "B"]);
    assert_eq!(result.total_weight, 1.0);
    // one fewer edge than vertices in the start's component
    assert_eq!(result.edge_count(), result.visited.len() - 1);
    // the isolated vertex is never visited
    assert!(!result.visited.contains(&"C".to_string()));

    assert_eq!(find_path(&result.edges, "A", "C"), None);
}

#[test]
fn parallel_edges_compete_independently() {
    let g = graph(r#"{"edges":[["A","B",2],["A","B",1],["B","C",3]]}"#);
    let mut sink = VecSink::new();
    let result = PrimEngine::new(&g).run("A", &mut sink).unwrap();

    // the lighter duplicate wins; the heavier one is popped later, while B
    // is already attached, and narrated as a skip rather than an error
    assert_eq!(
        result.edges,
        vec![MstEdge::new("A", "B", 1.0), MstEdge::new("B", "C", 3.0)]
    );
    assert_eq!(result.total_weight, 4.0);
    let skipped = sink.events().iter().any(|e| {
        matches!(e, TraceEvent::EdgeSkipped { from, to, weight }
            if from == "A" && to == "B" && *weight == 2.0)
    });
    assert!(skipped);
    assert!(!result.disconnected);
}

#[test]
fn runs_are_deterministic() {
    let json = r#"{"edges":[["A","B",4],["A","C",2],["B","C",1],["B","D",5],["C","D",8],["C","E",10],["D","E",2]]}"#;
    let g = graph(json);
    let engine = PrimEngine::new(&g);

    let mut first = VecSink::new();
    let mut second = VecSink::new();
    let result_a = engine.run("A", &mut first).unwrap();
    let result_b = engine.run("A", &mut second).unwrap();

    assert_eq!(result_a.edges, result_b.edges);
    assert_eq!(result_a.total_weight, result_b.total_weight);
    assert_eq!(first.events(), second.events());
}

#[test]
fn connected_graph_spans_all_vertices() {
    let g = load_graph("graphs/example_graph.json").unwrap();
    let result = PrimEngine::new(&g).run("A", &mut VecSink::new()).unwrap();

    assert!(!result.disconnected);
    assert_eq!(result.edge_count(), g.vertex_count() - 1);
    assert_eq!(result.visited.len(), g.vertex_count());
}

#[test]
fn total_weight_matches_kruskal_reference() {
    let raw_edges = [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("C", "E", 10.0),
        ("D", "E", 2.0),
        ("E", "F", 3.0),
        ("D", "F", 7.0),
    ];

    let json = r#"{"edges":[["A","B",4],["A","C",2],["B","C",1],["B","D",5],["C","D",8],["C","E",10],["D","E",2],["E","F",3],["D","F",7]]}"#;
    let result = PrimEngine::new(&graph(json))
        .run("A", &mut VecSink::new())
        .unwrap();

    let mut reference = UnGraph::<&str, f64>::new_undirected();
    let mut indices = std::collections::HashMap::new();
    for (u, v, w) in raw_edges {
        let ui = *indices.entry(u).or_insert_with(|| reference.add_node(u));
        let vi = *indices.entry(v).or_insert_with(|| reference.add_node(v));
        reference.add_edge(ui, vi, w);
    }
    let kruskal_total: f64 = min_spanning_tree(&reference)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum();

    assert_eq!(result.total_weight, kruskal_total);
}

#[test]
fn start_equals_target_is_trivial_path() {
    let g = graph(r#"{"edges":[["A","B",1]]}"#);
    let result = PrimEngine::new(&g).run("A", &mut VecSink::new()).unwrap();
    let path = find_path(&result.edges, "B", "B").unwrap();
    assert_eq!(path.vertices, vec!["B"]);
    assert_eq!(path.weight, 0.0);
}

#[test]
fn runner_end_to_end_over_document_file() {
    let g = load_graph("graphs/triangle.yaml").unwrap();
    let report = SimulationRunner::builder(g)
        .start("A")
        .target("C")
        .sink(Box::new(VecSink::new()))
        .run()
        .unwrap();

    assert_eq!(report.mst.total_weight, 3.0);
    let path = report.path.unwrap();
    assert_eq!(path.vertices, vec!["A", "B", "C"]);
    assert_eq!(path.weight, 3.0);
}

#[test]
fn forest_document_run_and_path_split() {
    let g = load_graph("graphs/forest.json").unwrap();
    let report = SimulationRunner::builder(g)
        .start("A")
        .target("E")
        .sink(Box::new(VecSink::new()))
        .run()
        .unwrap();

    assert!(report.mst.disconnected);
    assert_eq!(report.mst.visited, vec!["A", "B", "C"]);
    assert!(report.path.is_none());
}
