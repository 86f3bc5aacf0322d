#[cfg(test)]
mod tests {
    use std::time::Duration;

    use strum::VariantArray;

    use crate::builder::{LevelBuilder, LevelError};
    use crate::hint::{HintError, HintPath, FADE_IN, PAUSE, SEGMENT};
    use crate::level::{Difficulty, Level};
    use crate::levels;
    use crate::point::{NodeId, Point};
    use crate::session::{Overlay, Screen, Session, SettingsView};
    use crate::solver::{find_eulerian_trail, SolverFailure, SolverLimits, TrailSolver};
    use crate::trace::{StepOutcome, Trace};
    use crate::trail::Trail;

    // positions are irrelevant to solving; spread nodes along a diagonal
    fn graph(nodes: u32, edges: &[(u32, u32)]) -> Level {
        let mut builder = LevelBuilder::new("test", Difficulty::Easy);
        for id in 0..nodes {
            let t = f64::from(id) / f64::from(nodes.max(2) - 1);
            builder.add_node(id, (t, t));
        }
        for (from, to) in edges {
            builder.add_edge(*from, *to);
        }

        builder.build().unwrap()
    }

    fn trail(nodes: &[NodeId]) -> Trail {
        Trail::from(nodes.to_vec())
    }

    fn assert_solution(level: &Level, trail: &Trail) {
        assert_eq!(trail.len(), level.edges().len() + 1, "{trail}");
        assert!(trail.covers(level), "{trail} does not cover {level}");
    }

    #[test]
    fn triangle_circuit() {
        let level = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(level.odd_nodes().is_empty());

        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0, 1, 2, 0]);
        assert!(trail.is_circuit());
        assert_solution(&level, &trail);
    }

    #[test]
    fn open_path_runs_between_odd_nodes() {
        let level = graph(4, &[(0, 1), (1, 2), (2, 3), (1, 3)]);
        assert_eq!(level.degrees(), vec![(0, 1), (1, 3), (2, 2), (3, 2)]);
        assert_eq!(level.odd_nodes(), vec![0, 1]);

        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0, 1, 2, 3, 1]);
        assert_solution(&level, &trail);
    }

    #[test]
    fn disconnected_has_no_trail() {
        let level = graph(4, &[(0, 1), (2, 3)]);
        assert!(!level.is_connected());
        assert_eq!(find_eulerian_trail(&level), None);
        assert_eq!(TrailSolver::from(&level).solve(), Err(SolverFailure::NoSolutionFound));
    }

    #[test]
    fn four_odd_nodes_has_no_trail() {
        // a star with four spokes
        let level = graph(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(level.odd_nodes(), vec![1, 2, 3, 4]);
        assert!(!level.has_eulerian_trail());
        assert_eq!(find_eulerian_trail(&level), None);
    }

    #[test]
    fn complete_graph_on_four_has_no_trail() {
        let level = graph(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(level.odd_nodes().len(), 4);
        assert_eq!(find_eulerian_trail(&level), None);
    }

    #[test]
    fn isolated_first_node_blocks_a_circuit() {
        let level = graph(4, &[(1, 2), (2, 3), (3, 1)]);
        assert!(level.odd_nodes().is_empty());
        assert!(level.is_connected());
        assert!(!level.has_eulerian_trail());
        assert_eq!(find_eulerian_trail(&level), None);

        // an isolated node elsewhere does not matter
        let level = graph(4, &[(0, 1), (1, 2), (2, 0)]);
        assert!(level.has_eulerian_trail());
        assert_eq!(find_eulerian_trail(&level).unwrap().nodes(), &[0, 1, 2, 0]);

        // nor when the trail starts on an odd node
        let level = graph(4, &[(1, 2), (2, 3)]);
        assert!(level.has_eulerian_trail());
        assert_eq!(find_eulerian_trail(&level).unwrap().nodes(), &[1, 2, 3]);
    }

    #[test]
    fn edgeless_level_is_a_single_node() {
        let level = graph(1, &[]);
        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0]);
        assert!(level.is_connected());
        assert!(level.has_eulerian_trail());
    }

    #[test]
    fn search_backtracks_out_of_dead_ends() {
        // the first edge out of 1 leads straight into the pendant node 3
        let level = graph(4, &[(1, 3), (0, 1), (1, 2), (2, 0)]);
        assert_eq!(level.odd_nodes(), vec![1, 3]);

        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[1, 0, 2, 1, 3]);
        assert_solution(&level, &trail);
    }

    #[test]
    fn parallel_edges_are_each_traversed() {
        let level = graph(3, &[(0, 1), (0, 1), (1, 2), (1, 2)]);
        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0, 1, 2, 1, 0]);
        assert_solution(&level, &trail);
    }

    #[test]
    fn self_loop_counts_twice() {
        let level = graph(2, &[(0, 1), (1, 1)]);
        assert_eq!(level.degrees(), vec![(0, 1), (1, 3)]);

        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0, 1, 1]);
        assert_solution(&level, &trail);
    }

    #[test]
    fn solving_is_deterministic() {
        let level = levels::get(24).unwrap().unwrap();
        let first = find_eulerian_trail(&level).unwrap();
        let second = find_eulerian_trail(&level).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.nodes(), &[0, 1, 2, 3, 4, 5, 0, 6, 1, 3, 7, 4, 0]);
    }

    #[test]
    fn solver_is_reusable() {
        // two odd nodes but two components: both starts are exhausted
        let level = graph(5, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 3), (3, 4)]);
        assert_eq!(level.odd_nodes(), vec![3, 4]);

        let solver = TrailSolver::from(&level);
        assert_eq!(solver.solve(), Err(SolverFailure::NoSolutionFound));
        assert_eq!(solver.solve(), Err(SolverFailure::NoSolutionFound));

        let level = graph(4, &[(3, 2), (2, 1), (1, 0), (0, 2)]);
        let solver = TrailSolver::from(&level);
        let first = solver.solve().unwrap();
        assert_eq!(first.nodes(), &[2, 1, 0, 2, 3]);
        assert_eq!(solver.solve(), Ok(first));
    }

    #[test]
    fn oversized_levels_are_refused() {
        let level = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let solver = TrailSolver::from(&level).with_limits(SolverLimits { max_edges: 2, ..Default::default() });
        assert_eq!(solver.solve(), Err(SolverFailure::TooLarge { edges: 3, limit: 2 }));
    }

    #[test]
    fn step_budget_stops_the_search() {
        let level = graph(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let solver = TrailSolver::from(&level).with_limits(SolverLimits { max_steps: 5, ..Default::default() });
        assert_eq!(solver.solve(), Err(SolverFailure::BudgetExhausted(5)));
    }

    #[test]
    fn every_built_in_level_solves() {
        let pack = levels::load().unwrap();
        assert_eq!(pack.len(), levels::count());
        assert_eq!(pack.len(), 25);

        for level in &pack {
            assert!(level.has_eulerian_trail(), "{level}");
            let trail = find_eulerian_trail(level).unwrap_or_else(|| panic!("no trail for {level}"));
            assert_solution(level, &trail);

            let hint = HintPath::plan(level, &trail).unwrap();
            assert_eq!(hint.segments().len(), level.edges().len());
        }

        assert!(levels::get(levels::count()).is_none());
    }

    #[test]
    fn built_in_odd_levels_start_on_an_odd_node() {
        for level in levels::load().unwrap() {
            let odd = level.odd_nodes();
            let trail = find_eulerian_trail(&level).unwrap();
            if odd.is_empty() {
                assert_eq!(trail.start(), Some(level.nodes()[0].id), "{level}");
                assert!(trail.is_circuit(), "{level}");
            } else {
                assert!(odd.contains(&trail.start().unwrap()), "{level}");
                assert!(odd.contains(&trail.end().unwrap()), "{level}");
            }
        }
    }

    #[test]
    fn builder_rejects_malformed_levels() {
        let invalid = LevelBuilder::new("broken", Difficulty::Hard)
            .add_node(0, (0.5, 0.5))
            .add_node(1, (0.2, 0.2))
            .add_edge(0, 1)
            .add_edge(1, 7)
            .build()
            .unwrap_err();
        assert_eq!(invalid.reasons, vec![LevelError::UnknownEndpoint { from: 1, to: 7, missing: 7 }]);
        assert_eq!(invalid.to_string(), "level \"broken\" is malformed: edge 1-7 refers to missing node 7");

        let invalid = LevelBuilder::new("twins", Difficulty::Easy)
            .add_node(0, (0.5, 0.5))
            .add_node(0, (0.2, 0.2))
            .add_node(1, (2.0, 0.2))
            .build()
            .unwrap_err();
        // the builder stops accepting changes after the first problem
        assert_eq!(invalid.reasons, vec![LevelError::DuplicateNode(0)]);

        let invalid = LevelBuilder::new("offside", Difficulty::Easy)
            .add_node(0, (0.5, 0.5))
            .add_node(1, (0.2, 0.2))
            .add_curve(0, 1, (-0.1, 0.5))
            .build()
            .unwrap_err();
        assert_eq!(invalid.reasons, vec![LevelError::ControlOutOfRange { from: 0, to: 1, control: Point::new(-0.1, 0.5) }]);

        let invalid = LevelBuilder::new("void", Difficulty::Easy).build().unwrap_err();
        assert_eq!(invalid.reasons, vec![LevelError::Empty]);
    }

    #[test]
    fn builder_validity_and_pop() {
        let mut builder = LevelBuilder::new("draft", Difficulty::Medium);
        builder.add_node(0, (0.1, 0.1)).add_node(1, (0.9, 0.9)).add_edge(0, 1).add_edge(1, 0);
        assert!(builder.is_valid().is_none());

        let level = builder.pop_edge().build().unwrap();
        assert_eq!(level.edges().len(), 1);
        assert_eq!(level.to_string(), "draft [Medium]: 2 nodes, 1 edges");

        builder.add_node(2, (1.5, 0.0));
        assert_eq!(builder.is_valid().map(|reasons| reasons.len()), Some(1));
    }

    #[test]
    fn hint_maps_parallel_curves_in_order() {
        let level = LevelBuilder::new("Lens", Difficulty::Easy)
            .add_node(0, (0.2, 0.5))
            .add_node(1, (0.8, 0.5))
            .add_curve(0, 1, (0.5, 0.2))
            .add_curve(1, 0, (0.5, 0.8))
            .build()
            .unwrap();

        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0, 1, 0]);

        let hint = HintPath::plan(&level, &trail).unwrap();
        let segments = hint.segments();
        assert_eq!(segments[0].edge, 0);
        assert_eq!(segments[0].control, Point::new(0.5, 0.2));
        assert_eq!(segments[1].edge, 1);
        assert_eq!((segments[1].from, segments[1].to), (1, 0));
        assert_eq!(segments[1].control, Point::new(0.5, 0.8));
    }

    #[test]
    fn hint_straight_edges_use_start_as_control() {
        let level = levels::get(0).unwrap().unwrap();
        let trail = find_eulerian_trail(&level).unwrap();
        let hint = HintPath::plan(&level, &trail).unwrap();

        for segment in hint.segments() {
            assert_eq!(segment.control, segment.start);
        }
        assert_eq!(hint.origin(), Point::new(0.2, 0.8));
    }

    #[test]
    fn hint_rejects_foreign_trails() {
        let level = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(HintPath::plan(&level, &trail(&[0, 1, 0])), Err(HintError::UnknownEdge { from: 1, to: 0 }));
        assert_eq!(HintPath::plan(&level, &trail(&[0, 9])), Err(HintError::UnknownEdge { from: 0, to: 9 }));
        assert_eq!(HintPath::plan(&level, &trail(&[9])), Err(HintError::UnknownNode(9)));
        assert_eq!(HintPath::plan(&level, &trail(&[])), Err(HintError::EmptyTrail));
    }

    #[test]
    fn hint_timeline() {
        let level = graph(2, &[(0, 1)]);
        let trail = find_eulerian_trail(&level).unwrap();
        let hint = HintPath::plan(&level, &trail).unwrap();
        assert_eq!(hint.duration(), Duration::from_millis(300 + 750 + 500));

        let fading_in = hint.frame_at(Duration::from_millis(150)).unwrap();
        assert_eq!(fading_in.position, Point::new(0.0, 0.0));
        assert!((fading_in.opacity - 0.5).abs() < 1e-9);

        // halfway along the segment the easing is symmetric
        let midway = hint.frame_at(FADE_IN + SEGMENT / 2).unwrap();
        assert!(midway.position.distance_to(Point::new(0.25, 0.25)) < 1e-9, "{}", midway.position);
        assert_eq!(midway.opacity, 1.0);

        let resting = hint.frame_at(FADE_IN + SEGMENT + PAUSE / 2).unwrap();
        assert_eq!(resting.position, Point::new(1.0, 1.0));

        let fading_out = hint.frame_at(Duration::from_millis(300 + 750 + 250)).unwrap();
        assert_eq!(fading_out.position, Point::new(1.0, 1.0));
        assert!((fading_out.opacity - 0.5).abs() < 1e-9);

        assert_eq!(hint.position_at(hint.duration()), None);
        assert_eq!(hint.frame_at(Duration::MAX), None);
    }

    #[test]
    fn hint_timeline_walks_every_segment() {
        let level = graph(3, &[(0, 1), (1, 2)]);
        let trail = find_eulerian_trail(&level).unwrap();
        assert_eq!(trail.nodes(), &[0, 1, 2]);
        let hint = HintPath::plan(&level, &trail).unwrap();
        assert_eq!(hint.duration(), Duration::from_millis(300 + 2 * 750 + 500));

        let second = FADE_IN + SEGMENT + PAUSE;
        assert_eq!(hint.position_at(second), Some(Point::new(0.5, 0.5)));

        // control on the start point, so the curve covers t^2 of the way
        let midway = hint.frame_at(second + SEGMENT / 2).unwrap();
        assert!(midway.position.distance_to(Point::new(0.625, 0.625)) < 1e-9, "{}", midway.position);
        assert_eq!(midway.opacity, 1.0);

        assert_eq!(hint.position_at(second + SEGMENT + PAUSE / 2), Some(Point::new(1.0, 1.0)));
        assert_eq!(hint.position_at(Duration::MAX), None);
    }

    #[test]
    fn trace_wins_only_after_every_edge() {
        let level = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let mut trace = Trace::new(&level);

        assert_eq!(trace.step_to(1), StepOutcome::NotDrawing);
        trace.begin(0);
        assert_eq!(trace.step_to(0), StepOutcome::SameNode);
        assert_eq!(trace.step_to(1), StepOutcome::Extended);
        assert_eq!(trace.step_to(0), StepOutcome::Exhausted);
        assert_eq!(trace.step_to(2), StepOutcome::Extended);
        assert!((trace.progress() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(trace.step_to(0), StepOutcome::Completed);
        assert!(trace.is_complete());

        trace.release();
        assert!(trace.is_complete());
        assert_eq!(trace.visited_edges().len(), 3);
    }

    #[test]
    fn trace_release_discards_unfinished_stroke() {
        let level = graph(4, &[(0, 1), (1, 2), (2, 3), (1, 3)]);
        let mut trace = Trace::new(&level);

        trace.begin(0);
        assert_eq!(trace.step_to(2), StepOutcome::NotAdjacent);
        assert_eq!(trace.step_to(1), StepOutcome::Extended);
        trace.release();
        assert_eq!(trace.progress(), 0.0);
        assert_eq!(trace.current(), None);

        // a solver trail replays as a winning stroke
        let trail = find_eulerian_trail(&level).unwrap();
        trace.begin(trail.start().unwrap());
        let outcomes: Vec<StepOutcome> = trail.nodes()[1..].iter().map(|node| trace.step_to(*node)).collect();
        assert_eq!(outcomes.last(), Some(&StepOutcome::Completed));
    }

    #[test]
    fn trace_counts_parallel_edges() {
        let level = graph(2, &[(0, 1), (1, 0)]);
        let mut trace = Trace::new(&level);
        trace.begin(0);
        assert_eq!(trace.step_to(1), StepOutcome::Extended);
        assert_eq!(trace.step_to(0), StepOutcome::Completed);
    }

    #[test]
    fn session_flow_through_the_pack() {
        let mut session = Session::new(2);
        assert_eq!(session.screen(), Screen::Splash);
        assert!(!session.accepts_input());
        assert!(!session.win());

        assert!(session.start());
        assert!(session.accepts_input());
        assert!(session.win());
        assert_eq!(session.screen(), Screen::Won { level: 0 });

        assert!(session.next_level());
        assert_eq!(session.screen(), Screen::Playing { level: 1, overlay: None });
        assert_eq!(session.saved_level(), "1");

        assert!(session.win());
        assert!(session.next_level());
        assert_eq!(session.screen(), Screen::Finished);
        assert!(!session.next_level());

        assert!(session.reset());
        assert_eq!(session.screen(), Screen::Playing { level: 0, overlay: None });
    }

    #[test]
    fn session_overlays_are_exclusive() {
        let mut session = Session::new(3);
        assert!(!session.toggle_help());
        session.start();

        assert!(session.toggle_help());
        assert!(!session.accepts_input());
        assert!(session.toggle_settings());
        assert_eq!(session.screen(), Screen::Playing { level: 0, overlay: Some(Overlay::Settings(SettingsView::Menu)) });
        assert!(session.show_privacy());
        assert_eq!(session.screen(), Screen::Playing { level: 0, overlay: Some(Overlay::Settings(SettingsView::Privacy)) });
        assert!(session.close_overlay());
        assert!(!session.close_overlay());

        assert!(session.toggle_settings());
        assert_eq!(session.screen(), Screen::Playing { level: 0, overlay: Some(Overlay::Settings(SettingsView::Menu)) });
        assert!(session.toggle_settings());
        assert!(session.accepts_input());
        assert!(!session.show_privacy());
    }

    #[test]
    fn session_gates_hints() {
        let mut session = Session::new(3);
        assert!(!session.begin_hint());
        session.start();

        assert!(session.begin_hint());
        assert!(!session.begin_hint());
        assert!(!session.accepts_input());
        assert!(!session.win());

        session.end_hint();
        assert!(session.accepts_input());
        assert!(session.win());
        assert!(!session.begin_hint());
    }

    #[test]
    fn session_restores_saved_level() {
        assert_eq!(Session::restore("3", 25).level(), 3);
        assert_eq!(Session::restore(" 24\n", 25).level(), 24);
        assert_eq!(Session::restore("25", 25).level(), 0);
        assert_eq!(Session::restore("-1", 25).level(), 0);
        assert_eq!(Session::restore("three", 25).level(), 0);
        assert_eq!(Session::restore("", 25).level(), 0);
        // leading digits win, as a saved "3.0" or "3abc" still means level 3
        assert_eq!(Session::restore("3.0", 25).level(), 3);
        assert_eq!(Session::restore("3abc", 25).level(), 3);
        assert_eq!(Session::restore("+7", 25).level(), 7);
        assert_eq!(Session::restore("99 bottles", 25).level(), 0);

        let mut session = Session::restore("4", 25);
        session.start();
        assert_eq!(session.screen(), Screen::Playing { level: 4, overlay: None });
    }

    #[test]
    fn pack_uses_every_difficulty() {
        let pack = levels::load().unwrap();
        for difficulty in Difficulty::VARIANTS {
            assert!(pack.iter().any(|level| level.difficulty() == *difficulty), "{difficulty}");
        }

        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("Impossible".parse::<Difficulty>().is_err());
        assert_eq!(pack[0].name(), "The Beginning");
    }

    #[test]
    fn edge_helpers() {
        let level = graph(3, &[(0, 1), (2, 2)]);
        let (straight, looped) = (level.edges()[0], level.edges()[1]);

        assert!(straight.joins(1, 0));
        assert_eq!(straight.other_end(0), Some(1));
        assert_eq!(straight.other_end(1), Some(0));
        assert_eq!(straight.other_end(2), None);
        assert!(!straight.is_loop());

        assert!(looped.is_loop());
        assert_eq!(looped.other_end(2), Some(2));
        assert_eq!(level.edges_between(2, 2).count(), 1);
        assert_eq!(level.node(2).map(|node| node.position), Some(Point::new(1.0, 1.0)));
        assert!(level.node(3).is_none());
    }

    #[test]
    fn petgraph_view_keeps_multiplicity() {
        let level = graph(2, &[(0, 1), (1, 0), (1, 1)]);
        let graph = level.graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weights().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
