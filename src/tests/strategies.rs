use super::{coords, grid_from_strings};
use crate::search::SearchContext;
use crate::strategy::{Discipline, PriorityKey, Strategy};
use grid_2d::Coord;

#[test]
fn astar_frontier_is_sorted_with_stable_ties() {
    let (grid, start, goal) = grid_from_strings(&["...", ".sg", "..."]);
    let mut ctx = SearchContext::new(grid.size());
    let outcome = ctx.astar(&grid, start, goal, Default::default()).unwrap();

    assert_eq!(outcome.path, coords(&[(1, 1), (2, 1)]));
    assert_eq!(outcome.cost, Some(1));
    assert_eq!(outcome.trace.len(), 2);
    assert_eq!(outcome.trace[0].visited, coords(&[(1, 1)]));
    assert!(outcome.trace[0].frontier.is_empty());
    // up, down and left all have f = 3 and stay in discovery order
    assert_eq!(outcome.trace[1].visited, coords(&[(1, 1), (2, 1)]));
    assert_eq!(outcome.trace[1].frontier, coords(&[(1, 0), (1, 2), (0, 1)]));
    assert_eq!(outcome.trace[1].expanded(), Some(goal));
}

#[test]
fn depth_first_takes_the_last_pushed_neighbour() {
    let (grid, start, goal) = grid_from_strings(&["g..", ".s.", "..."]);
    let mut ctx = SearchContext::new(grid.size());
    let outcome = ctx.depth_first(&grid, start, goal, Default::default()).unwrap();

    let expected_visited = coords(&[(1, 1), (2, 1), (2, 2), (2, 0), (0, 1), (0, 2), (0, 0)]);
    assert_eq!(outcome.trace.len(), expected_visited.len());
    for (i, frame) in outcome.trace.iter().enumerate() {
        assert_eq!(frame.visited, expected_visited[..=i].to_vec());
    }
    assert_eq!(outcome.trace[1].frontier, coords(&[(1, 0), (1, 2), (0, 1)]));
    assert_eq!(
        outcome.trace[2].frontier,
        coords(&[(1, 0), (1, 2), (0, 1), (2, 0)])
    );
    assert_eq!(outcome.trace[6].frontier, coords(&[(1, 0), (1, 2)]));
    assert_eq!(outcome.path, coords(&[(1, 1), (0, 1), (0, 0)]));
    assert_eq!(outcome.cost, Some(2));
}

#[test]
fn depth_first_keeps_the_first_discovery() {
    let (grid, start, goal) = grid_from_strings(&["g..", ".s.", "..."]);
    let mut ctx = SearchContext::new(grid.size());
    ctx.depth_first(&grid, start, goal, Default::default()).unwrap();

    // (1, 2) is rediscovered from (2, 2) and (0, 2) but keeps its first parent
    let state = ctx.node_state(Coord::new(1, 2)).unwrap();
    assert_eq!(state.parent, Some(start));
    assert_eq!(state.cost, 1);
    assert!(!state.visited);
}

#[test]
fn breadth_first_keeps_the_first_discovery() {
    let (grid, start, goal) = grid_from_strings(&["~g", "s."]);
    let mut ctx = SearchContext::new(grid.size());
    let outcome = ctx.breadth_first(&grid, start, goal, Default::default()).unwrap();

    // the goal is queued from the high ground before the cheaper route reaches it
    assert_eq!(outcome.trace[2].visited, coords(&[(0, 1), (0, 0)]));
    assert_eq!(outcome.trace[2].frontier, coords(&[(1, 1), (1, 0)]));
    assert_eq!(outcome.trace[3].visited, coords(&[(0, 1), (0, 0), (1, 1)]));
    assert_eq!(outcome.trace[3].frontier, coords(&[(1, 0)]));
    assert_eq!(outcome.path, coords(&[(0, 1), (0, 0), (1, 0)]));
    assert_eq!(outcome.cost, Some(11));

    let state = ctx.node_state(goal).unwrap();
    assert_eq!(state.parent, Some(Coord::new(0, 0)));
    assert_eq!(state.cost, 11);
    assert!(state.visited);

    let outcome = ctx.uniform_cost(&grid, start, goal, Default::default()).unwrap();
    assert_eq!(outcome.path, coords(&[(0, 1), (1, 1), (1, 0)]));
    assert_eq!(outcome.cost, Some(2));
    assert_eq!(ctx.node_state(goal).unwrap().parent, Some(Coord::new(1, 1)));
}

#[test]
fn breadth_first_drains_in_arrival_order() {
    let (grid, start, goal) = grid_from_strings(&["g..", ".s.", "..."]);
    let mut ctx = SearchContext::new(grid.size());
    let outcome = ctx.breadth_first(&grid, start, goal, Default::default()).unwrap();

    let expected_visited = coords(&[(1, 1), (1, 0), (1, 2), (0, 1), (2, 1), (0, 0)]);
    assert_eq!(outcome.trace.len(), expected_visited.len());
    for (i, frame) in outcome.trace.iter().enumerate() {
        assert_eq!(frame.visited, expected_visited[..=i].to_vec());
    }
    assert_eq!(outcome.trace[1].frontier, coords(&[(1, 2), (0, 1), (2, 1)]));
    assert_eq!(outcome.trace[5].frontier, coords(&[(2, 0), (0, 2), (2, 2)]));
    assert_eq!(outcome.path, coords(&[(1, 1), (1, 0), (0, 0)]));
    assert_eq!(outcome.cost, Some(2));
}

#[test]
fn cheapest_path_avoids_high_ground() {
    let (grid, start, goal) = grid_from_strings(&["s~g", "..."]);
    let mut ctx = SearchContext::new(grid.size());
    let cheap = coords(&[(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]);
    let direct = coords(&[(0, 0), (1, 0), (2, 0)]);

    let expectations = [
        (Strategy::AStar, &cheap, 4),
        (Strategy::UniformCost, &cheap, 4),
        (Strategy::Greedy, &direct, 11),
        (Strategy::BreadthFirst, &direct, 11),
        (Strategy::DepthFirst, &direct, 11),
    ];
    for &(strategy, path, cost) in expectations.iter() {
        let outcome = ctx
            .search(&grid, start, goal, strategy, Default::default())
            .unwrap();
        assert_eq!(&outcome.path, path, "{}", strategy);
        assert_eq!(outcome.cost, Some(cost), "{}", strategy);
    }
}

#[test]
fn greedy_orders_by_heuristic_alone() {
    let (grid, start, goal) = grid_from_strings(&["s~g", "..."]);
    let mut ctx = SearchContext::new(grid.size());
    let outcome = ctx
        .greedy_best_first(&grid, start, goal, Default::default())
        .unwrap();
    assert_eq!(outcome.trace.len(), 3);
    assert_eq!(outcome.trace[1].visited, coords(&[(0, 0), (1, 0)]));
    assert_eq!(outcome.trace[1].frontier, coords(&[(0, 1)]));
    // goal (h 0), then (1, 1) (h 2), then (0, 1) (h 3)
    assert_eq!(outcome.trace[2].frontier, coords(&[(1, 1), (0, 1)]));

    let state = ctx.node_state(Coord::new(1, 1)).unwrap();
    assert_eq!(state.cost, 11);
    assert_eq!(state.heuristic, 2);
    assert_eq!(state.priority, 2);
}

#[test]
fn strategy_capabilities() {
    assert_eq!(
        Strategy::AStar.discipline(),
        Discipline::Priority(PriorityKey::CostPlusHeuristic)
    );
    assert_eq!(
        Strategy::Greedy.discipline(),
        Discipline::Priority(PriorityKey::Heuristic)
    );
    assert_eq!(
        Strategy::UniformCost.discipline(),
        Discipline::Priority(PriorityKey::Cost)
    );
    assert_eq!(Strategy::BreadthFirst.discipline(), Discipline::Fifo);
    assert_eq!(Strategy::DepthFirst.discipline(), Discipline::Lifo);

    let informed: Vec<_> = Strategy::ALL
        .iter()
        .filter(|s| s.uses_heuristic())
        .copied()
        .collect();
    assert_eq!(informed, vec![Strategy::AStar, Strategy::Greedy]);
    assert!(!Strategy::BreadthFirst.relaxes());
    assert!(!Strategy::DepthFirst.relaxes());
    assert!(Strategy::UniformCost.relaxes());

    assert_eq!(PriorityKey::CostPlusHeuristic.key(4, 3), 7);
    assert_eq!(PriorityKey::Heuristic.key(4, 3), 3);
    assert_eq!(PriorityKey::Cost.key(4, 3), 4);
}

#[test]
fn strategy_names() {
    for &strategy in Strategy::ALL.iter() {
        assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
    }
    assert_eq!("astar".parse::<Strategy>(), Ok(Strategy::AStar));
    assert_eq!("Dijkstra".parse::<Strategy>(), Ok(Strategy::UniformCost));
    assert_eq!("depth-first".parse::<Strategy>(), Ok(Strategy::DepthFirst));
    assert_eq!("Breadth First".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
    assert!("beam".parse::<Strategy>().is_err());
}
