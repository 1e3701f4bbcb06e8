//! End-to-end episodes: a `SweepAgent` driven through `GridWorld` mazes.

use std::collections::VecDeque;

use proptest::prelude::*;
use sweep_agent::{AgentConfig, PhaseKind, SweepAgent};
use sweep_core::{Action, Direction, Position};
use sweep_test_utils::{fixtures, run_episode, GridWorld};

fn agent_for(world: &GridWorld) -> SweepAgent {
    SweepAgent::new(AgentConfig::new(world.side())).unwrap()
}

/// Check the frontier count after a discovering tick.
///
/// The count reaches zero at most once and never comes back. Once it is
/// zero, the next tick that decides a move must hand over; only a Suck
/// may keep the agent discovering with an empty frontier.
fn track_frontier(agent: &SweepAgent, action: Action, emptied: &mut bool) {
    let count = agent.frontier_count().expect("agent is discovering");
    if count == 0 {
        assert!(
            !*emptied || action == Action::Suck,
            "frontier empty but no hand-over on tick {}",
            agent.ticks()
        );
        *emptied = true;
    } else {
        assert!(!*emptied, "frontier reopened on tick {}", agent.ticks());
    }
}

/// Tick until the agent switches to coverage. Returns the action taken
/// on the hand-over tick and the number of ticks used.
fn discover(agent: &mut SweepAgent, world: &mut GridWorld, limit: usize) -> (Action, usize) {
    let mut emptied = false;
    for tick in 1..=limit {
        let action = run_episode(agent, world, 1)[0];
        if agent.phase() == PhaseKind::Covering {
            return (action, tick);
        }
        track_frontier(agent, action, &mut emptied);
    }
    panic!("discovery did not finish within {limit} ticks");
}

/// Floor cells reachable from the agent's position.
fn reachable(world: &GridWorld) -> Vec<Position> {
    let start = world.agent();
    let mut seen = vec![start];
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for (_, n) in pos.neighbours() {
            if !world.is_blocked(n) && !seen.contains(&n) {
                seen.push(n);
                queue.push_back(n);
            }
        }
    }
    seen
}

fn traversable_cells(agent: &SweepAgent) -> usize {
    agent
        .active_grid()
        .iter()
        .filter(|(_, c)| c.flags.is_traversable())
        .count()
}

/// Discover `world`, then check the working map and a stretch of coverage.
fn check_full_run(mut world: GridWorld) {
    let start = world.agent();
    let floor = reachable(&world);
    let mut agent = agent_for(&world);

    let (handover, _) = discover(&mut agent, &mut world, 20_000);
    if floor.len() > 1 {
        assert_ne!(handover, Action::Idle, "coverage decides on the hand-over tick");
    }
    for &pos in &floor {
        assert!(pos == start || world.visits(pos) > 0, "{pos} never visited");
    }
    assert_eq!(traversable_cells(&agent), floor.len());
    let side = agent.config().maze_size + 2;
    assert!(agent.active_grid().rows() <= side && agent.active_grid().cols() <= side);

    // The working map is exact, so coverage never bumps. Moving to the
    // least recently visited neighbour covers a connected region of n
    // cells within n * diameter steps.
    let bumps = world.bumps();
    let before: Vec<u32> = floor.iter().map(|&p| world.visits(p)).collect();
    let actions = run_episode(&mut agent, &mut world, 2 * floor.len() * floor.len() + 8);
    assert_eq!(world.bumps(), bumps);
    assert_eq!(agent.phase(), PhaseKind::Covering);
    if floor.len() > 1 {
        assert!(actions.iter().all(|a| a.is_move()));
        for (&pos, old) in floor.iter().zip(before) {
            assert!(world.visits(pos) > old, "{pos} not revisited during coverage");
        }
    }
}

// ── Scenarios ──────────────────────────────────────────────────────

#[test]
fn open_three_by_three() {
    let mut world = fixtures::open_room(3);
    let mut agent = agent_for(&world);

    // First tick prepares and probes upward.
    assert_eq!(run_episode(&mut agent, &mut world, 1), vec![Action::Up]);
    assert_eq!(agent.phase(), PhaseKind::Discovering);

    // The hand-over comes on the first tick that finds the frontier
    // empty: the previous tick closed it, or the wall reported at the
    // start of this tick did.
    let mut emptied = false;
    let mut bumped = false;
    let mut handover = None;
    for _ in 0..500 {
        let bumps = world.bumps();
        let action = run_episode(&mut agent, &mut world, 1)[0];
        if agent.phase() == PhaseKind::Covering {
            assert!(emptied || bumped, "hand-over with frontier still open");
            handover = Some(action);
            break;
        }
        track_frontier(&agent, action, &mut emptied);
        bumped = world.bumps() > bumps;
    }
    let handover = handover.expect("discovery finishes");
    assert!(handover.is_move());
    assert_eq!(agent.frontier_count(), None);
    for pos in world.floor_cells() {
        assert!(pos == Position::new(1, 1) || world.visits(pos) > 0);
    }
    assert_eq!(traversable_cells(&agent), 9);
    assert!(agent.metrics().discovery_ticks.is_some());

    // Every following tick stays in coverage.
    for _ in 0..50 {
        run_episode(&mut agent, &mut world, 1);
        assert_eq!(agent.phase(), PhaseKind::Covering);
    }

    check_full_run(fixtures::open_room(3));
}

#[test]
fn open_rooms() {
    for n in [1, 2, 4, 5, 8] {
        check_full_run(fixtures::open_room(n));
    }
}

#[test]
fn walled_rooms() {
    for n in [3, 4, 6, 9] {
        check_full_run(fixtures::walled_room(n));
    }
}

#[test]
fn comb_maze_needs_planning() {
    let mut world = fixtures::comb_maze();
    let mut agent = agent_for(&world);
    discover(&mut agent, &mut world, 5_000);
    assert!(agent.metrics().plans > 0);
    assert!(agent.metrics().peak_pool_nodes <= agent.config().pool_capacity());
    check_full_run(fixtures::comb_maze());
}

#[test]
fn two_rooms_through_doorway() {
    check_full_run(fixtures::two_rooms());
}

#[test]
fn corridors_hand_over_after_both_ends() {
    for text in ["...S...", ".\n.\n.\nS\n.\n.\n."] {
        let mut world = GridWorld::parse(text).unwrap();
        let mut agent = agent_for(&world);
        let (handover, ticks) = discover(&mut agent, &mut world, 200);
        assert!(handover.is_move(), "{text:?}");
        assert_eq!(agent.metrics().discovery_ticks, Some(ticks as u64 - 1));
        assert_eq!(traversable_cells(&agent), 7);
    }
    check_full_run(GridWorld::parse("...S...").unwrap());
}

#[test]
fn single_cell_world_idles_after_discovery() {
    let mut world = GridWorld::parse("#S#").unwrap();
    let mut agent = agent_for(&world);
    discover(&mut agent, &mut world, 50);
    assert_eq!(run_episode(&mut agent, &mut world, 3), vec![Action::Idle; 3]);
}

#[test]
fn discovery_bits_only_ever_clear() {
    let mut world = fixtures::two_rooms();
    let mut agent = agent_for(&world);
    run_episode(&mut agent, &mut world, 1);
    let mut prev = agent.active_grid().clone();
    loop {
        run_episode(&mut agent, &mut world, 1);
        if agent.phase() == PhaseKind::Covering {
            break;
        }
        assert!(agent.frontier_count().unwrap() > 0);
        let grid = agent.active_grid();
        for ((pos, old), (_, new)) in prev.iter().zip(grid.iter()) {
            if old.flags.is_visited() {
                assert!(new.flags.is_visited(), "{pos} lost Visited");
            }
            for dir in Direction::PRIORITY {
                if !old.flags.is_unexplored_toward(dir) {
                    assert!(!new.flags.is_unexplored_toward(dir), "{pos} regained {dir}");
                }
            }
        }
        prev = grid.clone();
    }
    assert_eq!(agent.active_grid().frontier_count(), 0);
}

// ── Suck behaviour ─────────────────────────────────────────────────

#[test]
fn sucks_until_clean() {
    let mut world = fixtures::walled_room(5);
    let start = world.agent();
    world.set_dirt(start, 35);
    let mut agent = agent_for(&world);
    let actions = run_episode(&mut agent, &mut world, 5);
    assert_eq!(&actions[..4], &[Action::Suck; 4]);
    assert!(actions[4].is_move());
    assert_eq!(world.dirt(start), 0);
    assert_eq!(world.cleaned(), 35);
}

#[test]
fn dirt_interrupts_coverage() {
    let mut world = fixtures::walled_room(5);
    let mut agent = agent_for(&world);
    discover(&mut agent, &mut world, 1_000);
    let here = world.agent();
    world.set_dirt(here, 1);
    assert_eq!(run_episode(&mut agent, &mut world, 1), vec![Action::Suck]);
    assert!(run_episode(&mut agent, &mut world, 1)[0].is_move());
}

#[test]
fn dirty_world_gets_cleaned() {
    let mut world = fixtures::two_rooms()
        .with_seed(11)
        .with_dirt_probability(0.02);
    let mut agent = agent_for(&world);
    run_episode(&mut agent, &mut world, 2_000);
    assert!(world.cleaned() > 0);
    assert_eq!(agent.metrics().ticks, 2_000);
    assert_eq!(
        agent.metrics().sucks + agent.metrics().moves + agent.metrics().idles,
        2_000
    );
}

// ── Determinism ────────────────────────────────────────────────────

#[test]
fn identical_runs_match() {
    let run = || {
        let mut world = fixtures::comb_maze().with_seed(3).with_dirt_probability(0.05);
        let mut agent = agent_for(&world);
        run_episode(&mut agent, &mut world, 600)
    };
    assert_eq!(run(), run());
}

#[test]
fn first_moves_follow_priority_when_blocked() {
    // Up and Right are walls; Down is the first open direction.
    let mut world = GridWorld::parse(
        "
        ###
        #S#
        #.#
        ###
        ",
    )
    .unwrap();
    let mut agent = agent_for(&world);
    let actions = run_episode(&mut agent, &mut world, 3);
    assert_eq!(actions, vec![Action::Up, Action::Right, Action::Down]);
    assert_eq!(world.bumps(), 2);
    assert_eq!(world.agent(), Position::new(2, 1));
}

// ── Properties ─────────────────────────────────────────────────────

fn maze_text(side: usize, walls: &[bool], start: usize) -> String {
    let mut text = String::new();
    for row in 0..side {
        for col in 0..side {
            let i = row * side + col;
            let glyph = if i == start {
                'S'
            } else if walls[i] {
                '#'
            } else {
                '.'
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_mazes_are_fully_discovered(
        side in 1usize..8,
        walls in proptest::collection::vec(proptest::bool::weighted(0.3), 64),
        start_pick in 0usize..64,
    ) {
        let start = start_pick % (side * side);
        let world = GridWorld::parse(&maze_text(side, &walls, start)).unwrap();
        check_full_run(world);
    }
}
