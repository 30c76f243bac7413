//! Path search for tie-breaking
//!
//! For a single piece, find the shortest route to something worth reaching: an enemy piece it
//! outranks, or the opponent's den. The piece moves by its normal rules while every other piece
//! stays where it is. What the caller needs is not the path itself but the **first steps** that
//! start a cheapest route, since those are the moves it can actually play now.
//!
//! Two strategies share the same contract:
//! - [`PathStrategy::BreadthFirst`] - cost is the number of steps
//! - [`PathStrategy::AStar`] - cost is `PATH_STEP_COST * steps - target_attack` (the den counts
//!   as `DEN_TARGET_ATTACK`), so a slightly longer route to a juicier target can win
//!
//! Both search over `(cell, first step)` states, so every first step is explored independently
//! and all first steps reaching the optimal cost are reported.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet, VecDeque};

use crate::board::Board;
use crate::constants::{DEN_TARGET_ATTACK, PATH_STEP_COST};
use crate::move_gen::combat::outranks;
use crate::move_gen::reachable_cells;
use crate::types::*;

/// Which search the tie-breaker runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathStrategy {
    #[default]
    BreadthFirst,
    AStar,
}

/// Cheapest cost found for one piece and the moves that start such a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHit {
    pub cost: i32,
    pub first_steps: BTreeSet<Move>,
}

/// Targets of `piece`: outranked enemies and the opponent den, with their attack bonus
fn targets_of(board: &Board, piece: &Piece) -> Vec<(Position, i32)> {
    let mut targets: Vec<(Position, i32)> = board
        .pieces_of(piece.side.opponent())
        .filter(|enemy| outranks(piece.kind, enemy.kind))
        .map(|enemy| (enemy.position, enemy.attack() as i32))
        .collect();
    targets.push((Board::den_of(piece.side.opponent()), DEN_TARGET_ATTACK));
    targets
}

/// Shortest-route first steps of `piece` on `board`
///
/// Returns `None` when no target is reachable at all.
pub fn shortest_first_steps(
    board: &Board,
    piece: &Piece,
    strategy: PathStrategy,
) -> Option<PathHit> {
    let targets = targets_of(board, piece);

    // The piece walks over a copy of the board without itself on it
    let mut scratch = board.clone();
    scratch.remove_piece(piece.position);

    match strategy {
        PathStrategy::BreadthFirst => breadth_first(&scratch, piece, &targets),
        PathStrategy::AStar => a_star(&scratch, piece, &targets),
    }
}

fn neighbours(board: &Board, piece: &Piece, at: Position) -> Vec<Position> {
    let walker = Piece { position: at, ..*piece };
    reachable_cells(board, &walker)
}

fn target_bonus(targets: &[(Position, i32)], at: Position) -> Option<i32> {
    targets
        .iter()
        .find(|(position, _)| *position == at)
        .map(|&(_, bonus)| bonus)
}

fn breadth_first(board: &Board, piece: &Piece, targets: &[(Position, i32)]) -> Option<PathHit> {
    let start = piece.position;
    let mut queue: VecDeque<(Position, Move, i32)> = VecDeque::new();
    let mut seen: HashSet<(Position, Move)> = HashSet::new();

    for to in neighbours(board, piece, start) {
        let first = Move::new(start, to);
        seen.insert((to, first));
        queue.push_back((to, first, 1));
    }

    let mut best: Option<PathHit> = None;

    while let Some((at, first, steps)) = queue.pop_front() {
        if best.as_ref().is_some_and(|hit| steps > hit.cost) {
            break;
        }

        if target_bonus(targets, at).is_some() {
            let hit = best.get_or_insert_with(|| PathHit {
                cost: steps,
                first_steps: BTreeSet::new(),
            });
            hit.first_steps.insert(first);
            continue;
        }

        for to in neighbours(board, piece, at) {
            if to != start && seen.insert((to, first)) {
                queue.push_back((to, first, steps + 1));
            }
        }
    }

    best
}

/// Lower bound on the cost still to pay from `at`
///
/// One move covers at most 4 cells (a vertical leap), and the biggest bonus is
/// `DEN_TARGET_ATTACK`.
fn heuristic(targets: &[(Position, i32)], at: Position) -> i32 {
    let nearest = targets
        .iter()
        .map(|(position, _)| at.distance(*position))
        .min()
        .unwrap_or(0) as i32;
    PATH_STEP_COST * ((nearest + 3) / 4) - DEN_TARGET_ATTACK
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Entry {
    /// A route that ended on a target; the priority is its exact cost
    Goal,
    /// A cell still to expand, with its path cost so far
    Open { cost: i32 },
}

type Frontier = BinaryHeap<Reverse<(i32, Entry, Position, Move)>>;

fn push_step(
    heap: &mut Frontier,
    targets: &[(Position, i32)],
    to: Position,
    first: Move,
    cost: i32,
) {
    match target_bonus(targets, to) {
        Some(bonus) => heap.push(Reverse((cost - bonus, Entry::Goal, to, first))),
        None => heap.push(Reverse((
            cost + heuristic(targets, to),
            Entry::Open { cost },
            to,
            first,
        ))),
    }
}

fn a_star(board: &Board, piece: &Piece, targets: &[(Position, i32)]) -> Option<PathHit> {
    let start = piece.position;
    let mut heap = Frontier::new();
    let mut closed: HashSet<(Position, Move)> = HashSet::new();

    for to in neighbours(board, piece, start) {
        push_step(&mut heap, targets, to, Move::new(start, to), PATH_STEP_COST);
    }

    let mut best: Option<PathHit> = None;

    while let Some(Reverse((priority, entry, at, first))) = heap.pop() {
        if best.as_ref().is_some_and(|hit| priority > hit.cost) {
            break;
        }

        match entry {
            Entry::Goal => {
                let hit = best.get_or_insert_with(|| PathHit {
                    cost: priority,
                    first_steps: BTreeSet::new(),
                });
                hit.first_steps.insert(first);
            }
            Entry::Open { cost } => {
                if !closed.insert((at, first)) {
                    continue;
                }
                for to in neighbours(board, piece, at) {
                    if to != start && !closed.contains(&(to, first)) {
                        push_step(&mut heap, targets, to, first, cost + PATH_STEP_COST);
                    }
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(col: i8, row: i8) -> Position {
        Position::new(col, row)
    }

    fn piece_at(board: &Board, col: i8, row: i8) -> Piece {
        *board.piece_at(pos(col, row)).expect("test setup places a piece here")
    }

    // ========================================================================
    // Breadth-First Tests
    // ========================================================================

    #[test]
    fn test_bfs_straight_to_den() {
        //! A Cat two steps below the Dark den has a unique first step
        let mut board = Board::empty();
        board.place(Kind::Cat, Side::Light, pos(3, 2));
        board.place(Kind::Cat, Side::Dark, pos(0, 8));

        let hit = shortest_first_steps(&board, &piece_at(&board, 3, 2), PathStrategy::BreadthFirst)
            .expect("den is reachable");
        assert_eq!(hit.cost, 2);
        assert_eq!(hit.first_steps, BTreeSet::from([Move::new(pos(3, 2), pos(3, 1))]));
    }

    #[test]
    fn test_bfs_collects_every_shortest_first_step() {
        //! Target diagonally adjacent: both orthogonal first steps are shortest
        let mut board = Board::empty();
        board.place(Kind::Lion, Side::Light, pos(0, 7));
        board.place(Kind::Cat, Side::Dark, pos(1, 8));

        let hit = shortest_first_steps(&board, &piece_at(&board, 0, 7), PathStrategy::BreadthFirst)
            .expect("cat is reachable");
        assert_eq!(hit.cost, 2);
        assert_eq!(
            hit.first_steps,
            BTreeSet::from([Move::new(pos(0, 7), pos(0, 8)), Move::new(pos(0, 7), pos(1, 7))])
        );
    }

    #[test]
    fn test_bfs_ignores_stronger_enemies() {
        let mut board = Board::empty();
        board.place(Kind::Cat, Side::Light, pos(3, 6));
        board.place(Kind::Elephant, Side::Dark, pos(3, 5));

        let hit = shortest_first_steps(&board, &piece_at(&board, 3, 6), PathStrategy::BreadthFirst)
            .expect("den is reachable");
        // The cat can only aim for the den, around the elephant
        assert!(hit.cost > 6);
    }

    #[test]
    fn test_leaper_route_uses_jump() {
        let mut board = Board::empty();
        board.place(Kind::Tiger, Side::Light, pos(1, 6));
        board.place(Kind::Cat, Side::Dark, pos(1, 2));

        let hit = shortest_first_steps(&board, &piece_at(&board, 1, 6), PathStrategy::BreadthFirst)
            .expect("cat is reachable");
        assert_eq!(hit.cost, 1);
        assert_eq!(hit.first_steps, BTreeSet::from([Move::new(pos(1, 6), pos(1, 2))]));
    }

    // ========================================================================
    // A* Tests
    // ========================================================================

    #[test]
    fn test_a_star_cost_includes_target_bonus() {
        let mut board = Board::empty();
        board.place(Kind::Lion, Side::Light, pos(3, 4));
        board.place(Kind::Tiger, Side::Dark, pos(3, 3));

        let hit = shortest_first_steps(&board, &piece_at(&board, 3, 4), PathStrategy::AStar)
            .expect("tiger is reachable");
        assert_eq!(hit.cost, PATH_STEP_COST - 6);
        assert_eq!(hit.first_steps, BTreeSet::from([Move::new(pos(3, 4), pos(3, 3))]));
    }

    #[test]
    fn test_a_star_prefers_bigger_prey_at_equal_distance() {
        let mut board = Board::empty();
        board.place(Kind::Elephant, Side::Light, pos(3, 4));
        board.place(Kind::Cat, Side::Dark, pos(3, 3));
        board.place(Kind::Lion, Side::Dark, pos(3, 5));

        let hit = shortest_first_steps(&board, &piece_at(&board, 3, 4), PathStrategy::AStar)
            .expect("targets are reachable");
        assert_eq!(hit.cost, PATH_STEP_COST - 7);
        assert_eq!(hit.first_steps, BTreeSet::from([Move::new(pos(3, 4), pos(3, 5))]));
    }

    #[test]
    fn test_a_star_agrees_with_bfs_on_den_route() {
        let mut board = Board::empty();
        board.place(Kind::Cat, Side::Light, pos(3, 2));
        board.place(Kind::Cat, Side::Dark, pos(0, 8));
        let cat = piece_at(&board, 3, 2);

        let bfs = shortest_first_steps(&board, &cat, PathStrategy::BreadthFirst).expect("bfs");
        let astar = shortest_first_steps(&board, &cat, PathStrategy::AStar).expect("a*");
        assert_eq!(astar.cost, 2 * PATH_STEP_COST - DEN_TARGET_ATTACK);
        assert_eq!(bfs.first_steps, astar.first_steps);
    }

    #[test]
    fn test_unreachable_targets() {
        //! Cat walled in by its own pieces
        let mut board = Board::empty();
        board.place(Kind::Cat, Side::Light, pos(0, 8));
        board.place(Kind::Dog, Side::Light, pos(1, 8));
        board.place(Kind::Wolf, Side::Light, pos(0, 7));

        let cat = piece_at(&board, 0, 8);
        assert_eq!(shortest_first_steps(&board, &cat, PathStrategy::BreadthFirst), None);
        assert_eq!(shortest_first_steps(&board, &cat, PathStrategy::AStar), None);
    }
}
