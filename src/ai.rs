//! Computer opponent targeting: random search until a ship is found,
//! then a directional hunt until that ship goes down.

use crate::board::Board;
use crate::common::AttackOutcome;
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH};
use crate::ship::{Orientation, ShipId};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, VecDeque};

/// Budget of targeting attempts per turn. Rejected random draws and
/// exhausted queue entries both count; hitting the cap abandons the
/// turn rather than spinning on an unreachable state.
pub const MAX_TARGETING_ATTEMPTS: usize = 100;

/// One unresolved hit: a ship we have struck but not yet sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingHit {
    row: usize,
    col: usize,
    ship: ShipId,
}

/// Hunt state carried between opponent turns. Owned by the session, so
/// concurrent games never share targeting memory.
pub struct OpponentAi {
    hit_queue: VecDeque<PendingHit>,
    directions: HashMap<ShipId, Orientation>,
}

impl OpponentAi {
    pub fn new() -> Self {
        OpponentAi {
            hit_queue: VecDeque::new(),
            directions: HashMap::new(),
        }
    }

    /// Forget all pending hits and inferred directions (game end or
    /// board reset).
    pub fn reset(&mut self) {
        self.hit_queue.clear();
        self.directions.clear();
    }

    /// True when the opponent is chasing at least one damaged ship.
    pub fn is_hunting(&self) -> bool {
        !self.hit_queue.is_empty()
    }

    /// Fire exactly one shot at `board`, or none if no valid target
    /// turns up within the attempt budget. Returns the chosen cell and
    /// the outcome; `None` means the turn was abandoned and control
    /// should revert to the human.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Option<((usize, usize), AttackOutcome)> {
        for _ in 0..MAX_TARGETING_ATTEMPTS {
            let target = match self.hit_queue.front().copied() {
                Some(head) => match self.hunt_candidate(head, board, rng) {
                    Some(cell) => cell,
                    None => {
                        // Nothing left to probe around this hit; move on.
                        self.hit_queue.pop_front();
                        continue;
                    }
                },
                None => {
                    let row = rng.random_range(0..BOARD_SIZE);
                    let col = rng.random_range(0..BOARD_SIZE);
                    if board.already_attacked(row, col) {
                        continue;
                    }
                    (row, col)
                }
            };
            let (row, col) = target;
            let outcome = board.receive_attack(row, col);
            debug!("opponent fires at ({row}, {col}): {outcome:?}");
            self.observe(row, col, outcome);
            return Some(((row, col), outcome));
        }
        warn!(
            "opponent found no valid target in {} attempts, abandoning turn",
            MAX_TARGETING_ATTEMPTS
        );
        None
    }

    /// Pick a cell to probe for the ship behind `head`, or `None` when
    /// every candidate around it is spent.
    fn hunt_candidate<R: Rng + ?Sized>(
        &self,
        head: PendingHit,
        board: &Board,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        let mut candidates: Vec<(usize, usize)> = match self.directions.get(&head.ship) {
            Some(Orientation::Horizontal) => {
                let (lo, hi) = self.hit_extent(head.ship, |hit| hit.col);
                span(lo, hi)
                    .map(|col| (head.row, col))
                    .filter(|&(r, c)| !board.already_attacked(r, c))
                    .collect()
            }
            Some(Orientation::Vertical) => {
                let (lo, hi) = self.hit_extent(head.ship, |hit| hit.row);
                span(lo, hi)
                    .map(|row| (row, head.col))
                    .filter(|&(r, c)| !board.already_attacked(r, c))
                    .collect()
            }
            None => orthogonal_neighbors(head.row, head.col)
                .filter(|&(r, c)| !board.already_attacked(r, c))
                .collect(),
        };
        candidates.shuffle(rng);
        candidates.first().copied()
    }

    /// Min and max of one coordinate over the recorded hits on `ship`.
    fn hit_extent(&self, ship: ShipId, axis: impl Fn(&PendingHit) -> usize) -> (usize, usize) {
        let mut lo = BOARD_SIZE;
        let mut hi = 0;
        for hit in self.hit_queue.iter().filter(|h| h.ship == ship) {
            lo = lo.min(axis(hit));
            hi = hi.max(axis(hit));
        }
        (lo, hi)
    }

    /// Fold an attack result into the hunt state.
    fn observe(&mut self, row: usize, col: usize, outcome: AttackOutcome) {
        match outcome {
            AttackOutcome::Hit(ship) => {
                self.hit_queue.push_back(PendingHit { row, col, ship });
                self.infer_direction(ship);
            }
            AttackOutcome::Sunk(ship) => {
                self.hit_queue.retain(|h| h.ship != ship);
                self.directions.remove(&ship);
            }
            AttackOutcome::Miss | AttackOutcome::Ignored => {}
        }
    }

    /// Once a ship has two recorded hits, the line between the two
    /// earliest ones fixes its direction. Ships are straight, so the
    /// unknown fallback is defensive only.
    fn infer_direction(&mut self, ship: ShipId) {
        if self.directions.contains_key(&ship) {
            return;
        }
        let mut hits = self.hit_queue.iter().filter(|h| h.ship == ship);
        let (Some(first), Some(second)) = (hits.next(), hits.next()) else {
            return;
        };
        if first.row == second.row {
            debug!("opponent locks horizontal on row {}", first.row);
            self.directions.insert(ship, Orientation::Horizontal);
        } else if first.col == second.col {
            debug!("opponent locks vertical on column {}", first.col);
            self.directions.insert(ship, Orientation::Vertical);
        }
    }
}

impl Default for OpponentAi {
    fn default() -> Self {
        OpponentAi::new()
    }
}

/// Positions along one axis within the longest ship's length of the
/// `[lo, hi]` hit extent, clamped to the board.
fn span(lo: usize, hi: usize) -> impl Iterator<Item = usize> {
    let start = lo.saturating_sub(MAX_SHIP_LENGTH);
    let end = (hi + MAX_SHIP_LENGTH).min(BOARD_SIZE - 1);
    start..=end
}

/// In-bounds orthogonal neighbors of (`row`, `col`).
fn orthogonal_neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            (nr < BOARD_SIZE && nc < BOARD_SIZE).then_some((nr, nc))
        })
}
