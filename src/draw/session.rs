// Draw session orchestration: reset/reload lifecycle, selection handling,
// and domain event emission.
//
// The session owns the in-memory structures and the result log. All methods
// are called from a single logical caller context; the presentation layer
// consumes events from the channel and never shares types with the engine.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::DrawingsConfig;
use crate::result_log::ResultLog;

use super::groups::GroupAssignment;
use super::pool::TeamPool;
use super::team::{Team, TeamList};

/// Domain events emitted to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    DrawStarted,
    DrawStopped,
    TeamSelected(Team),
    StateReset,
}

/// Whether a scrolling selection is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Drawing,
}

pub struct DrawSession {
    pool: TeamPool,
    assignment: GroupAssignment,
    result_log: ResultLog,
    team_list: Box<dyn TeamList + Send>,
    phase: DrawPhase,
    events: mpsc::UnboundedSender<DrawEvent>,
}

impl DrawSession {
    /// Create a session with empty groups and an empty pool. Callers run
    /// `reset(..)` once to populate the pool (and optionally replay the
    /// persisted results).
    pub fn new(
        config: &DrawingsConfig,
        team_list: Box<dyn TeamList + Send>,
        result_log: ResultLog,
        events: mpsc::UnboundedSender<DrawEvent>,
    ) -> Self {
        DrawSession {
            pool: TeamPool::new(),
            assignment: GroupAssignment::new(config.group_count, config.teams_per_group),
            result_log,
            team_list,
            phase: DrawPhase::Idle,
            events,
        }
    }

    /// Clear the assignment and rebuild the pool from the team source.
    ///
    /// With `load_persisted`, the results log is replayed: every resolved
    /// team is placed first-fit (in file-line order) and removed from the
    /// pool. Without it, an empty log write is enqueued so any stale file is
    /// cleared.
    pub fn reset(&mut self, load_persisted: bool) {
        self.assignment.clear_teams();
        self.rebuild_pool();

        if load_persisted {
            let restored = self.result_log.load(self.team_list.teams());
            let mut count = 0usize;
            for team in &restored {
                // A crash-corrupted or hand-edited file can name a team
                // twice; each full name is placed at most once.
                if self.assignment.contains_team(&team.full_name) {
                    debug!("skipping duplicate results line for {}", team.full_name);
                    continue;
                }
                if self.assignment.add_team(team) {
                    count += 1;
                } else {
                    warn!(
                        "no group slot left for persisted team {}, dropping it",
                        team.full_name
                    );
                }
                self.pool.remove_team(&team.full_name);
            }
            if count > 0 {
                info!("restored {count} placements from the results log");
            }
        } else {
            self.result_log.enqueue(String::new());
        }

        self.phase = DrawPhase::Idle;
        self.emit(DrawEvent::StateReset);
    }

    /// Re-derive the pool from the team source minus already-placed teams,
    /// leaving group placements and the log untouched. Used after the team
    /// source changed externally.
    pub fn reload(&mut self) {
        self.rebuild_pool();
    }

    /// Enter the `Drawing` phase. No-op if already drawing.
    pub fn start_draw(&mut self) {
        if self.phase != DrawPhase::Drawing {
            self.phase = DrawPhase::Drawing;
            self.emit(DrawEvent::DrawStarted);
        }
    }

    /// Return to `Idle`. No-op if not drawing.
    pub fn stop_draw(&mut self) {
        if self.phase != DrawPhase::Idle {
            self.phase = DrawPhase::Idle;
            self.emit(DrawEvent::DrawStopped);
        }
    }

    /// One fair draw-without-replacement step, delegated to the pool.
    pub fn select_random(&mut self) -> Option<Team> {
        self.pool.select_random()
    }

    /// Finalize the currently highlighted team.
    ///
    /// Places the team first-fit, emits `TeamSelected` regardless of whether
    /// a slot was free, and enqueues the serialized assignment. Returns the
    /// placement result; on `false` the team stays unassigned and the log
    /// content is simply rewritten unchanged.
    ///
    /// The phase drops back to `Idle` without a `DrawStopped` event: the
    /// `TeamSelected` emission itself marks the end of the scroll, so
    /// consumers tracking phase through events treat it as terminal too.
    pub fn confirm_selection(&mut self, team: &Team) -> bool {
        let placed = self.assignment.add_team(team);
        if !placed {
            warn!("all groups are full, {} remains unplaced", team.full_name);
        }
        // The pool draw already removed the team; this covers callers that
        // confirm a team obtained some other way.
        self.pool.remove_team(&team.full_name);

        self.phase = DrawPhase::Idle;
        self.emit(DrawEvent::TeamSelected(team.clone()));
        self.result_log.enqueue(self.assignment.serialize());
        placed
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn pool(&self) -> &TeamPool {
        &self.pool
    }

    pub fn assignment(&self) -> &GroupAssignment {
        &self.assignment
    }

    /// Wait for every enqueued log write to be attempted.
    pub async fn flush(&self) {
        self.result_log.flush().await;
    }

    fn rebuild_pool(&mut self) {
        self.pool.clear();
        for team in self.team_list.teams() {
            if self.assignment.contains_team(&team.full_name) {
                continue;
            }
            self.pool.add_team(team.clone());
        }
    }

    fn emit(&self, event: DrawEvent) {
        // The presentation layer may have gone away; that never affects the
        // engine.
        let _ = self.events.send(event);
    }
}
