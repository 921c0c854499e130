// The pool of teams still waiting to be drawn.

use rand::Rng;

use super::team::Team;

/// Ordered collection of not-yet-assigned teams, keyed by full name.
///
/// A team is a member of at most one of {pool, some group} at any time; the
/// session maintains that invariant by removing from the pool whenever a team
/// is placed.
#[derive(Debug, Default)]
pub struct TeamPool {
    teams: Vec<Team>,
}

impl TeamPool {
    pub fn new() -> Self {
        TeamPool { teams: Vec::new() }
    }

    /// Insert a team unless one with the same full name is already present.
    pub fn add_team(&mut self, team: Team) {
        if !self.contains(&team.full_name) {
            self.teams.push(team);
        }
    }

    /// Remove the team with this full name. No-op if absent.
    pub fn remove_team(&mut self, full_name: &str) {
        self.teams.retain(|t| t.full_name != full_name);
    }

    /// Draw one team uniformly at random, removing it from the pool.
    ///
    /// Each call is a single independent draw-without-replacement step;
    /// returns `None` once the pool is exhausted.
    pub fn select_random(&mut self) -> Option<Team> {
        if self.teams.is_empty() {
            return None;
        }
        let idx = rand::thread_rng().gen_range(0..self.teams.len());
        Some(self.teams.remove(idx))
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.teams.iter().any(|t| t.full_name == full_name)
    }

    /// Empty the pool. Has no effect on any group assignment.
    pub fn clear(&mut self) {
        self.teams.clear();
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn team(name: &str) -> Team {
        Team::new(name, &name[..1], 0)
    }

    #[test]
    fn add_team_deduplicates_by_full_name() {
        let mut pool = TeamPool::new();
        pool.add_team(team("Alpha"));
        pool.add_team(team("Alpha"));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn full_name_match_is_case_sensitive() {
        let mut pool = TeamPool::new();
        pool.add_team(team("Alpha"));
        pool.add_team(team("alpha"));
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("Alpha"));
        assert!(pool.contains("alpha"));
        assert!(!pool.contains("ALPHA"));
    }

    #[test]
    fn remove_team_absent_is_noop() {
        let mut pool = TeamPool::new();
        pool.add_team(team("Alpha"));
        pool.remove_team("Beta");
        assert_eq!(pool.len(), 1);
        pool.remove_team("Alpha");
        assert!(pool.is_empty());
    }

    #[test]
    fn select_random_on_empty_pool_returns_none() {
        let mut pool = TeamPool::new();
        assert!(pool.select_random().is_none());
    }

    #[test]
    fn repeated_draws_drain_pool_without_repeats() {
        let mut pool = TeamPool::new();
        for name in ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"] {
            pool.add_team(team(name));
        }

        let mut drawn = HashSet::new();
        while let Some(t) = pool.select_random() {
            assert!(drawn.insert(t.full_name), "team drawn twice");
        }
        assert_eq!(drawn.len(), 5);
        assert!(pool.is_empty());
        assert!(pool.select_random().is_none());
    }

    #[test]
    fn select_random_removes_the_drawn_team() {
        let mut pool = TeamPool::new();
        pool.add_team(team("Alpha"));
        pool.add_team(team("Beta"));

        let drawn = pool.select_random().unwrap();
        assert_eq!(pool.len(), 1);
        assert!(!pool.contains(&drawn.full_name));
    }

    #[test]
    fn clear_empties_the_pool() {
        let mut pool = TeamPool::new();
        pool.add_team(team("Alpha"));
        pool.add_team(team("Beta"));
        pool.clear();
        assert!(pool.is_empty());
        assert!(!pool.contains("Alpha"));
    }

    // Not a statistical proof, just a sanity check that the draw isn't stuck
    // on a fixed index.
    #[test]
    fn draws_are_not_always_the_first_element() {
        let mut seen_other_than_first = false;
        for _ in 0..50 {
            let mut pool = TeamPool::new();
            for name in ["Alpha", "Beta", "Gamma", "Delta"] {
                pool.add_team(team(name));
            }
            if pool.select_random().unwrap().full_name != "Alpha" {
                seen_other_than_first = true;
                break;
            }
        }
        assert!(seen_other_than_first);
    }
}
