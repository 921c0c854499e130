// Group assignment: fixed groups, fixed capacity, first-fit placement.

use super::team::Team;

/// One group in the assignment: insertion order is draw order.
#[derive(Debug, Clone)]
pub struct Group {
    capacity: usize,
    teams: Vec<Team>,
}

impl Group {
    fn new(capacity: usize) -> Self {
        Group {
            capacity,
            teams: Vec::with_capacity(capacity),
        }
    }

    pub fn is_full(&self) -> bool {
        self.teams.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }
}

/// A fixed-length sequence of capacity-bounded groups. Group indices are
/// stable for the lifetime of the engine.
#[derive(Debug, Clone)]
pub struct GroupAssignment {
    groups: Vec<Group>,
    teams_per_group: usize,
}

impl GroupAssignment {
    /// Create `group_count` empty groups of `teams_per_group` capacity.
    ///
    /// Both values must be positive; a zero here is a configuration bug that
    /// validation should have caught, so it is fatal.
    pub fn new(group_count: usize, teams_per_group: usize) -> Self {
        assert!(group_count > 0, "group_count must be positive");
        assert!(teams_per_group > 0, "teams_per_group must be positive");

        GroupAssignment {
            groups: (0..group_count).map(|_| Group::new(teams_per_group)).collect(),
            teams_per_group,
        }
    }

    /// Place a team into the first group (by index) with spare capacity.
    ///
    /// Returns `false` without side effects when every group is full; the
    /// caller decides what to do with the unplaced team.
    pub fn add_team(&mut self, team: &Team) -> bool {
        match self.groups.iter_mut().find(|g| !g.is_full()) {
            Some(group) => {
                group.teams.push(team.clone());
                true
            }
            None => false,
        }
    }

    /// Whether any group holds a team with this full name.
    pub fn contains_team(&self, full_name: &str) -> bool {
        self.groups
            .iter()
            .any(|g| g.teams.iter().any(|t| t.full_name == full_name))
    }

    /// Empty every group, preserving the assignment's shape.
    pub fn clear_teams(&mut self) {
        for group in &mut self.groups {
            group.teams.clear();
        }
    }

    /// Serialize to the result-log text format: a `GROUP {n}` header per
    /// group in index order, one member full name per line in insertion
    /// order, and a blank separator line after each group. Empty groups
    /// still emit their header.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (idx, group) in self.groups.iter().enumerate() {
            out.push_str(&format!("GROUP {}\n", idx + 1));
            for team in &group.teams {
                out.push_str(&team.full_name);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn teams_per_group(&self) -> usize {
        self.teams_per_group
    }

    /// Total teams placed across all groups.
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}
