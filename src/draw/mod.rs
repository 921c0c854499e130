// The drawing engine: candidate pool, group assignment, and the session
// that orchestrates them.

pub mod groups;
pub mod pool;
pub mod session;
pub mod team;
