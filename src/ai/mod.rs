//! Computer opponents: the one-ply win/block move selector and the uniform
//! random agent it falls back on.

mod agent;
mod random;
mod selector;

pub use agent::Agent;
pub use random::RandomAgent;
pub use selector::{find_winning_column, MoveSelector, Selection, SelectionReason};
