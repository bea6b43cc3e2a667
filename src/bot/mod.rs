//! Bots: the [`Bot`] trait with a uniform-random policy and a one-ply
//! win-or-block policy, plus [`BotKind`] for picking one from configuration.

mod agent;
mod random;
mod smart;

pub use agent::{Bot, BotKind};
pub use random::RandomBot;
pub use smart::SmartBot;
