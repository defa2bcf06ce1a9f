//! Strategy implementations.
//!
//! Each pilot owns a [`crate::plan::PlanCache`] and nothing else; all world
//! access goes through the per-tick [`crate::context::PilotContext`].
mod greedy;
mod single_target;
mod survival;

pub use greedy::GreedyPilot;
pub use single_target::SingleTargetPilot;
pub use survival::SurvivalPilot;
