//! Strategy construction.

use crate::api::{DirectionProvider, StrategyKind};
use crate::strategies::{GreedyPilot, SingleTargetPilot, SurvivalPilot};

/// Builds a fresh pilot for the requested strategy, or `None` for manual
/// control. Each call returns a new instance with an empty plan cache, so
/// switching strategies never leaks or reuses a previous pilot's state.
pub fn create_pilot(kind: StrategyKind) -> Option<Box<dyn DirectionProvider>> {
    let pilot: Box<dyn DirectionProvider> = match kind {
        StrategyKind::Manual => return None,
        StrategyKind::Survival => Box::new(SurvivalPilot::new()),
        StrategyKind::GreedyScore => Box::new(GreedyPilot::new()),
        StrategyKind::SingleTarget => Box::new(SingleTargetPilot::new()),
    };
    tracing::debug!(strategy = %kind, "pilot created");
    Some(pilot)
}
