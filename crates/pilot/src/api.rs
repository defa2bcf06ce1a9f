//! Public surface consumed by the host loop.

use maze_core::Direction;

use crate::context::PilotContext;

/// Closed set of steering strategies the factory can build.
///
/// `Manual` is the human-input mode and yields no pilot at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumIter, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    Manual,
    Survival,
    GreedyScore,
    SingleTarget,
}

/// One strategy instance: produces the next direction given the current
/// world snapshot.
///
/// The host calls [`DirectionProvider::next_direction`] exactly once per
/// simulation tick. The call is synchronous and never blocks; it reads the
/// world through the context and mutates only the provider's own plan cache.
/// Internal failures never surface as errors; the worst outcome of any query
/// is a [`Direction::Stop`] for one tick.
pub trait DirectionProvider: Send {
    /// Strategy identity, for logs and UI labels.
    fn strategy(&self) -> StrategyKind;

    /// Produces the direction for this tick.
    fn next_direction(&mut self, ctx: &PilotContext<'_>) -> Direction;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for kind in StrategyKind::iter() {
            assert_eq!(StrategyKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert_eq!(
            StrategyKind::from_str("greedy-score").unwrap(),
            StrategyKind::GreedyScore
        );
    }
}
