//! Join over a set of independently running tweens.

use super::tween::{TweenEngine, TweenId};

/// Completion signal for a group of tweens started together.
///
/// A join settles once every tween it holds has individually finished. An
/// empty join is settled immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Join {
    pending: Vec<TweenId>,
}

impl Join {
    /// Empty (already settled) join.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join over a single tween.
    #[must_use]
    pub fn of(id: TweenId) -> Self {
        Self { pending: vec![id] }
    }

    /// Add a tween to wait for.
    pub fn push(&mut self, id: TweenId) {
        self.pending.push(id);
    }

    /// Wait for everything `other` waits for as well.
    pub fn merge(&mut self, other: Join) {
        self.pending.extend(other.pending);
    }

    /// Whether every awaited tween has finished.
    pub fn is_settled(&self, tweens: &TweenEngine) -> bool {
        self.pending.iter().all(|&id| !tweens.is_active(id))
    }

    /// Number of tweens this join waits on, finished or not.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the join waits on nothing.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FromIterator<TweenId> for Join {
    fn from_iter<I: IntoIterator<Item = TweenId>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

impl Extend<TweenId> for Join {
    fn extend<I: IntoIterator<Item = TweenId>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
