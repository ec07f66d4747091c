//! Reducer trait for pure state transitions.

/// Pure state transition: `(State, Action) -> State`.
///
/// Reducers must not perform IO or side effects. Persisting the new state (URL
/// writes, storage, logging) is the caller's job, which keeps every transition
/// testable on its own.
pub trait Reducer: Sized {
    type Action: Clone + core::fmt::Debug;

    /// Compute the next state without mutating `self`.
    fn reduce(&self, action: &Self::Action) -> Self;

    /// Apply a sequence of actions left to right.
    fn reduce_all<'a, I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self: Clone,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }
}
