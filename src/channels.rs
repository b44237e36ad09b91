//! State updater: how node outputs are merged into the running state.
//!
//! By default a node's return value replaces the previous state; nodes in this
//! crate carry the input forward and append, so replacement preserves the
//! append-only message log. A custom updater can express per-field merge
//! strategies (e.g. concatenate lists, keep last scalar) instead.

use std::fmt::Debug;
use std::sync::Arc;

/// Trait for customizing how state updates are applied after each node runs.
pub trait StateUpdater<S>: Send + Sync + Debug
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Merge `update` (the node's return value) into `current`.
    fn apply_update(&self, current: &mut S, update: &S);
}

/// Default updater: the node's return value replaces the entire state.
#[derive(Debug, Clone, Default)]
pub struct ReplaceUpdater;

impl<S> StateUpdater<S> for ReplaceUpdater
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn apply_update(&self, current: &mut S, update: &S) {
        *current = update.clone();
    }
}

/// Updater that delegates to a closure for per-field merge logic.
///
/// Lets different fields use different strategies, e.g. append `messages`
/// while replacing `sender`.
pub struct FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    updater_fn: F,
    _marker: std::marker::PhantomData<S>,
}

impl<S, F> Debug for FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBasedUpdater")
            .field("updater_fn", &"<function>")
            .finish()
    }
}

impl<S, F> FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    /// Creates an updater from a merge closure `(current, update)`.
    pub fn new(updater_fn: F) -> Self {
        Self {
            updater_fn,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<S, F> StateUpdater<S> for FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    fn apply_update(&self, current: &mut S, update: &S) {
        (self.updater_fn)(current, update);
    }
}

/// Shared state updater handle stored in the compiled graph.
pub type BoxedStateUpdater<S> = Arc<dyn StateUpdater<S>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        messages: Vec<String>,
        sender: String,
    }

    /// **Scenario**: ReplaceUpdater swaps the whole state.
    #[test]
    fn replace_updater_replaces_state() {
        let updater = ReplaceUpdater;
        let mut current = TestState {
            messages: vec!["old".to_string()],
            sender: "a".to_string(),
        };
        let update = TestState {
            messages: vec!["new".to_string()],
            sender: "b".to_string(),
        };
        updater.apply_update(&mut current, &update);
        assert_eq!(current, update);
    }

    /// **Scenario**: FieldBasedUpdater can append messages and replace sender.
    #[test]
    fn field_based_updater_appends_messages() {
        let updater = FieldBasedUpdater::new(|current: &mut TestState, update: &TestState| {
            current.messages.extend(update.messages.iter().cloned());
            current.sender = update.sender.clone();
        });
        let mut current = TestState {
            messages: vec!["first".to_string()],
            sender: "a".to_string(),
        };
        let update = TestState {
            messages: vec!["second".to_string()],
            sender: "b".to_string(),
        };
        updater.apply_update(&mut current, &update);
        assert_eq!(
            current.messages,
            vec!["first".to_string(), "second".to_string()]
        );
        assert_eq!(current.sender, "b");
    }
}
