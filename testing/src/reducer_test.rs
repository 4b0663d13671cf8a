//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use all_is_list_core::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for error assertion functions
type ErrorAssertion<E> = Box<dyn FnOnce(&E)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// A test expects either a new state (`then_state`) or an error
/// (`then_error`); `run` panics if the reducer's outcome is the other one.
/// A failure with no `then_error` registered also panics.
///
/// # Example
///
/// ```
/// use all_is_list_core::{CreateReducer, ListAction, ListState};
/// use all_is_list_testing::ReducerTest;
/// use serde_json::json;
///
/// ReducerTest::new(CreateReducer::new())
///     .given_state(ListState::new())
///     .when_action(ListAction::CreateEnd { item: json!({ "name": "no id" }) })
///     .then_error(|error| {
///         assert_eq!(error.to_string(), "CREATE_END: item has no `id`");
///     })
///     .run();
/// ```
pub struct ReducerTest<R: Reducer> {
    reducer: R,
    initial_state: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    error_assertions: Vec<ErrorAssertion<R::Error>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
    R::Error: std::fmt::Debug,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            error_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to apply (When)
    ///
    /// Actions are applied in the order given; each one sees the state
    /// produced by the previous one.
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the error that stopped the actions (Then)
    #[must_use]
    pub fn then_error<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::Error) + 'static,
    {
        self.error_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the initial state or action is not set, if the outcome does
    /// not match the kind of assertions registered, or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(!self.actions.is_empty(), "Action must be set with when_action()");

        for action in self.actions {
            match self.reducer.reduce(&state, action) {
                Ok(next) => state = next,
                Err(error) => {
                    assert!(
                        self.state_assertions.is_empty() && !self.error_assertions.is_empty(),
                        "Expected a new state, but the reducer failed: {error:?}"
                    );
                    for assertion in self.error_assertions {
                        assertion(&error);
                    }
                    return;
                },
            }
        }

        assert!(
            self.error_assertions.is_empty(),
            "Expected the reducer to fail, but every action was applied"
        );

        for assertion in self.state_assertions {
            assertion(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{TestItem, test_item};
    use all_is_list_core::{CreateReducer, ListAction, ListError, ListState};

    fn reducer() -> CreateReducer<ListState<TestItem>> {
        CreateReducer::new()
    }

    #[test]
    fn test_reducer_test_start() {
        ReducerTest::new(reducer())
            .given_state(ListState::new())
            .when_action(ListAction::CreateStart)
            .then_state(|state| {
                assert!(state.is_creating);
                assert!(state.is_empty());
            })
            .run();
    }

    #[test]
    fn test_reducer_test_start_then_end() {
        ReducerTest::new(reducer())
            .given_state(ListState::new())
            .when_action(ListAction::CreateStart)
            .when_action(ListAction::CreateEnd {
                item: test_item(1, "a"),
            })
            .then_state(|state| {
                assert_eq!(state, &ListState::with_items(vec![test_item(1, "a")]));
            })
            .run();
    }

    #[test]
    fn test_reducer_test_error() {
        ReducerTest::new(CreateReducer::<ListState<serde_json::Value>>::new())
            .given_state(ListState::new())
            .when_action(ListAction::CreateEnd {
                item: serde_json::json!({}),
            })
            .then_error(|error| {
                assert_eq!(error, &ListError::MissingId { action: "CREATE_END" });
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected a new state, but the reducer failed")]
    fn test_reducer_test_unexpected_error_panics_without_assertions() {
        ReducerTest::new(CreateReducer::<ListState<serde_json::Value>>::new())
            .given_state(ListState::new())
            .when_action(ListAction::CreateEnd {
                item: serde_json::json!({}),
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected the reducer to fail")]
    fn test_reducer_test_missing_error_panics() {
        ReducerTest::new(reducer())
            .given_state(ListState::new())
            .when_action(ListAction::CreateStart)
            .then_error(|_| {})
            .run();
    }
}
