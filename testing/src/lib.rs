//! # All-Is-List Testing
//!
//! Testing utilities and helpers for the create flow.
//!
//! This crate provides:
//! - Mock collaborators: a recording event sink and a scripted API
//! - A small entity type for tests
//! - Property-based testing strategies
//! - A Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```
//! use all_is_list_core::{CreateReducer, ListAction, ListState};
//! use all_is_list_testing::{ReducerTest, test_item};
//!
//! ReducerTest::new(CreateReducer::new())
//!     .given_state(ListState::with_items(vec![test_item(1, "a")]))
//!     .when_action(ListAction::CreateEnd { item: test_item(1, "b") })
//!     .then_state(|state| {
//!         assert_eq!(state.items, vec![test_item(1, "b")]);
//!         assert!(!state.is_creating);
//!     })
//!     .run();
//! ```

pub mod reducer_test;

/// Mock implementations of the dispatcher's collaborators
pub mod mocks {
    use all_is_list_core::EventSink;
    use std::collections::VecDeque;
    use std::fmt::Debug;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};
    use thiserror::Error;

    /// Event sink that records every action it receives
    ///
    /// Clones share the same record.
    ///
    /// # Example
    ///
    /// ```
    /// use all_is_list_core::{EventSink, ListAction};
    /// use all_is_list_testing::RecordingSink;
    ///
    /// let sink = RecordingSink::new();
    /// sink.dispatch(ListAction::<u32>::CreateStart);
    /// assert_eq!(sink.actions(), vec![ListAction::CreateStart]);
    /// ```
    #[derive(Debug)]
    pub struct RecordingSink<A> {
        actions: Arc<Mutex<Vec<A>>>,
    }

    impl<A> RecordingSink<A> {
        /// Create an empty sink
        #[must_use]
        pub fn new() -> Self {
            Self {
                actions: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Number of recorded actions
        #[must_use]
        pub fn len(&self) -> usize {
            self.actions.lock().unwrap_or_else(PoisonError::into_inner).len()
        }

        /// Whether nothing was recorded
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Forget all recorded actions
        pub fn clear(&self) {
            self.actions.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    impl<A: Clone> RecordingSink<A> {
        /// Recorded actions, oldest first
        #[must_use]
        pub fn actions(&self) -> Vec<A> {
            self.actions.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }
    }

    impl<A> Clone for RecordingSink<A> {
        fn clone(&self) -> Self {
            Self {
                actions: Arc::clone(&self.actions),
            }
        }
    }

    impl<A> Default for RecordingSink<A> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<A: Send> EventSink<A> for RecordingSink<A> {
        fn dispatch(&self, action: A) {
            self.actions.lock().unwrap_or_else(PoisonError::into_inner).push(action);
        }
    }

    /// Errors returned by [`MockApi`]
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum MockApiError {
        /// A scripted failure
        #[error("API call failed: {0}")]
        Failed(String),

        /// More calls were made than responses scripted
        #[error("No response scripted for call #{0}")]
        Exhausted(usize),
    }

    /// Scripted stand-in for a remote create endpoint
    ///
    /// Responses are consumed in call order. Arguments are recorded with their
    /// `Debug` rendering.
    ///
    /// # Example
    ///
    /// ```
    /// use all_is_list_testing::{MockApi, MockApiError};
    ///
    /// # tokio_test::block_on(async {
    /// let api = MockApi::new().respond_with(1_u32).fail_with("down");
    ///
    /// assert_eq!(api.create("first").await, Ok(1));
    /// assert_eq!(api.create("second").await, Err(MockApiError::Failed("down".to_string())));
    /// assert_eq!(api.create("third").await, Err(MockApiError::Exhausted(3)));
    /// assert_eq!(api.call_count(), 3);
    /// # });
    /// ```
    #[derive(Debug)]
    pub struct MockApi<T> {
        responses: Arc<Mutex<VecDeque<Result<T, MockApiError>>>>,
        calls: Arc<Mutex<Vec<String>>>,
        call_count: Arc<AtomicUsize>,
    }

    impl<T> MockApi<T> {
        /// Create a mock with no scripted responses
        #[must_use]
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(VecDeque::new())),
                calls: Arc::new(Mutex::new(Vec::new())),
                call_count: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Queue a successful response
        #[must_use]
        pub fn respond_with(self, item: T) -> Self {
            self.push(Ok(item));
            self
        }

        /// Queue a failed response
        #[must_use]
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            self.push(Err(MockApiError::Failed(message.into())));
            self
        }

        /// Queue a response on a shared mock
        pub fn push(&self, response: Result<T, MockApiError>) {
            self.responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(response);
        }

        /// Number of calls made so far
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        /// `Debug` rendering of each call's arguments, oldest first
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }

        /// Simulate the create endpoint
        ///
        /// The response is taken when the call is made, not when the returned
        /// future is polled, so concurrent calls get responses in call order.
        ///
        /// # Errors
        ///
        /// Returns the scripted failure, or [`MockApiError::Exhausted`] when no
        /// response is left.
        pub fn create<Args: Debug>(&self, args: Args) -> impl Future<Output = Result<T, MockApiError>> + Send + use<T, Args>
        where
            T: Send + 'static,
        {
            let call = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(format!("{args:?}"));

            let response = self
                .responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or(Err(MockApiError::Exhausted(call)));

            async move { response }
        }
    }

    impl<T> Clone for MockApi<T> {
        fn clone(&self) -> Self {
            Self {
                responses: Arc::clone(&self.responses),
                calls: Arc::clone(&self.calls),
                call_count: Arc::clone(&self.call_count),
            }
        }
    }

    impl<T> Default for MockApi<T> {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Test fixtures
pub mod helpers {
    use all_is_list_core::Entity;
    use serde::{Deserialize, Serialize};

    /// Minimal entity for tests
    #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TestItem {
        /// Identifier
        pub id: u32,
        /// Payload
        pub name: String,
    }

    impl Entity for TestItem {
        type Id = u32;

        fn id(&self) -> Option<&u32> {
            Some(&self.id)
        }
    }

    /// Build a [`TestItem`]
    #[must_use]
    pub fn test_item(id: u32, name: &str) -> TestItem {
        TestItem {
            id,
            name: name.to_string(),
        }
    }

    /// Route `tracing` output to the test harness
    ///
    /// Honors `RUST_LOG`. Safe to call from every test; only the first call
    /// installs a subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing strategies
pub mod properties {
    use crate::helpers::TestItem;
    use all_is_list_core::ListState;
    use proptest::prelude::*;

    /// Identifiers are drawn from a small range so collisions are common
    pub const MAX_ID: u32 = 32;

    /// Any [`TestItem`]
    pub fn arb_test_item() -> impl Strategy<Value = TestItem> {
        (0..MAX_ID, "[a-z]{1,8}").prop_map(|(id, name)| TestItem { id, name })
    }

    /// A [`ListState`] whose items have distinct identifiers
    pub fn arb_list_state() -> impl Strategy<Value = ListState<TestItem>> {
        (
            proptest::collection::btree_map(0..MAX_ID, "[a-z]{1,8}", 0..12),
            any::<bool>(),
        )
            .prop_map(|(items, is_creating)| ListState {
                items: items
                    .into_iter()
                    .map(|(id, name)| TestItem { id, name })
                    .collect(),
                is_creating,
            })
    }
}

// Re-export commonly used items
pub use helpers::{TestItem, init_test_tracing, test_item};
pub use mocks::{MockApi, MockApiError, RecordingSink};
pub use reducer_test::ReducerTest;
