//! Wraps an async create call with start/end actions.
//!
//! The dispatcher never touches state. It reports to an [`EventSink`] (usually
//! a [`Store`](crate::Store)) which routes the actions to the create reducers:
//!
//! 1. `action_start()` is dispatched synchronously
//! 2. the API call is awaited
//! 3. on success `action_end(item)` is dispatched and the item returned
//!
//! A failed API call returns its error untouched. No end action is
//! dispatched and the start action is not undone, so the list stays marked
//! as creating until the next successful create.

use crate::metrics::{CREATE_COMPLETED, CREATE_FAILED, CREATE_STARTED};
use all_is_list_core::{EventSink, ListAction};
use std::fmt;
use std::future::Future;

/// Everything a [`CreateAction`] needs
///
/// All four fields are required. `action_start` and `action_end` build the
/// actions the sink receives; use [`CreateActionConfig::for_list`] when the
/// sink takes [`ListAction`]s directly, or pass constructors that wrap them
/// in an application action:
///
/// ```
/// use all_is_list_core::ListAction;
/// use all_is_list_runtime::CreateActionConfig;
///
/// #[derive(Debug)]
/// enum AppAction {
///     Notes(ListAction<u32>),
/// }
///
/// let config = CreateActionConfig {
///     dispatch: |action: AppAction| println!("{action:?}"),
///     api_method: |id: u32| async move { Ok::<_, std::io::Error>(id) },
///     action_start: || AppAction::Notes(ListAction::CreateStart),
///     action_end: |item| AppAction::Notes(ListAction::CreateEnd { item }),
/// };
/// # let _ = config;
/// ```
#[derive(Clone)]
pub struct CreateActionConfig<D, F, A, T> {
    /// Sink receiving the start and end actions
    pub dispatch: D,
    /// Async API call producing the created item
    pub api_method: F,
    /// Builds the action dispatched before the API call
    pub action_start: fn() -> A,
    /// Builds the action dispatched with the created item
    pub action_end: fn(T) -> A,
}

impl<D, F, T> CreateActionConfig<D, F, ListAction<T>, T> {
    /// Config dispatching plain [`ListAction::CreateStart`] / [`ListAction::CreateEnd`]
    #[must_use]
    pub fn for_list(dispatch: D, api_method: F) -> Self {
        Self {
            dispatch,
            api_method,
            action_start: ListAction::create_start,
            action_end: ListAction::create_end,
        }
    }
}

impl<D, F, A, T> fmt::Debug for CreateActionConfig<D, F, A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateActionConfig").finish_non_exhaustive()
    }
}

/// Builds a [`CreateAction`] from its config
#[must_use]
pub const fn create_action<D, F, A, T>(config: CreateActionConfig<D, F, A, T>) -> CreateAction<D, F, A, T> {
    CreateAction { config }
}

/// An API call wrapped with start/end actions
///
/// Keeps no state between calls. [`CreateAction::call`] takes `&self`, so
/// one instance can serve many concurrent calls; each call's start action
/// precedes its own end action, but calls may interleave with each other.
#[derive(Clone)]
pub struct CreateAction<D, F, A, T> {
    config: CreateActionConfig<D, F, A, T>,
}

impl<D, F, A, T> CreateAction<D, F, A, T>
where
    D: EventSink<A>,
    T: Clone,
{
    /// Run one create call
    ///
    /// `args` is handed to the API function unchanged; pass a tuple for
    /// several arguments.
    ///
    /// # Errors
    ///
    /// Returns the API function's error as is. The start action has already
    /// been dispatched at that point; no end action follows.
    ///
    /// # Example
    ///
    /// ```
    /// use all_is_list_core::{CreateReducer, ListState};
    /// use all_is_list_runtime::{CreateActionConfig, Store, create_action};
    /// use serde_json::json;
    ///
    /// # tokio_test::block_on(async {
    /// let store = Store::new(ListState::new(), CreateReducer::new());
    /// let create = create_action(CreateActionConfig::for_list(
    ///     store.clone(),
    ///     |(id, name): (u32, &'static str)| async move {
    ///         Ok::<_, std::io::Error>(json!({ "id": id, "name": name }))
    ///     },
    /// ));
    ///
    /// let item = create.call((1, "a")).await?;
    /// assert_eq!(item, json!({ "id": 1, "name": "a" }));
    /// assert_eq!(store.snapshot(), ListState::with_items(vec![item]));
    /// # Ok::<(), std::io::Error>(())
    /// # }).unwrap();
    /// ```
    #[tracing::instrument(skip_all, name = "create_action")]
    pub async fn call<Args, Fut, E>(&self, args: Args) -> Result<T, E>
    where
        F: Fn(Args) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Debug,
    {
        self.config.dispatch.dispatch((self.config.action_start)());
        metrics::counter!(CREATE_STARTED).increment(1);
        tracing::trace!("Dispatched create start action");

        match (self.config.api_method)(args).await {
            Ok(item) => {
                self.config.dispatch.dispatch((self.config.action_end)(item.clone()));
                metrics::counter!(CREATE_COMPLETED).increment(1);
                tracing::trace!("Dispatched create end action");
                Ok(item)
            },
            Err(error) => {
                metrics::counter!(CREATE_FAILED).increment(1);
                tracing::warn!(error = ?error, "Create call failed, no end action dispatched");
                Err(error)
            },
        }
    }

    /// The config this action was built from
    #[must_use]
    pub const fn config(&self) -> &CreateActionConfig<D, F, A, T> {
        &self.config
    }
}

impl<D, F, A, T> fmt::Debug for CreateAction<D, F, A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAction").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use all_is_list_testing::{MockApi, MockApiError, RecordingSink, TestItem, test_item};

    type Action = ListAction<TestItem>;

    #[tokio::test]
    async fn test_success_dispatches_start_then_end() {
        let sink = RecordingSink::<Action>::new();
        let api = MockApi::new().respond_with(test_item(1, "a"));
        let create = create_action(CreateActionConfig::for_list(sink.clone(), move |name: &'static str| {
            api.create(name)
        }));

        let item = create.call("a").await.unwrap();

        assert_eq!(item, test_item(1, "a"));
        assert_eq!(
            sink.actions(),
            vec![
                ListAction::CreateStart,
                ListAction::CreateEnd {
                    item: test_item(1, "a")
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_dispatches_only_start() {
        let sink = RecordingSink::<Action>::new();
        let api = MockApi::<TestItem>::new().fail_with("boom");
        let create = create_action(CreateActionConfig::for_list(sink.clone(), move |(): ()| api.create(())));

        let error = create.call(()).await.unwrap_err();

        assert_eq!(error, MockApiError::Failed("boom".to_string()));
        assert_eq!(sink.actions(), vec![ListAction::CreateStart]);
    }

    #[tokio::test]
    async fn test_any_error_type_is_returned_as_is() {
        // Neither `Display` nor `std::error::Error`
        #[derive(Debug, PartialEq)]
        struct Refused {
            code: u16,
        }

        let sink = RecordingSink::<Action>::new();
        let create = create_action(CreateActionConfig::for_list(sink.clone(), |code: u16| async move {
            Err::<TestItem, _>(Refused { code })
        }));

        assert_eq!(create.call(409).await, Err(Refused { code: 409 }));
        assert_eq!(sink.actions(), vec![ListAction::CreateStart]);
    }

    #[tokio::test]
    async fn test_arguments_reach_api_unchanged() {
        let sink = RecordingSink::<Action>::new();
        let api = MockApi::new().respond_with(test_item(7, "x"));
        let create = create_action(CreateActionConfig::for_list(sink, {
            let api = api.clone();
            move |args: (u32, String)| api.create(args)
        }));

        let _ = create.call((7, "x".to_string())).await.unwrap();

        assert_eq!(api.call_count(), 1);
        assert_eq!(api.calls(), vec![r#"(7, "x")"#.to_string()]);
    }

    #[tokio::test]
    async fn test_start_is_dispatched_before_api_resolves() {
        let sink = RecordingSink::<Action>::new();
        let (release, gate) = tokio::sync::oneshot::channel::<()>();
        let gate = std::sync::Arc::new(std::sync::Mutex::new(Some(gate)));
        let create = create_action(CreateActionConfig::for_list(sink.clone(), move |(): ()| {
            let gate = gate.lock().ok().and_then(|mut gate| gate.take());
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Ok::<_, MockApiError>(test_item(1, "a"))
            }
        }));

        let pending = tokio::spawn(async move { create.call(()).await });
        tokio::task::yield_now().await;

        // The call is parked on the API; only the start action is out
        assert_eq!(sink.actions(), vec![ListAction::CreateStart]);

        release.send(()).unwrap();
        pending.await.unwrap().unwrap();
        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_custom_action_constructors() {
        #[derive(Clone, Debug, PartialEq)]
        enum AppAction {
            Notes(ListAction<TestItem>),
        }

        let sink = RecordingSink::<AppAction>::new();
        let api = MockApi::new().respond_with(test_item(3, "c"));
        let create = create_action(CreateActionConfig {
            dispatch: sink.clone(),
            api_method: move |(): ()| api.create(()),
            action_start: || AppAction::Notes(ListAction::CreateStart),
            action_end: |item| AppAction::Notes(ListAction::CreateEnd { item }),
        });

        create.call(()).await.unwrap();

        assert_eq!(
            sink.actions(),
            vec![
                AppAction::Notes(ListAction::CreateStart),
                AppAction::Notes(ListAction::CreateEnd {
                    item: test_item(3, "c")
                }),
            ]
        );
    }
}
