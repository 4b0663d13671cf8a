//! Event sinks receive actions emitted by dispatchers.

/// Destination for emitted actions
///
/// A sink is called synchronously and may be shared between concurrent
/// create calls; each call's own start/end pair reaches it in order, pairs
/// from different calls may interleave.
///
/// Any `Fn(A) + Send + Sync` closure is a sink:
///
/// ```
/// use all_is_list_core::{EventSink, ListAction};
/// use std::sync::Mutex;
///
/// let seen = Mutex::new(Vec::new());
/// let sink = |action: ListAction<u32>| {
///     if let Ok(mut seen) = seen.lock() {
///         seen.push(action.name());
///     }
/// };
///
/// sink.dispatch(ListAction::CreateStart);
/// assert_eq!(*seen.lock().unwrap(), vec!["CREATE_START"]);
/// ```
pub trait EventSink<A>: Send + Sync {
    /// Deliver one action
    fn dispatch(&self, action: A);
}

impl<A, F> EventSink<A> for F
where
    F: Fn(A) + Send + Sync,
{
    fn dispatch(&self, action: A) {
        self(action);
    }
}
