//! Metric names recorded by the runtime.
//!
//! Metrics go through the [`metrics`] facade, so nothing is recorded until the
//! application installs a recorder (for example a Prometheus exporter).
//! Call [`register_metrics`] once after installing it to attach descriptions.
//!
//! # Example
//!
//! ```
//! use all_is_list_runtime::metrics::register_metrics;
//!
//! // Without a recorder this is a no-op
//! register_metrics();
//! ```

use metrics::{Unit, describe_counter};

/// Create calls started (start event dispatched)
pub const CREATE_STARTED: &str = "list.create.started";

/// Create calls whose API call succeeded (end event dispatched)
pub const CREATE_COMPLETED: &str = "list.create.completed";

/// Create calls whose API call failed
pub const CREATE_FAILED: &str = "list.create.failed";

/// Actions applied by a store
pub const STORE_ACTIONS_APPLIED: &str = "store.actions.applied";

/// Actions rejected by a store's reducer
pub const STORE_ACTIONS_REJECTED: &str = "store.actions.rejected";

/// Register descriptions for all runtime metrics
pub fn register_metrics() {
    describe_counter!(CREATE_STARTED, Unit::Count, "Create calls started");
    describe_counter!(
        CREATE_COMPLETED,
        Unit::Count,
        "Create calls whose API call resolved"
    );
    describe_counter!(CREATE_FAILED, Unit::Count, "Create calls whose API call failed");
    describe_counter!(
        STORE_ACTIONS_APPLIED,
        Unit::Count,
        "Actions applied to store state"
    );
    describe_counter!(
        STORE_ACTIONS_REJECTED,
        Unit::Count,
        "Actions rejected by the store reducer"
    );
}
