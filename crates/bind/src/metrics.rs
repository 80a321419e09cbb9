//! Metrics emitted by bound contracts.
//!
//! Everything is recorded through the `metrics` facade; nothing is exported
//! unless the host application installs a recorder. Call [`describe`] once at
//! startup to register descriptions.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::{sync::Once, time::Duration};

static DESCRIBE: Once = Once::new();

/// Register metric descriptions with the global recorder.
pub fn describe() {
    DESCRIBE.call_once(|| {
        describe_counter!("bind_calls_total", "Total read calls issued by method");
        describe_counter!(
            "bind_call_failures_total",
            "Total read calls that failed by method"
        );
        describe_histogram!(
            "bind_call_duration_seconds",
            "Duration of read calls in seconds"
        );
        describe_counter!(
            "bind_transactions_total",
            "Total transactions signed by method"
        );
        describe_counter!("bind_deployments_total", "Total contract deployments");
        describe_counter!(
            "bind_logs_decoded_total",
            "Total logs decoded into events by event"
        );
        describe_gauge!("bind_active_watchers", "Number of running event watchers");
    });
}

pub(crate) fn record_call(method: &str, success: bool, duration: Duration) {
    counter!("bind_calls_total", "method" => method.to_string()).increment(1);
    histogram!("bind_call_duration_seconds", "method" => method.to_string())
        .record(duration.as_secs_f64());

    if !success {
        counter!("bind_call_failures_total", "method" => method.to_string()).increment(1);
    }
}

pub(crate) fn record_transaction(method: &str) {
    counter!("bind_transactions_total", "method" => method.to_string()).increment(1);
}

pub(crate) fn record_deployment() {
    counter!("bind_deployments_total").increment(1);
}

pub(crate) fn record_log_decoded(event: &'static str) {
    counter!("bind_logs_decoded_total", "event" => event).increment(1);
}

pub(crate) fn watcher_started() {
    gauge!("bind_active_watchers").increment(1.0);
}

pub(crate) fn watcher_stopped() {
    gauge!("bind_active_watchers").decrement(1.0);
}
