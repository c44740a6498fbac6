//! Request-time dispatch of activities.
//!
//! [`Dispatcher::try_dispatch`] reports why a request failed;
//! [`Dispatcher::dispatch`] collapses every failure to
//! [`FALLBACK_MESSAGE`], which is what HTTP clients see.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use party_types::error::DispatchError;
use party_types::party::{ActivityKey, FALLBACK_MESSAGE};

use crate::registry::ActivityRegistry;

/// Resolves `(venue, activity)` names against a shared registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ActivityRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ActivityRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }

    /// Resolve and invoke an activity, reporting the failure kind.
    ///
    /// A panic inside the invocable is caught here and reported as
    /// [`DispatchError::InvocationFailed`].
    pub fn try_dispatch(&self, venue: &str, activity: &str) -> Result<String, DispatchError> {
        let key = ActivityKey::parse(venue, activity)?;
        let invocable = self
            .registry
            .get(&key)
            .ok_or_else(|| DispatchError::NotRegistered(key.to_string()))?;

        panic::catch_unwind(AssertUnwindSafe(|| invocable())).map_err(|payload| {
            DispatchError::InvocationFailed {
                key: key.to_string(),
                reason: panic_reason(&*payload),
            }
        })
    }

    /// Resolve and invoke an activity, returning the fallback on any failure.
    pub fn dispatch(&self, venue: &str, activity: &str) -> String {
        self.dispatch_outcome(venue, activity).text
    }

    /// Like [`Dispatcher::dispatch`], also reporting whether the activity ran.
    pub fn dispatch_outcome(&self, venue: &str, activity: &str) -> Dispatched {
        match self.try_dispatch(venue, activity) {
            Ok(text) => Dispatched { text, served: true },
            Err(e) => {
                tracing::debug!(%venue, %activity, error = %e, "dispatch fell back");
                Dispatched::fallback()
            }
        }
    }
}

/// Text handed back to a caller, and whether it came from an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub text: String,
    /// `false` when `text` is [`FALLBACK_MESSAGE`].
    pub served: bool,
}

impl Dispatched {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_MESSAGE.to_string(),
            served: false,
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}
