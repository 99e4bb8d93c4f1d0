//! Panic recovery.
//!
//! [`layer`] polls the rest of the chain under `catch_unwind` and turns a panic
//! into an opaque `500` response. Panic locations and backtraces are captured
//! by a panic hook ([`install_panic_hook`]) at the panic site and picked up by
//! the recovering request on the same thread.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::future::{Future, poll_fn};
use std::panic::{self, AssertUnwindSafe};
use std::pin::pin;
use std::sync::Once;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;

use crate::error::AppError;

thread_local! {
    /// Number of recovery scopes currently being polled on this thread.
    static GUARD_DEPTH: Cell<usize> = const { Cell::new(0) };
    /// Site of the last panic raised inside a recovery scope.
    static LAST_PANIC: RefCell<Option<PanicSite>> = const { RefCell::new(None) };
}

struct PanicSite {
    location: Option<String>,
    backtrace: Backtrace,
}

static PANIC_HOOK: Once = Once::new();

/// Installs the process-wide panic hook used by [`layer`]. Idempotent.
///
/// Inside a recovery scope the hook only records the panic location and
/// backtrace. Panics anywhere else are passed to the previously installed hook
/// unchanged.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if GUARD_DEPTH.get() > 0 {
                LAST_PANIC.set(Some(PanicSite {
                    location: info.location().map(ToString::to_string),
                    backtrace: Backtrace::force_capture(),
                }));
            } else {
                previous(info);
            }
        }));
    });
}

/// Marks the current thread as polling a recovery scope. Unmarked on drop,
/// including during unwinding.
struct GuardScope;

impl GuardScope {
    fn enter() -> Self {
        GUARD_DEPTH.set(GUARD_DEPTH.get() + 1);
        Self
    }
}

impl Drop for GuardScope {
    fn drop(&mut self) {
        GUARD_DEPTH.set(GUARD_DEPTH.get().saturating_sub(1));
    }
}

/// Catches panics raised while handling the request.
///
/// The panic message, location and backtrace are logged at `ERROR` and the
/// client receives `500 {"error":"internal server error"}`. Other in-flight
/// requests are unaffected.
pub async fn layer(req: Request, next: Next) -> Response {
    let mut inner = pin!(next.run(req));
    let guarded = poll_fn(|cx| {
        let _scope = GuardScope::enter();
        inner.as_mut().poll(cx)
    });

    match AssertUnwindSafe(guarded).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let fault = AppError::Fault(panic_message(payload.as_ref()));
            let (location, backtrace) = match LAST_PANIC.take() {
                Some(site) => (
                    site.location.unwrap_or_else(|| "unknown".to_string()),
                    site.backtrace.to_string(),
                ),
                None => ("unknown".to_string(), "backtrace unavailable".to_string()),
            };

            tracing::error!(
                error = %fault,
                location = %location,
                backtrace = %backtrace,
                "panic recovered while handling request"
            );

            fault.into_response()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
