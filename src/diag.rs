//! Page-level diagnostics.
//!
//! Routes uncaught errors, unhandled promise rejections, and navigation
//! timing to the console through the `log` facade, so WASM-side behavior
//! shows up alongside everything else the page reports.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    ErrorEvent, PerformanceNavigationTiming, PerformanceObserver, PerformanceObserverEntryList,
    PerformanceObserverInit, PromiseRejectionEvent, Window,
};

/// Installed diagnostic hooks. Dropping removes the listeners and
/// disconnects the observer.
pub struct Diagnostics {
    window: Window,
    error_closure: Option<Closure<dyn FnMut(ErrorEvent)>>,
    rejection_closure: Option<Closure<dyn FnMut(PromiseRejectionEvent)>>,
    load_observer: Option<PerformanceObserver>,
    load_closure: Option<Closure<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>>,
}

impl Diagnostics {
    #[must_use]
    pub fn install(window: &Window) -> Self {
        let mut diagnostics = Self {
            window: window.clone(),
            error_closure: None,
            rejection_closure: None,
            load_observer: None,
            load_closure: None,
        };
        diagnostics.hook_errors();
        diagnostics.hook_rejections();
        diagnostics.observe_load_timing();
        diagnostics
    }

    fn hook_errors(&mut self) {
        let closure: Closure<dyn FnMut(ErrorEvent)> = Closure::new(|event: ErrorEvent| {
            log::error!(
                "uncaught error: {} ({}:{}:{})",
                event.message(),
                event.filename(),
                event.lineno(),
                event.colno()
            );
        });
        if self
            .window
            .add_event_listener_with_callback("error", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.error_closure = Some(closure);
        }
    }

    fn hook_rejections(&mut self) {
        let closure: Closure<dyn FnMut(PromiseRejectionEvent)> =
            Closure::new(|event: PromiseRejectionEvent| {
                let reason = event.reason();
                let message = reason
                    .as_string()
                    .or_else(|| {
                        js_sys::Reflect::get(&reason, &"message".into())
                            .ok()
                            .and_then(|m| m.as_string())
                    })
                    .unwrap_or_else(|| String::from("unhandled promise rejection"));
                log::error!("unhandled rejection: {message}");
                event.prevent_default();
            });
        if self
            .window
            .add_event_listener_with_callback(
                "unhandledrejection",
                closure.as_ref().unchecked_ref(),
            )
            .is_ok()
        {
            self.rejection_closure = Some(closure);
        }
    }

    /// Log total page load time once navigation timing is delivered.
    fn observe_load_timing(&mut self) {
        let closure: Closure<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)> =
            Closure::new(
                |entries: PerformanceObserverEntryList, _observer: PerformanceObserver| {
                    for entry in entries.get_entries().iter() {
                        let Ok(timing) = entry.dyn_into::<PerformanceNavigationTiming>() else {
                            continue;
                        };
                        let load_ms = timing.load_event_end() - timing.load_event_start();
                        log::info!("page load time: {load_ms:.0} ms");
                    }
                },
            );
        let Ok(observer) = PerformanceObserver::new(closure.as_ref().unchecked_ref()) else {
            return;
        };
        let init = PerformanceObserverInit::new(&js_sys::Array::of1(&"navigation".into()));
        observer.observe(&init);
        self.load_observer = Some(observer);
        self.load_closure = Some(closure);
    }
}

impl Drop for Diagnostics {
    fn drop(&mut self) {
        if let Some(closure) = self.error_closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.rejection_closure.take() {
            let _ = self.window.remove_event_listener_with_callback(
                "unhandledrejection",
                closure.as_ref().unchecked_ref(),
            );
        }
        if let Some(observer) = self.load_observer.take() {
            observer.disconnect();
        }
        self.load_closure = None;
    }
}
