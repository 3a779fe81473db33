//! WASM entry point.
//!
//! Runs automatically when the module is instantiated. The controller and
//! diagnostics live for the page's lifetime, parked in thread locals so
//! their cleanup-on-drop wiring stays reachable.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::controller::PageController;
use crate::diag::Diagnostics;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
    static DIAGNOSTICS: RefCell<Option<Diagnostics>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(window) = web_sys::window() else {
        log::error!("no window, nothing to attach to");
        return;
    };

    DIAGNOSTICS.with(|slot| {
        *slot.borrow_mut() = Some(Diagnostics::install(&window));
    });

    match PageController::attach(&window) {
        Ok(controller) => {
            CONTROLLER.with(|slot| {
                *slot.borrow_mut() = Some(controller);
            });
            log::info!("page behavior attached");
        }
        Err(err) => log::error!("page behavior failed to attach: {err:?}"),
    }
}
