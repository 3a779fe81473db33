//! Wires page behavior to the DOM.
//!
//! [`PageController::attach`] injects the style fragments, finds the page's
//! fixed elements, and registers every listener, observer, and timer. The
//! returned controller owns all of them: dropping it detaches the listeners,
//! disconnects the observers, stops the particle spawner, and cancels any
//! counters still running. Ripple spans and particles already in flight
//! finish their animations and remove themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::sleep;
use js_sys::Date;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::counter::{self, CountUp};
use crate::debounce::TrailingEdge;
use crate::menu::{self, Focus};
use crate::page::{self, PageElements};
use crate::particles;
use crate::reveal;
use crate::ripple::{self, RippleGeometry};
use crate::scroll;
use crate::styles;
use crate::theme::{self, Theme};

/// One registered event listener. Dropping removes it from its target.
struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// One intersection observer plus the closure backing its callback.
struct ObserverHandle {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Owns everything the behavior layer registered against the page.
pub struct PageController {
    listeners: Vec<ListenerHandle>,
    observers: Vec<ObserverHandle>,
    particle_spawner: Option<Interval>,
    pending_header_restyle: Rc<RefCell<Option<Timeout>>>,
    counters_cancelled: Rc<Cell<bool>>,
}

impl PageController {
    /// Attach all page behavior to `window`'s document.
    ///
    /// Missing page sections are skipped with a warning; only a document
    /// that cannot host the behavior at all is an error.
    ///
    /// # Errors
    ///
    /// Fails if the window has no document, if the style fragments cannot be
    /// injected, or if a listener or observer cannot be registered.
    pub fn attach(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        styles::inject(&document)?;
        let elements = PageElements::query(&document);

        let mut controller = Self {
            listeners: Vec::new(),
            observers: Vec::new(),
            particle_spawner: None,
            pending_header_restyle: Rc::new(RefCell::new(None)),
            counters_cancelled: Rc::new(Cell::new(false)),
        };
        controller.wire_menu(&document, &elements)?;
        controller.wire_theme(window, &document, &elements)?;
        controller.wire_anchors(&document)?;
        controller.wire_scroll(window, &document, &elements)?;
        controller.wire_reveal(&document, &elements)?;
        controller.wire_interactions(&document)?;
        controller.start_particles(window);
        Ok(controller)
    }

    // --- Listener registration ---

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure: Closure<dyn FnMut(Event)> = Closure::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push(ListenerHandle {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    fn listen_passive<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure: Closure<dyn FnMut(Event)> = Closure::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push(ListenerHandle {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    // --- Navigation menu ---

    fn wire_menu(&mut self, document: &Document, elements: &PageElements) -> Result<(), JsValue> {
        let (Some(toggle), Some(menu_el)) =
            (elements.nav_toggle.clone(), elements.nav_menu.clone())
        else {
            return Ok(());
        };

        let click_toggle = toggle.clone();
        let click_menu = menu_el.clone();
        self.listen(&toggle, "click", move |_event: Event| {
            let open = click_menu.class_list().contains(menu::OPEN_CLASS);
            apply_menu_effect(&click_toggle, &click_menu, &menu::toggle(open));
        })?;

        let escape_toggle = toggle;
        let escape_menu = menu_el;
        self.listen(document, "keydown", move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() != "Escape" {
                return;
            }
            let open = escape_menu.class_list().contains(menu::OPEN_CLASS);
            if let Some(effect) = menu::escape(open) {
                apply_menu_effect(&escape_toggle, &escape_menu, &effect);
            }
        })?;
        Ok(())
    }

    // --- Theme toggle ---

    fn wire_theme(
        &mut self,
        window: &Window,
        document: &Document,
        elements: &PageElements,
    ) -> Result<(), JsValue> {
        let Some(body) = document.body() else {
            return Ok(());
        };

        // The markup defaults to light, so only a stored dark preference
        // needs applying on load. The body class lands even when the page
        // ships no toggle control; only the glyph swap needs one.
        let stored = stored_theme(window);
        if stored.dark() {
            set_class(&body, theme::BODY_CLASS, true);
            if let Some(toggle) = &elements.theme_toggle {
                toggle.set_text_content(Some(stored.glyph()));
            }
        }

        let Some(toggle) = elements.theme_toggle.clone() else {
            return Ok(());
        };
        let click_window = window.clone();
        let click_toggle = toggle.clone();
        self.listen(&toggle, "click", move |_event: Event| {
            let current = Theme::from_dark_class(body.class_list().contains(theme::BODY_CLASS));
            let next = current.flipped();
            apply_theme(&body, &click_toggle, next);
            store_theme(&click_window, next);
        })?;
        Ok(())
    }

    // --- Smooth-scrolling anchors ---

    fn wire_anchors(&mut self, document: &Document) -> Result<(), JsValue> {
        for anchor in page::query_all(document, page::ANCHOR_LINKS) {
            let document = document.clone();
            let link = anchor.clone();
            self.listen(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(id) = page::anchor_fragment(&href) else {
                    return;
                };
                let Some(target) = document.get_element_by_id(id) else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            })?;
        }
        Ok(())
    }

    // --- Scroll-reactive header and progress bar ---

    fn wire_scroll(
        &mut self,
        window: &Window,
        document: &Document,
        elements: &PageElements,
    ) -> Result<(), JsValue> {
        if let Some(header) = elements.header.clone() {
            let debounce = Rc::new(RefCell::new(TrailingEdge::new(f64::from(
                scroll::DEBOUNCE_QUIET_MS,
            ))));
            let pending = Rc::clone(&self.pending_header_restyle);
            let header_window = window.clone();
            self.listen_passive(window, "scroll", move |_event: Event| {
                let deadline = debounce.borrow_mut().call(Date::now());
                let debounce_for_timer = Rc::clone(&debounce);
                let window = header_window.clone();
                let header = header.clone();
                let restyle = Timeout::new(scroll::DEBOUNCE_QUIET_MS, move || {
                    if !debounce_for_timer.borrow_mut().poll(deadline) {
                        return;
                    }
                    let offset = window.scroll_y().unwrap_or(0.0);
                    set_class(&header, scroll::HEADER_CLASS, scroll::header_condensed(offset));
                });
                // Arming the next timeout cancels the superseded one.
                *pending.borrow_mut() = Some(restyle);
            })?;
        }

        let progress_window = window.clone();
        let progress_document = document.clone();
        let mut bar: Option<HtmlElement> = None;
        self.listen(window, "scroll", move |_event: Event| {
            if bar.is_none() {
                bar = find_or_create_progress_bar(&progress_document);
            }
            let Some(bar) = bar.as_ref() else {
                return;
            };
            let offset = progress_window.page_y_offset().unwrap_or(0.0);
            let document_height = progress_document
                .body()
                .map_or(0.0, |body| f64::from(body.scroll_height()));
            let viewport_height = progress_window
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or(0.0);
            let percent = scroll::progress_percent(offset, document_height, viewport_height);
            let _ = bar.style().set_property("width", &format!("{percent}%"));
        })?;
        Ok(())
    }

    // --- Entrance animations and stat counters ---

    fn wire_reveal(&mut self, document: &Document, elements: &PageElements) -> Result<(), JsValue> {
        let targets = page::query_all(document, page::ENTRANCE_TARGETS);
        if !targets.is_empty() {
            let closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
                Closure::new(|entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let element = entry.target();
                        let marked = element.class_list().contains(reveal::ENTRANCE_CLASS);
                        if reveal::triggers(entry.is_intersecting(), marked) {
                            let _ = element.class_list().add_1(reveal::ENTRANCE_CLASS);
                        }
                    }
                });
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(reveal::ENTRANCE_THRESHOLD));
            init.set_root_margin(reveal::ENTRANCE_ROOT_MARGIN);
            let observer =
                IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
            for target in &targets {
                observer.observe(target);
            }
            self.observers.push(ObserverHandle {
                observer,
                _closure: closure,
            });
        }

        if let Some(activity) = elements.activity.clone() {
            let mut latch = reveal::Latch::default();
            let cancelled = Rc::clone(&self.counters_cancelled);
            let section = activity.clone();
            let closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
                Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let visible = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<IntersectionObserverEntry>()
                            .is_ok_and(|entry| entry.is_intersecting())
                    });
                    if !latch.observe(visible) {
                        return;
                    }
                    start_counters(&section, &cancelled);
                    observer.unobserve(&section);
                });
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(reveal::STATS_THRESHOLD));
            let observer =
                IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
            observer.observe(&activity);
            self.observers.push(ObserverHandle {
                observer,
                _closure: closure,
            });
        }
        Ok(())
    }

    // --- Card hover and button ripple ---

    fn wire_interactions(&mut self, document: &Document) -> Result<(), JsValue> {
        for card in page::query_all(document, page::HOVER_CARDS) {
            let enter_card = card.clone();
            self.listen(&card, "mouseenter", move |_event: Event| {
                set_transform(&enter_card, ripple::CARD_LIFT);
            })?;
            let leave_card = card.clone();
            self.listen(&card, "mouseleave", move |_event: Event| {
                set_transform(&leave_card, ripple::CARD_REST);
            })?;
        }

        for button in page::query_all(document, page::BUTTONS) {
            let button_el = button.clone();
            self.listen(&button, "click", move |event: Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = button_el.get_bounding_client_rect();
                let geometry = RippleGeometry::for_click(
                    f64::from(mouse.client_x()),
                    f64::from(mouse.client_y()),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                );
                spawn_ripple(&button_el, &geometry);
            })?;
        }
        Ok(())
    }

    // --- Particles ---

    fn start_particles(&mut self, window: &Window) {
        let window = window.clone();
        self.particle_spawner = Some(Interval::new(particles::SPAWN_INTERVAL_MS, move || {
            spawn_particle(&window);
        }));
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.counters_cancelled.set(true);
        self.pending_header_restyle.borrow_mut().take();
        log::debug!("page behavior detached");
    }
}

fn apply_menu_effect(toggle: &Element, menu_el: &Element, effect: &menu::MenuEffect) {
    set_class(toggle, menu::OPEN_CLASS, effect.open);
    set_class(menu_el, menu::OPEN_CLASS, effect.open);
    let _ = toggle.set_attribute("aria-expanded", effect.aria_expanded);
    let _ = toggle.set_attribute("aria-label", effect.aria_label);
    match effect.focus {
        Focus::FirstMenuItem => {
            if let Some(link) = menu_el
                .query_selector("a")
                .unwrap_or(None)
                .and_then(|link| link.dyn_into::<HtmlElement>().ok())
            {
                let _ = link.focus();
            }
        }
        Focus::Toggle => {
            if let Some(html_toggle) = toggle.dyn_ref::<HtmlElement>() {
                let _ = html_toggle.focus();
            }
        }
        Focus::Unchanged => {}
    }
}

fn apply_theme(body: &HtmlElement, toggle: &Element, theme: Theme) {
    set_class(body, theme::BODY_CLASS, theme.dark());
    toggle.set_text_content(Some(theme.glyph()));
}

fn stored_theme(window: &Window) -> Theme {
    let stored = window
        .local_storage()
        .unwrap_or(None)
        .and_then(|storage| storage.get_item(theme::STORAGE_KEY).unwrap_or(None));
    Theme::from_storage(stored.as_deref())
}

fn store_theme(window: &Window, theme: Theme) {
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(theme::STORAGE_KEY, theme.storage_value());
    }
}

fn find_or_create_progress_bar(document: &Document) -> Option<HtmlElement> {
    if let Ok(Some(existing)) = document.query_selector(page::PROGRESS_BAR) {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let bar = document.create_element("div").ok()?;
    bar.set_class_name(scroll::PROGRESS_CLASS);
    let _ = bar.set_attribute("style", styles::PROGRESS_BAR_STYLE);
    let body = document.body()?;
    body.append_child(&bar).ok()?;
    bar.dyn_into::<HtmlElement>().ok()
}

fn start_counters(section: &Element, cancelled: &Rc<Cell<bool>>) {
    for value_el in page::query_all_within(section, page::STAT_VALUES) {
        let Some(text) = value_el.text_content() else {
            continue;
        };
        // Labels without a positive number keep their text untouched.
        let Some(target) = counter::extract_target(&text).filter(|target| *target > 0.0) else {
            continue;
        };
        value_el.set_text_content(Some("0"));
        run_count_up(value_el, target, Rc::clone(cancelled));
    }
}

fn run_count_up(element: Element, target: f64, cancelled: Rc<Cell<bool>>) {
    spawn_local(async move {
        let count = CountUp::new(target);
        let started = Date::now();
        loop {
            sleep(Duration::from_millis(u64::from(counter::TICK_MS))).await;
            if cancelled.get() {
                return;
            }
            let elapsed = Date::now() - started;
            element.set_text_content(Some(&counter::format_value(count.display_at(elapsed))));
            if count.done(elapsed) {
                return;
            }
        }
    });
}

fn spawn_ripple(button: &Element, geometry: &RippleGeometry) {
    let Some(document) = button.owner_document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };
    span.set_class_name(ripple::CLASS);
    let _ = span.set_attribute("style", &geometry.inline_style());
    if button.append_child(&span).is_err() {
        return;
    }
    Timeout::new(ripple::DURATION_MS, move || span.remove()).forget();
}

fn spawn_particle(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(particle) = document.create_element("div") else {
        return;
    };
    particle.set_text_content(Some(particles::GLYPH));
    let width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);
    let x = particles::spawn_x(js_sys::Math::random(), width);
    let _ = particle.set_attribute("style", &particles::inline_style(x));
    if body.append_child(&particle).is_err() {
        return;
    }
    Timeout::new(particles::FALL_DURATION_MS, move || particle.remove()).forget();
}

fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

fn set_transform(element: &Element, transform: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = html.style().set_property("transform", transform);
}
