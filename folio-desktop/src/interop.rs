use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Used before the first measurement and outside a browser.
pub const FALLBACK_VIEWPORT: (u32, u32) = (1280, 800);

fn positive_size(width: f64, height: f64) -> Option<(u32, u32)> {
    (width > 0.0 && height > 0.0).then(|| (width.round() as u32, height.round() as u32))
}

/// Inner window size, or the root element's client box when the window
/// reports zero (some embedded webviews do before first layout).
pub fn measure_viewport() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let inner = positive_size(
        window.inner_width().ok()?.as_f64()?,
        window.inner_height().ok()?.as_f64()?,
    );
    inner.or_else(|| {
        let root = window.document()?.document_element()?;
        positive_size(f64::from(root.client_width()), f64::from(root.client_height()))
    })
}

pub fn get_viewport_size() -> (u32, u32) {
    measure_viewport().unwrap_or(FALLBACK_VIEWPORT)
}

fn web_pointer(e: &PointerEvent) -> Option<web_sys::PointerEvent> {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.dyn_into::<web_sys::PointerEvent>().ok())
}

/// Element the pointer actually hit. Handlers are delegated, so this is
/// `target`, not `currentTarget`.
fn hit_element(e: &PointerEvent) -> Option<web_sys::Element> {
    e.data()
        .try_as_web_event()?
        .target()?
        .dyn_into::<web_sys::Element>()
        .ok()
}

fn within(element: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    element.closest(selector).ok().flatten()
}

/// Client coordinates of a pointer event in CSS pixels.
pub fn pointer_point(e: &PointerEvent) -> (f64, f64) {
    match web_pointer(e) {
        Some(pointer) => (f64::from(pointer.client_x()), f64::from(pointer.client_y())),
        None => {
            let point = e.data().client_coordinates();
            (point.x, point.y)
        }
    }
}

fn panel_element(e: &PointerEvent) -> Option<web_sys::Element> {
    hit_element(e).and_then(|element| within(&element, ".floating-window"))
}

/// Whether the panel the event belongs to is in the document.
pub fn panel_is_attached(e: &PointerEvent) -> bool {
    panel_element(e).is_some_and(|panel| panel.is_connected())
}

/// Presses on the traffic lights or any other button never start a drag.
pub fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    hit_element(e).is_some_and(|element| within(&element, "button, .window-controls").is_some())
}

/// Pointer capture held by a panel for the length of one drag or resize.
/// Released on drop, so ending the gesture or unmounting the panel frees it.
pub struct PointerCapture {
    element: web_sys::Element,
    pointer_id: i32,
}

impl PointerCapture {
    pub fn acquire(e: &PointerEvent) -> Option<Self> {
        let element = panel_element(e)?;
        let pointer_id = e.data().pointer_id();
        element.set_pointer_capture(pointer_id).ok()?;
        Some(Self {
            element,
            pointer_id,
        })
    }

    pub fn pointer_id(&self) -> i32 {
        self.pointer_id
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        let _ = self.element.release_pointer_capture(self.pointer_id);
    }
}

/// A DOM listener on one target for one or more event names. Removed from
/// every event on drop.
pub struct ListenerGuard {
    target: web_sys::EventTarget,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: web_sys::EventTarget,
        events: &'static [&'static str],
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        for event in events {
            target
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .ok()?;
        }
        Some(Self {
            target,
            events,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Window `resize`/`orientationchange` listener. Lives as long as the guard.
pub fn on_viewport_change(mut handler: impl FnMut((u32, u32)) + 'static) -> Option<ListenerGuard> {
    let window = web_sys::window()?;
    ListenerGuard::attach(window.into(), &["resize", "orientationchange"], move |_| {
        if let Some(size) = measure_viewport() {
            handler(size);
        }
    })
}

/// Document-level `pointerdown` listener that fires when the press lands
/// outside every element matching `selector`. Removed on drop.
pub struct OutsidePressListener {
    _guard: ListenerGuard,
}

impl OutsidePressListener {
    pub fn register(selector: &'static str, mut on_outside: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let guard = ListenerGuard::attach(document.into(), &["pointerdown"], move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| within(&element, selector))
                .is_some();
            if !inside {
                on_outside();
            }
        })?;
        Some(Self { _guard: guard })
    }
}

/// Open a link in a new tab without giving it a handle back to this page.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        dioxus_logger::tracing::warn!("Failed to open {}: {:?}", url, e);
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sizes_are_not_measurements() {
        assert_eq!(positive_size(0.0, 800.0), None);
        assert_eq!(positive_size(1280.0, 0.0), None);
        assert_eq!(positive_size(1279.6, 799.4), Some((1280, 799)));
    }
}
