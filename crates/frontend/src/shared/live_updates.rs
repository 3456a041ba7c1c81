//! Live-update channel scoped to the subscribing view
//!
//! Wraps a `web_sys::EventSource` listening for one named event. The
//! handle owns its JS listener closure; dropping it removes the listener
//! and closes the source, so a view acquires the subscription on mount
//! and releases it exactly once on teardown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

pub struct LiveUpdates {
    source: EventSource,
    event_name: String,
    listener: Closure<dyn FnMut(MessageEvent)>,
}

impl LiveUpdates {
    /// Subscribe to `event_name` on the push channel at `url`
    ///
    /// The event payload is not consumed; any emission just invokes
    /// `on_event`.
    pub fn subscribe(
        url: &str,
        event_name: &str,
        on_event: impl Fn() + 'static,
    ) -> Result<Self, String> {
        let source =
            EventSource::new(url).map_err(|e| format!("EventSource failed: {:?}", e))?;

        let listener = Closure::wrap(Box::new(move |_: MessageEvent| {
            on_event();
        }) as Box<dyn FnMut(MessageEvent)>);

        source
            .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())
            .map_err(|e| format!("Subscribe failed: {:?}", e))?;

        Ok(Self {
            source,
            event_name: event_name.to_string(),
            listener,
        })
    }
}

impl Drop for LiveUpdates {
    fn drop(&mut self) {
        let _ = self.source.remove_event_listener_with_callback(
            &self.event_name,
            self.listener.as_ref().unchecked_ref(),
        );
        self.source.close();
    }
}
