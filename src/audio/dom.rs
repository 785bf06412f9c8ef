// Browser backend: `<audio>` elements as playables, `.play-button` elements as controls.
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, EventTarget, HtmlAudioElement, HtmlElement};

use super::{AudioPlayer, Binding, Control, Environment, EventSource, Playable};
use crate::site::ControlLabels;

pub const PLAY_BUTTON_SELECTOR: &str = ".play-button";
/// Attribute on a play button naming the id of its `<audio>` element.
pub const AUDIO_ATTRIBUTE: &str = "data-audio";
const PLAYING_CLASS: &str = "playing";

#[derive(Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        Some(Self {
            document: window()?.document()?,
        })
    }

    fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }
}

pub struct DomAudio(HtmlAudioElement);

impl Playable for DomAudio {
    fn start(&self) -> LocalBoxFuture<'static, Result<(), String>> {
        let request = self.0.play();
        async move {
            let promise = request.map_err(|err| describe_js_error(&err))?;
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| describe_js_error(&err))
        }
        .boxed_local()
    }

    fn pause(&self) {
        if let Err(err) = self.0.pause() {
            tracing::warn!("failed to pause audio: {}", describe_js_error(&err));
        }
    }

    fn is_playing(&self) -> bool {
        !self.0.paused()
    }

    fn rewind(&self) {
        self.0.set_current_time(0.0);
    }
}

pub struct DomButton(HtmlElement);

impl Control for DomButton {
    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn set_active(&self, active: bool) {
        let _ = self
            .0
            .class_list()
            .toggle_with_force(PLAYING_CLASS, active);
    }
}

impl Environment for DomPage {
    type Playable = DomAudio;
    type Control = DomButton;

    fn bindings(&self) -> Vec<Binding> {
        let Ok(nodes) = self.document.query_selector_all(PLAY_BUTTON_SELECTOR) else {
            return Vec::new();
        };
        let mut bindings = Vec::new();
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            let control_id = element.id();
            if control_id.is_empty() {
                tracing::warn!("play button without an id; it cannot be bound");
                continue;
            }
            let playable_id = element.get_attribute(AUDIO_ATTRIBUTE).unwrap_or_default();
            bindings.push(Binding {
                control_id,
                playable_id,
            });
        }
        bindings
    }

    fn playable(&self, id: &str) -> Option<DomAudio> {
        self.element::<HtmlAudioElement>(id).map(DomAudio)
    }

    fn control(&self, id: &str) -> Option<DomButton> {
        self.element::<HtmlElement>(id).map(DomButton)
    }
}

impl EventSource for DomPage {
    fn on_activate(&self, control_id: &str, handler: Box<dyn Fn()>) {
        match self.document.get_element_by_id(control_id) {
            Some(element) => listen(&element, "click", handler),
            None => tracing::warn!(control = control_id, "play control vanished before binding"),
        }
    }

    fn on_ended(&self, playable_id: &str, handler: Box<dyn Fn()>) {
        // Missing playables are reported when their control is activated.
        if let Some(element) = self.document.get_element_by_id(playable_id) {
            listen(&element, "ended", handler);
        }
    }

    fn on_teardown(&self, handler: Box<dyn Fn()>) {
        if let Some(win) = window() {
            listen(&win, "beforeunload", handler);
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Attach a page-lifetime listener.
fn listen(target: &EventTarget, event: &str, handler: Box<dyn Fn()>) {
    let callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        tracing::warn!("failed to attach {event} listener: {}", describe_js_error(&err));
    }
    callback.forget();
}

/// `DOMException`s carry `name` and `message`; anything else is stringified.
fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(err, &name.into())
            .ok()
            .and_then(|value| value.as_string())
            .filter(|value| !value.trim().is_empty())
    };
    match (field("name"), field("message")) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (Some(text), None) | (None, Some(text)) => text,
        (None, None) => format!("{err:?}"),
    }
}

/// Bind the audio player to every play button on the current page.
pub fn mount_audio_player(labels: ControlLabels) -> Option<Rc<AudioPlayer<DomPage>>> {
    let page = DomPage::current()?;
    Some(AudioPlayer::initialize(page.clone(), labels, page))
}
