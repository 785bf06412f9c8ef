use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use super::PlayerError;
use crate::site::ControlLabels;

/// An audio source addressed by id. Mirrors the parts of `HTMLMediaElement` the controller uses.
pub trait Playable {
    /// Request playback. Resolves once the platform accepted or rejected the request.
    fn start(&self) -> LocalBoxFuture<'static, Result<(), String>>;
    fn pause(&self);
    fn is_playing(&self) -> bool;
    /// Move the playback position back to the beginning.
    fn rewind(&self);
}

/// A play button.
pub trait Control {
    fn set_label(&self, label: &str);
    /// Toggles the "playing" visual state.
    fn set_active(&self, active: bool);
}

/// A control and the id of the playable it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub control_id: String,
    pub playable_id: String,
}

/// The document the controller operates on. Lookups are by id so the controller never
/// keeps platform handles between events.
pub trait Environment {
    type Playable: Playable;
    type Control: Control;

    /// Every play control currently on the page.
    fn bindings(&self) -> Vec<Binding>;
    fn playable(&self, id: &str) -> Option<Self::Playable>;
    fn control(&self, id: &str) -> Option<Self::Control>;
}

/// Delivers page events to the controller and runs its async work.
pub trait EventSource {
    fn on_activate(&self, control_id: &str, handler: Box<dyn Fn()>);
    /// Fired when a playable reaches its end on its own.
    fn on_ended(&self, playable_id: &str, handler: Box<dyn Fn()>);
    /// Fired once when the page is about to be discarded.
    fn on_teardown(&self, handler: Box<dyn Fn()>);
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// What a control currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Idle,
    Playing,
    Paused,
    Error,
}

impl ControlState {
    pub fn label(self, labels: &ControlLabels) -> &str {
        match self {
            ControlState::Idle => &labels.listen,
            ControlState::Playing => &labels.pause,
            ControlState::Paused => &labels.resume,
            ControlState::Error => &labels.error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub playable_id: String,
    pub control_id: String,
}

/// Outcome of an activation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Paused,
    Started,
    /// A newer activation arrived before this start resolved; its result was discarded.
    Superseded,
}

struct PendingStart {
    ticket: u64,
    pair: Pair,
}

#[derive(Default)]
struct Session {
    /// Most recently started pair. Stopping it does not empty the slot.
    current: Option<Pair>,
    pending: Option<PendingStart>,
    next_ticket: u64,
    /// playable id -> control that started it, used when the track ends on its own
    completions: HashMap<String, String>,
    states: HashMap<String, ControlState>,
}

impl Session {
    fn state_of(&self, control_id: &str) -> ControlState {
        self.states.get(control_id).copied().unwrap_or_default()
    }

    /// Whether a superseded start of `playable_id` may keep playing.
    fn still_claims(&self, playable_id: &str) -> bool {
        match &self.pending {
            Some(pending) => pending.pair.playable_id == playable_id,
            None => self.current.as_ref().is_some_and(|current| {
                current.playable_id == playable_id
                    && self.state_of(&current.control_id) == ControlState::Playing
            }),
        }
    }
}

/// Keeps at most one playable playing and every control's label in sync with it.
///
/// All session state lives in one `RefCell`; no borrow is held across the start `await`,
/// so activations arriving while a start is pending are handled normally. The newest
/// activation wins: older pending starts are stopped and their results discarded.
pub struct AudioPlayer<E: Environment> {
    env: E,
    labels: ControlLabels,
    bindings: Vec<Binding>,
    session: RefCell<Session>,
}

impl<E: Environment> AudioPlayer<E> {
    pub fn new(env: E, labels: ControlLabels) -> Self {
        let bindings = env.bindings();
        tracing::debug!(controls = bindings.len(), "audio player bound to page controls");
        Self {
            env,
            labels,
            bindings,
            session: RefCell::new(Session::default()),
        }
    }

    pub fn current(&self) -> Option<Pair> {
        self.session.borrow().current.clone()
    }

    pub fn state_of(&self, control_id: &str) -> ControlState {
        self.session.borrow().state_of(control_id)
    }

    /// Toggle the playable bound to `control_id`: pause it if it is the one playing,
    /// otherwise stop whatever else is current and start it.
    pub async fn handle_activation(&self, control_id: &str) -> Result<Activation, PlayerError> {
        let (pair, playable, control) = self
            .resolve(control_id)
            .inspect_err(|err| tracing::error!("{err}"))?;

        let (current, pending) = {
            let session = self.session.borrow();
            (
                session.current.clone(),
                session.pending.as_ref().map(|pending| pending.pair.clone()),
            )
        };

        if let Some(current) = current
            .as_ref()
            .filter(|current| current.playable_id == pair.playable_id)
        {
            // `is_playing` is already true while a resume is pending; pausing aborts it.
            if playable.is_playing() {
                {
                    let mut session = self.session.borrow_mut();
                    if session
                        .pending
                        .as_ref()
                        .is_some_and(|pending| pending.pair.playable_id == pair.playable_id)
                    {
                        session.pending = None;
                    }
                }
                playable.pause();
                if current.control_id != pair.control_id {
                    self.present(&current.control_id, ControlState::Idle);
                }
                self.present_to(&control, &pair.control_id, ControlState::Paused);
                return Ok(Activation::Paused);
            }
        }

        for other in [current, pending].into_iter().flatten() {
            if other.playable_id != pair.playable_id {
                self.stop(&other);
            }
        }

        self.play(pair, playable, control).await
    }

    /// Start `playable` and claim the current slot once the platform accepts.
    pub async fn play(
        &self,
        pair: Pair,
        playable: E::Playable,
        control: E::Control,
    ) -> Result<Activation, PlayerError> {
        let ticket = {
            let mut session = self.session.borrow_mut();
            session.next_ticket += 1;
            let ticket = session.next_ticket;
            session.pending = Some(PendingStart {
                ticket,
                pair: pair.clone(),
            });
            ticket
        };

        let outcome = playable.start().await;

        let is_latest = {
            let mut session = self.session.borrow_mut();
            let latest = session
                .pending
                .as_ref()
                .is_some_and(|pending| pending.ticket == ticket);
            if latest {
                session.pending = None;
            }
            latest
        };

        if !is_latest {
            if outcome.is_ok() && !self.session.borrow().still_claims(&pair.playable_id) {
                playable.pause();
                playable.rewind();
            }
            tracing::debug!(playable = %pair.playable_id, "discarding superseded start");
            return Ok(Activation::Superseded);
        }

        match outcome {
            Ok(()) => {
                {
                    let mut session = self.session.borrow_mut();
                    session
                        .completions
                        .insert(pair.playable_id.clone(), pair.control_id.clone());
                    session.current = Some(pair.clone());
                }
                let siblings = self.bindings.iter().filter(|binding| {
                    binding.playable_id == pair.playable_id && binding.control_id != pair.control_id
                });
                for sibling in siblings {
                    if self.state_of(&sibling.control_id) != ControlState::Idle {
                        self.present(&sibling.control_id, ControlState::Idle);
                    }
                }
                self.present_to(&control, &pair.control_id, ControlState::Playing);
                tracing::info!(playable = %pair.playable_id, "playback started");
                Ok(Activation::Started)
            }
            Err(reason) => {
                self.present_to(&control, &pair.control_id, ControlState::Error);
                let err = PlayerError::PlaybackStartFailed {
                    playable: pair.playable_id,
                    reason,
                };
                tracing::error!("{err}");
                Err(err)
            }
        }
    }

    /// Pause without touching the position. The pair stays current.
    pub fn pause(&self, pair: &Pair) {
        if let Some(playable) = self.env.playable(&pair.playable_id) {
            playable.pause();
        }
        self.present(&pair.control_id, ControlState::Paused);
    }

    /// Pause and rewind; the control goes back to its initial label.
    pub fn stop(&self, pair: &Pair) {
        if let Some(playable) = self.env.playable(&pair.playable_id) {
            playable.pause();
            playable.rewind();
        }
        self.present(&pair.control_id, ControlState::Idle);
    }

    /// A playable finished on its own. Same transition as [`Self::stop`] on the control
    /// that last started it; ignored for playables that never started.
    pub fn handle_natural_end(&self, playable_id: &str) {
        let control_id = self.session.borrow().completions.get(playable_id).cloned();
        if let Some(control_id) = control_id {
            self.stop(&Pair {
                playable_id: playable_id.to_string(),
                control_id,
            });
        }
    }

    pub fn stop_all_on_teardown(&self) {
        let current = self.current();
        if let Some(current) = current {
            tracing::debug!(playable = %current.playable_id, "stopping playback before unload");
            self.stop(&current);
        }
    }

    fn resolve(&self, control_id: &str) -> Result<(Pair, E::Playable, E::Control), PlayerError> {
        let unknown = || PlayerError::UnknownControl {
            control: control_id.to_string(),
        };
        let binding = self
            .bindings
            .iter()
            .find(|binding| binding.control_id == control_id)
            .ok_or_else(unknown)?;
        let playable =
            self.env
                .playable(&binding.playable_id)
                .ok_or_else(|| PlayerError::BindingNotFound {
                    control: control_id.to_string(),
                    playable: binding.playable_id.clone(),
                })?;
        let control = self.env.control(control_id).ok_or_else(unknown)?;
        let pair = Pair {
            playable_id: binding.playable_id.clone(),
            control_id: control_id.to_string(),
        };
        Ok((pair, playable, control))
    }

    fn present(&self, control_id: &str, state: ControlState) {
        match self.env.control(control_id) {
            Some(control) => self.present_to(&control, control_id, state),
            None => tracing::warn!(control = control_id, "play control is no longer on the page"),
        }
    }

    fn present_to(&self, control: &E::Control, control_id: &str, state: ControlState) {
        control.set_label(state.label(&self.labels));
        control.set_active(state == ControlState::Playing);
        self.session
            .borrow_mut()
            .states
            .insert(control_id.to_string(), state);
    }
}

impl<E: Environment + 'static> AudioPlayer<E> {
    /// Build the controller for the page and wire every control, every bound playable's
    /// end-of-track event and the unload hook to it.
    pub fn initialize<S>(env: E, labels: ControlLabels, events: S) -> Rc<Self>
    where
        S: EventSource + Clone + 'static,
    {
        let player = Rc::new(Self::new(env, labels));

        for binding in &player.bindings {
            let handler_player = Rc::clone(&player);
            let spawner = events.clone();
            let control_id = binding.control_id.clone();
            events.on_activate(
                &binding.control_id,
                Box::new(move || {
                    let player = Rc::clone(&handler_player);
                    let control_id = control_id.clone();
                    spawner.spawn(
                        async move {
                            // already logged by the controller
                            let _ = player.handle_activation(&control_id).await;
                        }
                        .boxed_local(),
                    );
                }),
            );
        }

        let mut playables: Vec<String> = player
            .bindings
            .iter()
            .map(|binding| binding.playable_id.clone())
            .collect();
        playables.sort_unstable();
        playables.dedup();
        for playable_id in playables {
            let handler_player = Rc::clone(&player);
            let ended_id = playable_id.clone();
            events.on_ended(
                &playable_id,
                Box::new(move || handler_player.handle_natural_end(&ended_id)),
            );
        }

        let teardown_player = Rc::clone(&player);
        events.on_teardown(Box::new(move || teardown_player.stop_all_on_teardown()));

        player
    }
}
