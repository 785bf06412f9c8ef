use thiserror::Error;

/// Failures surfaced by [`super::AudioPlayer`]. None of them leave the controller inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The control names a playable that does not exist on the page.
    #[error("audio not found: control {control:?} is bound to missing playable {playable:?}")]
    BindingNotFound { control: String, playable: String },
    /// The control was never registered with the controller.
    #[error("unknown play control {control:?}")]
    UnknownControl { control: String },
    /// The platform rejected the start request.
    #[error("playback of {playable:?} failed to start: {reason}")]
    PlaybackStartFailed { playable: String, reason: String },
}
