//! Queue controller - core orchestration
//!
//! Single source of truth for "which track should be playing" and the only
//! component allowed to move the queue position. Transport commands mutate
//! the queue state, then drive the presenter and the playback driver; the
//! visual transition and the media load run as two independently cancelled
//! tasks per track change, so a slow buffer never freezes the UI and a
//! fast double-tap never resurrects a superseded load.

use crate::driver::PlaybackDriver;
use crate::engine::MediaEngine;
use crate::error::{PlaybackError, Result};
use crate::events::{emit, EventReceiver, EventSender, PlayerEvent};
use crate::presenter::TransitionPresenter;
use crate::share::SharePayload;
use crate::shuffle;
use crate::types::{
    Direction, PlaybackState, PlayerConfig, QueueState, RepeatIcon, RepeatMode, ShuffleIcon,
};
use chirp_core::{Playlist, Track};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Playback-queue controller.
///
/// Owns the [`QueueState`]; the driver and presenter are injected
/// dependencies, never ambient singletons, so multiple independent player
/// instances can coexist and tests can swap the engine.
pub struct PlayerController {
    state: QueueState,
    driver: Arc<PlaybackDriver>,
    presenter: Arc<TransitionPresenter>,
    config: Arc<PlayerConfig>,
    events: EventSender,

    /// Monotonic tag for media loads; completions compare against the
    /// latest value and discard themselves when superseded.
    load_generation: Arc<AtomicU64>,

    /// In-flight visual swap for the current track change
    swap_task: Option<JoinHandle<()>>,

    /// In-flight media load for the current track change
    load_task: Option<JoinHandle<()>>,
}

impl PlayerController {
    /// Create a controller from bootstrap playlists and injected parts.
    pub fn new(
        playlists: Vec<Playlist>,
        driver: Arc<PlaybackDriver>,
        presenter: Arc<TransitionPresenter>,
        config: Arc<PlayerConfig>,
        events: EventSender,
    ) -> Self {
        Self {
            state: QueueState::new(playlists),
            driver,
            presenter,
            config,
            events,
            load_generation: Arc::new(AtomicU64::new(0)),
            swap_task: None,
            load_task: None,
        }
    }

    /// Wire up a complete player around an engine: event channel, driver,
    /// presenter, controller.
    pub fn assemble(
        playlists: Vec<Playlist>,
        engine: Arc<dyn MediaEngine>,
        config: PlayerConfig,
    ) -> (Self, EventReceiver) {
        let (tx, rx) = crate::events::channel();
        let config = Arc::new(config);
        let driver = Arc::new(PlaybackDriver::new(engine, tx.clone()));
        let presenter = Arc::new(TransitionPresenter::new(Arc::clone(&config), tx.clone()));
        let controller = Self::new(playlists, driver, presenter, config, tx);
        (controller, rx)
    }

    /// Begin playing the first track, or surface the empty placeholder.
    pub async fn start(&mut self) -> Result<()> {
        if self.state.tracks().is_empty() {
            self.show_empty();
            return Ok(());
        }
        self.load_track(0, Direction::Next).await
    }

    /// Replace the queue with freshly bootstrapped playlists and restart
    /// from the first track. Shuffle and repeat reset with the queue.
    ///
    /// A swap or load still pending from a previous track change is
    /// cancelled first so it cannot fire over the new presentation.
    pub async fn set_playlists(&mut self, playlists: Vec<Playlist>) -> Result<()> {
        self.cancel_in_flight();
        self.state = QueueState::new(playlists);
        self.start().await
    }

    /// Move the queue to `index` and start the track-change machinery.
    ///
    /// The presenter starts its exit animation immediately; the metadata
    /// swap is scheduled after the fixed transition delay and fires
    /// regardless of media-load outcome, while the load+play runs
    /// concurrently under a generation tag. On load failure the transport
    /// visual reverts to paused and the index stays where it is.
    pub async fn load_track(&mut self, index: usize, direction: Direction) -> Result<()> {
        if self.state.tracks().is_empty() {
            self.show_empty();
            return Ok(());
        }
        let track = self
            .state
            .tracks()
            .get(index)
            .cloned()
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;

        self.state.current_track = index;
        emit(&self.events, PlayerEvent::TrackChanged { index });

        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_in_flight();

        self.presenter.begin_exit(direction);

        // Visual timeline: swap after the fixed delay no matter what the
        // load is doing.
        let presenter = Arc::clone(&self.presenter);
        let delay = self.config.transition_delay;
        let swap_track = track.clone();
        self.swap_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            presenter.complete_swap(&swap_track);
        }));

        // Media timeline: last load wins; a completion that resumes under
        // a newer generation discards itself.
        let driver = Arc::clone(&self.driver);
        let generation_counter = Arc::clone(&self.load_generation);
        self.load_task = Some(tokio::spawn(async move {
            let loaded = driver.load(&track).await;
            if generation_counter.load(Ordering::SeqCst) != generation {
                debug!(track = %track.title, "discarding superseded load");
                return;
            }
            match loaded {
                Ok(()) => {
                    // A rejected start already reverts the visual inside
                    // the driver.
                    let _ = driver.play().await;
                }
                Err(e) => {
                    warn!(error = %e, file = %track.file, "media load failed");
                    driver.force_paused();
                }
            }
        }));

        Ok(())
    }

    /// Advance the queue.
    ///
    /// Repeat-one restarts in place; shuffle draws a uniformly random
    /// index (repeats allowed); otherwise the index wraps forward.
    pub async fn next_track(&mut self) -> Result<()> {
        let len = self.state.tracks().len();
        if len == 0 {
            return Ok(());
        }
        if self.state.repeat == RepeatMode::One {
            return self.restart_current().await;
        }

        let index = if self.state.shuffle {
            shuffle::random_index(len)
        } else {
            (self.state.current_track + 1) % len
        };
        self.load_track(index, Direction::Next).await
    }

    /// Rewind the queue.
    ///
    /// Always a wrapping decrement; shuffle affects forward navigation
    /// only. Repeat-one restarts in place, as with [`Self::next_track`].
    pub async fn prev_track(&mut self) -> Result<()> {
        let len = self.state.tracks().len();
        if len == 0 {
            return Ok(());
        }
        if self.state.repeat == RepeatMode::One {
            return self.restart_current().await;
        }

        let index = (self.state.current_track + len - 1) % len;
        self.load_track(index, Direction::Prev).await
    }

    /// Flip shuffle.
    ///
    /// Turning it on permutes the active playlist in place, resets the
    /// index to 0 and reloads; the permutation is deferred one scheduler
    /// tick so it never blocks the render loop. Turning it off keeps the
    /// permuted physical order and reloads nothing.
    pub async fn toggle_shuffle(&mut self) -> Result<()> {
        self.state.shuffle = !self.state.shuffle;
        emit(
            &self.events,
            PlayerEvent::ShuffleChanged {
                enabled: self.state.shuffle,
            },
        );

        if !self.state.shuffle || self.state.tracks().is_empty() {
            return Ok(());
        }

        tokio::task::yield_now().await;
        let playlist = &mut self.state.playlists[self.state.current_playlist];
        shuffle::shuffle_tracks(&mut playlist.tracks);
        self.state.current_track = 0;
        self.load_track(0, Direction::Next).await
    }

    /// Advance repeat mode through the fixed cycle. Pure state change.
    pub fn toggle_repeat(&mut self) -> RepeatMode {
        self.state.repeat = self.state.repeat.advance();
        emit(
            &self.events,
            PlayerEvent::RepeatChanged {
                mode: self.state.repeat,
            },
        );
        self.state.repeat
    }

    /// React to the engine's end-of-track signal.
    ///
    /// Repeat-one restarts the current track; every other mode advances
    /// through [`Self::next_track`], so `All` and `Off` wrap identically.
    pub async fn handle_track_ended(&mut self) -> Result<()> {
        self.driver.mark_ended();
        if self.state.repeat == RepeatMode::One {
            self.restart_current().await
        } else {
            self.next_track().await
        }
    }

    /// The play/pause button: pause when playing, otherwise try to play.
    pub async fn toggle_playback(&mut self) -> Result<()> {
        if self.state.tracks().is_empty() {
            return Ok(());
        }
        match self.driver.state() {
            PlaybackState::Playing => self.driver.pause(),
            PlaybackState::Paused | PlaybackState::Ended | PlaybackState::Loading => {
                let _ = self.driver.play().await;
            }
        }
        Ok(())
    }

    /// Flip quiet mode. Returns the new mute state.
    pub fn toggle_mute(&mut self) -> bool {
        self.driver.toggle_muted()
    }

    /// Share payload for the current track, `None` when the queue is
    /// empty.
    pub fn share_payload(&self) -> Option<SharePayload> {
        self.state
            .current()
            .map(|track| SharePayload::for_track(track, &self.config.share_url))
    }

    /// Surface the bootstrap-failure presentation.
    pub fn show_bootstrap_error(&self, message: &str) {
        warn!(message, "bootstrap failed, showing error presentation");
        self.presenter.show_error();
        emit(
            &self.events,
            PlayerEvent::Error {
                message: message.to_string(),
            },
        );
    }

    /// The queue state (read-only).
    pub fn queue(&self) -> &QueueState {
        &self.state
    }

    /// The track at the current queue position, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.state.current()
    }

    /// The injected playback driver.
    pub fn driver(&self) -> &Arc<PlaybackDriver> {
        &self.driver
    }

    /// The injected transition presenter.
    pub fn presenter(&self) -> &Arc<TransitionPresenter> {
        &self.presenter
    }

    /// Shuffle icon variant for the view.
    pub fn shuffle_icon(&self) -> ShuffleIcon {
        ShuffleIcon::from(self.state.shuffle)
    }

    /// Repeat icon variant for the view.
    pub fn repeat_icon(&self) -> RepeatIcon {
        RepeatIcon::from(self.state.repeat)
    }

    /// Restart-in-place for repeat-one: seek to zero and resume, index
    /// untouched. A rejected resume is already downgraded by the driver.
    async fn restart_current(&mut self) -> Result<()> {
        self.driver.restart();
        let _ = self.driver.play().await;
        Ok(())
    }

    /// Terminal placeholder: presenter shows the empty state, the engine
    /// is paused, transport commands become no-ops upstream.
    fn show_empty(&self) {
        self.presenter.show_empty();
        self.driver.pause();
    }

    /// Cancel the in-flight visual swap and media load of the previous
    /// track change. First-class operation: called before every new
    /// change so at most one transition is in flight.
    fn cancel_in_flight(&mut self) {
        if let Some(task) = self.swap_task.take() {
            task.abort();
        }
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
    }
}

impl Drop for PlayerController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
