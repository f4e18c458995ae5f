//! The navigation engine: one struct owning the scene, the camera,
//! the movement integrator, and the texture loader, wired together
//! behind a command interface and a per-frame tick.
//!
//! The host render loop drives it with exactly two calls:
//!
//! ```ignore
//! // per input event
//! if let Some(cmd) = processor.handle_event(event) {
//!     engine.execute(cmd)?;
//! }
//! // per frame
//! engine.tick(dt, &look_controller);
//! ```

mod command;

pub use command::NavCommand;

use glam::Vec3;

use crate::camera::{CameraState, MovementController, OrientationSource};
use crate::error::PanoNavError;
use crate::options::Options;
use crate::scene::{
    LoadState, MarkerIndex, MarkerPlacement, PanoramaRoom, PanoramaScene,
    TextureLoader, TextureSource,
};
use crate::util::frame_timing::FrameTiming;

/// Top-level navigation engine, generic over the host's opaque texture
/// payload.
pub struct NavEngine<T: Send + Clone + 'static> {
    scene: PanoramaScene,
    movement: MovementController,
    camera: CameraState,
    loader: TextureLoader<T>,
    timing: FrameTiming,
    entry_point: Vec3,
    /// Texture state for the *active* room.
    textures: LoadState<T>,
    /// Last set that reached `Ready`, kept so a pending or failed load
    /// leaves the previous room rendered.
    fallback: Option<T>,
}

impl<T: Send + Clone + 'static> NavEngine<T> {
    /// Create an engine showing room 0, with the initial texture fetch
    /// already submitted.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::ThreadSpawn`] if the loader thread fails to
    /// spawn.
    pub fn new<S>(
        options: Options,
        markers: MarkerIndex,
        source: S,
    ) -> Result<Self, PanoNavError>
    where
        S: TextureSource<Textures = T>,
    {
        let entry_point = options.scene.entry_point;
        let scene = PanoramaScene::new(options.scene, markers);
        let loader = TextureLoader::spawn(source)?;
        loader.submit(0, scene.room().texture_paths().clone());

        Ok(Self {
            scene,
            movement: MovementController::new(options.movement),
            camera: CameraState::new(entry_point),
            loader,
            timing: FrameTiming::new(),
            entry_point,
            textures: LoadState::Pending,
            fallback: None,
        })
    }

    /// Execute one navigation command.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::RoomOutOfRange`] when a teleport or jump runs
    /// past the end of a bounded sequence or past the top of the
    /// addressable index range; the engine state is untouched in that
    /// case.
    pub fn execute(&mut self, command: NavCommand) -> Result<(), PanoNavError> {
        match command {
            NavCommand::Move { direction, active } => {
                self.movement.set_direction(direction, active);
                Ok(())
            }
            NavCommand::TeleportNext => {
                let index = self.scene.next_index()?;
                self.activate_index(index)
            }
            NavCommand::TeleportPrev => self.activate_index(
                self.scene.current_index().saturating_sub(1),
            ),
            NavCommand::JumpTo { index } => {
                if index < 0 {
                    return self.activate_index(0);
                }
                let index = u32::try_from(index).map_err(|_| {
                    PanoNavError::RoomOutOfRange {
                        index: index as u64,
                        room_count: self.scene.options().room_count,
                    }
                })?;
                self.activate_index(index)
            }
            NavCommand::ResetCamera => {
                self.reset_camera();
                Ok(())
            }
        }
    }

    /// Advance one rendered frame.
    ///
    /// Applies any settled texture fetch (discarding stale results for
    /// rooms no longer active), integrates damped movement into the
    /// camera position, and updates frame timing. `dt` is the frame's
    /// delta time in seconds, from the host's scheduler hook.
    pub fn tick(&mut self, dt: f32, orientation: &dyn OrientationSource) {
        self.poll_loader();
        self.movement.tick(dt, orientation, &mut self.camera);
        self.timing.record(dt);
    }

    /// Camera pose.
    #[must_use]
    pub const fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// The scene: active room, index, options.
    #[must_use]
    pub const fn scene(&self) -> &PanoramaScene {
        &self.scene
    }

    /// The active room (convenience passthrough).
    #[must_use]
    pub const fn room(&self) -> &PanoramaRoom {
        self.scene.room()
    }

    /// Marker placements for the active room.
    #[must_use]
    pub fn placements(&self) -> &[MarkerPlacement] {
        self.scene.placements()
    }

    /// Movement velocity (diagnostic; see
    /// [`MovementController::velocity`]).
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.movement.velocity()
    }

    /// Texture load state for the active room.
    #[must_use]
    pub const fn texture_state(&self) -> &LoadState<T> {
        &self.textures
    }

    /// The texture set to render: the active room's when ready,
    /// otherwise the previous ready set (a failed or pending load
    /// never blanks the view).
    #[must_use]
    pub fn renderable_textures(&self) -> Option<&T> {
        self.textures.ready().or(self.fallback.as_ref())
    }

    /// Smoothed frames-per-second over recent ticks.
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Switch rooms: scene index change, camera reset, texture fetch.
    ///
    /// Identical semantics for keyboard teleports and numeric jumps.
    /// Re-activating the current index is valid and repeats the reset.
    fn activate_index(&mut self, index: u32) -> Result<(), PanoNavError> {
        let _ = self.scene.set_active_index(index)?;
        self.reset_camera();

        if let LoadState::Ready(textures) =
            std::mem::replace(&mut self.textures, LoadState::Pending)
        {
            self.fallback = Some(textures);
        }
        self.loader
            .submit(index, self.scene.room().texture_paths().clone());
        Ok(())
    }

    fn reset_camera(&mut self) {
        self.camera.position = self.entry_point;
        self.movement.reset();
    }

    /// Apply a settled texture fetch, enforcing latest-index-wins: a
    /// result for a room the user already left is dropped without
    /// touching any state.
    fn poll_loader(&mut self) {
        let Some(result) = self.loader.try_recv() else {
            return;
        };
        if result.index != self.scene.current_index() {
            log::debug!(
                "discarding stale textures for room {} (active: {})",
                result.index,
                self.scene.current_index()
            );
            return;
        }
        match result.outcome {
            Ok(textures) => {
                self.textures = LoadState::Ready(textures);
            }
            Err(msg) => {
                log::warn!(
                    "room {} textures failed, keeping previous room: {msg}",
                    result.index
                );
                self.textures = LoadState::Failed(msg);
            }
        }
    }
}
