//! Frame loop: update, sync, render, once per host refresh.
//!
//! The host owns the cadence (a display callback in the browser, a plain
//! `for` loop in tests). The loop only decides whether another frame should
//! be requested, which stops once its [`CancelToken`] is triggered.

use crate::animation::{step, AnimationState};
use crate::camera::{apply_resize, Camera, RenderSurface, Viewport};
use crate::error::ParamsError;
use crate::params::SceneParams;
use crate::scene::Scene;
use crate::tree::build_scene;
use rand::Rng;
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

/// Draws the scene graph from a camera.
pub trait Renderer {
    type Error: Debug;
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), Self::Error>;
}

/// Shared stop flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Frame ran; request the next one.
    Continue,
    /// Token was cancelled; do not reschedule.
    Stopped,
}

pub struct FrameLoop<G: Rng> {
    params: SceneParams,
    scene: Scene,
    state: AnimationState,
    camera: Camera,
    rng: G,
    token: CancelToken,
    frames: u64,
}

impl<G: Rng> FrameLoop<G> {
    pub fn new(params: SceneParams, viewport: Viewport, mut rng: G) -> Result<Self, ParamsError> {
        let built = build_scene(&params, &mut rng)?;
        let camera = Camera::new(&params.camera, viewport);
        Ok(Self {
            params,
            scene: built.scene,
            state: built.animation,
            camera,
            rng,
            token: CancelToken::new(),
            frames: 0,
        })
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run the animation step and write the result into the scene graph.
    pub fn update(&mut self) {
        let tree_group = self.state.tree_group;
        let prev = std::mem::replace(
            &mut self.state,
            AnimationState::new(tree_group, Vec::new(), Vec::new()),
        );
        let outcome = step(prev, &self.params, &mut self.rng);
        self.state = outcome.state;
        self.state.sync_scene(&mut self.scene);
        if outcome.resets > 0 {
            log::trace!("frame {}: {} snowflakes respawned", self.frames, outcome.resets);
        }
    }

    /// One full frame. Render failures are logged and the loop keeps going.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> FrameStatus {
        if self.token.is_cancelled() {
            return FrameStatus::Stopped;
        }
        self.update();
        if let Err(e) = renderer.render(&self.scene, &self.camera) {
            log::error!("render error: {:?}", e);
        }
        self.frames += 1;
        if self.token.is_cancelled() {
            FrameStatus::Stopped
        } else {
            FrameStatus::Continue
        }
    }

    /// Drive up to `max_frames` frames back to back. Returns how many ran.
    pub fn run_frames<R: Renderer + ?Sized>(&mut self, renderer: &mut R, max_frames: u64) -> u64 {
        let start = self.frames;
        for _ in 0..max_frames {
            if self.tick(renderer) == FrameStatus::Stopped {
                break;
            }
        }
        self.frames - start
    }

    pub fn resize<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, viewport: Viewport) {
        apply_resize(&mut self.camera, surface, viewport);
    }
}
