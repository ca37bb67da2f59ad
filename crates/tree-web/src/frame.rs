use crate::render::GpuState;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{CancelToken, FrameLoop, FrameStatus, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub frame_loop: FrameLoop<StdRng>,
    pub gpu: GpuState,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStatus {
        self.frame_loop.tick(&mut self.gpu)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.frame_loop.resize(&mut self.gpu, viewport);
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.frame_loop.cancel_token()
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    frame_loop: &FrameLoop<StdRng>,
) -> Option<GpuState> {
    match GpuState::new(canvas, frame_loop.scene()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the frame loop from requestAnimationFrame, re-requesting after each
/// frame until the loop reports it was cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let status = match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            Err(_) => FrameStatus::Continue,
        };
        match status {
            FrameStatus::Continue => request_frame(&tick_clone),
            FrameStatus::Stopped => log::info!("frame loop stopped"),
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
