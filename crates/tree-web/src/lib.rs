#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tree_core::{CancelToken, FrameLoop, SceneParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod lifecycle;
mod render;

use constants::CANVAS_ID;
use frame::FrameContext;

// Keep the canvas backing store, camera and swapchain in step with the window
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        let viewport = dom::sync_canvas_backing_size(&canvas_resize);
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.resize(viewport);
        }
    });
}

// Stop requesting frames once the page is unloaded for good
fn wire_teardown(token: CancelToken) {
    dom::add_window_event_listener("pagehide", move |event| {
        let persisted = event
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        lifecycle::on_pagehide(&token, persisted);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::sync_canvas_backing_size(&canvas);
    let frame_loop = FrameLoop::new(SceneParams::default(), viewport, StdRng::from_entropy())?;
    {
        let state = frame_loop.state();
        log::info!(
            "[scene] lights={} snowflakes={} viewport={}x{}",
            state.lights.len(),
            state.snowflakes.len(),
            viewport.width,
            viewport.height
        );
    }

    let gpu = frame::init_gpu(&canvas, &frame_loop)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext { frame_loop, gpu }));
    wire_canvas_resize(&canvas, frame_ctx.clone());
    wire_teardown(frame_ctx.borrow().cancel_token());

    // Scene update + render driven by requestAnimationFrame
    frame::start_loop(frame_ctx);
    Ok(())
}
