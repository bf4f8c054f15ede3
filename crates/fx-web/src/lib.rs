#![cfg(target_arch = "wasm32")]

mod dom;
mod frame;
mod paint;

use frame::{FrameContext, LoopHandle, TileBinding};
use fx_core::{AmbientEngine, EngineConfig, FlickerConfig};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "fx-canvas";
const TILE_CLASS: &str = "gallery-tile";
const GRID_OVERLAY_ID: &str = "grid-overlay";

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    match Effects::mount() {
        Ok(effects) => EFFECTS.with(|slot| *slot.borrow_mut() = Some(effects)),
        Err(e) => log::error!("mount error: {e:?}"),
    }
    Ok(())
}

/// Tear down the auto-mounted effects (page navigation away from the
/// gallery). Safe to call more than once.
#[wasm_bindgen]
pub fn unmount_effects() {
    EFFECTS.with(|slot| {
        if let Some(mut effects) = slot.borrow_mut().take() {
            effects.stop();
        }
    });
}

/// The running effects stack: engine, frame loop and listener registrations.
#[wasm_bindgen]
pub struct Effects {
    ctx: Rc<RefCell<FrameContext>>,
    loop_handle: LoopHandle,
}

impl Effects {
    fn mount() -> anyhow::Result<Effects> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
        dom::sync_canvas_backing_size(&canvas);

        let ctx2d = dom::context_2d(&canvas)?;
        let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = rand::random::<u64>();
        let mut engine = AmbientEngine::new(EngineConfig::default(), bounds, seed);

        // One flicker scheduler per gallery tile, plus one for the grid
        // overlay if the page has it. Registered at virtual time zero; the
        // frame loop's epoch starts there too.
        let mut tiles: Vec<TileBinding> = Vec::new();
        for el in dom::elements_by_class(&document, TILE_CLASS) {
            let id = engine.add_flicker(FlickerConfig::default(), 0.0);
            tiles.push(TileBinding { el, flicker: id });
        }
        if let Some(el) = dom::html_element_by_id(&document, GRID_OVERLAY_ID) {
            let id = engine.add_flicker(FlickerConfig::grid_overlay(), 0.0);
            tiles.push(TileBinding { el, flicker: id });
        }
        log::info!("mounted {} flicker elements", tiles.len());

        let ctx = Rc::new(RefCell::new(FrameContext {
            engine,
            canvas: canvas.clone(),
            ctx2d,
            tiles,
            epoch: Instant::now(),
        }));

        // Resize listener: re-sync the canvas backing size and hand the new
        // bounds to the engine. The event fires between ticks on the main
        // thread, so buffers are never swapped mid-tick.
        {
            let ctx_resize = ctx.clone();
            dom::add_resize_listener(move || {
                let mut ctx = ctx_resize.borrow_mut();
                dom::sync_canvas_backing_size(&ctx.canvas);
                let (w, h) = (ctx.canvas.width() as f32, ctx.canvas.height() as f32);
                ctx.engine.resize(w, h);
            });
        }

        let loop_handle = frame::start_loop(ctx.clone());
        Ok(Effects { ctx, loop_handle })
    }
}

#[wasm_bindgen]
impl Effects {
    /// Stop the frame loop and shut the engine down. Pending flicker timers
    /// are cancelled; an in-flight animation frame sees the liveness flag and
    /// does nothing.
    pub fn stop(&mut self) {
        self.loop_handle.stop();
        self.ctx.borrow_mut().engine.shutdown();
    }
}
