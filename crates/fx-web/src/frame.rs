use crate::paint;
use fx_core::{AmbientEngine, FlickerId};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM element whose compositing is driven by one flicker scheduler.
pub struct TileBinding {
    pub el: web::HtmlElement,
    pub flicker: FlickerId,
}

pub struct FrameContext {
    pub engine: AmbientEngine,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub tiles: Vec<TileBinding>,
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        let out = self.engine.tick(now_ms);
        paint::paint_frame(&self.ctx2d, &self.canvas, out);
        paint::apply_tile_styles(&self.tiles, out);
    }
}

/// Stops the animation-frame loop. An in-flight callback observes the flag
/// and neither repaints nor reschedules, so no work happens after `stop`.
pub struct LoopHandle {
    live: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.live.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let live = Rc::new(Cell::new(true));
    let live_tick = live.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !live_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    LoopHandle { live }
}
