use crate::assets::Assets;
use crate::core::{Foreground, Scene, Viewport};
use crate::render::Painter;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub assets: Rc<RefCell<Assets>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: Painter,
    pub started_at: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = Viewport::fit(self.canvas.width() as f32, self.canvas.height() as f32);
        let time_sec = self.started_at.elapsed().as_secs_f32();
        if let Err(e) = self.paint(&viewport, time_sec) {
            log::error!("render error: {:?}", e);
        }
    }

    // Stacking order: background, light, wash, petals, foreground.
    // A failed layer is skipped; the simulation still advances.
    fn paint(&self, vp: &Viewport, time_sec: f32) -> Result<(), JsValue> {
        let assets = self.assets.borrow();
        let mut scene = self.scene.borrow_mut();

        self.painter.clear(vp);
        let background = self.painter.background(&assets, vp);
        let light = self.painter.sun_rays(scene.rays(), scene.frame(), vp);
        self.painter.color_wash(vp);

        scene.step(time_sec);

        let petals = self.painter.petals(scene.petals(), &assets, vp);
        let foreground = match scene.config.foreground {
            Foreground::Branches => self.painter.branches(scene.branches(), &assets, vp),
            Foreground::Fish => self.painter.fish(scene.fish(), &assets, vp),
        };

        [background, light, petals, foreground]
            .into_iter()
            .find(Result::is_err)
            .unwrap_or(Ok(()))
    }
}

/// Drive `frame_ctx` from requestAnimationFrame. Later calls are ignored.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[frame] loop already running");
        return;
    }
    log::info!("[frame] starting animation loop");

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
