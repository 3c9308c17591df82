use crate::audio;
use crate::core::{Scene, SceneEvent, Viewport};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub rustle: Option<Rc<audio::Cue>>,
}

pub fn wire_pointermove(w: PointerWiring) {
    let mut events: Vec<SceneEvent> = Vec::new();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let viewport = Viewport::fit(w.canvas.width() as f32, w.canvas.height() as f32);

        events.clear();
        w.scene
            .borrow_mut()
            .pointer_moved(pos, &viewport, &mut events);

        for scene_ev in &events {
            match *scene_ev {
                SceneEvent::BranchRustle { index } => {
                    if let Some(cue) = &w.rustle {
                        log::debug!("[pointer] rustle branch {}", index);
                        cue.play_from_start();
                    }
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
