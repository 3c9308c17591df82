#![cfg(target_arch = "wasm32")]
use crate::core::{Foreground, Scene, SceneConfig, SpriteId, Variant};
use crate::constants::*;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shinkai-poster starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn choose_variant(canvas: &web::HtmlCanvasElement) -> Variant {
    match dom::data_attr(canvas, DATA_VARIANT) {
        None => Variant::default(),
        Some(name) => Variant::from_name(&name).unwrap_or_else(|| {
            log::warn!("unknown variant {:?}, using {}", name, Variant::default().name());
            Variant::default()
        }),
    }
}

fn choose_seed(canvas: &web::HtmlCanvasElement) -> u64 {
    dom::data_attr(canvas, DATA_SEED)
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(rand::random)
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    events::wire_canvas_resize(&canvas);

    let variant = choose_variant(&canvas);
    let seed = choose_seed(&canvas);
    let config = SceneConfig::for_variant(variant);
    log::info!("[scene] variant={} seed={}", variant.name(), seed);

    let painter = render::Painter::new(&canvas)?;
    let scene = Rc::new(RefCell::new(Scene::with_seed(config, seed)));
    let assets = Rc::new(RefCell::new(assets::Assets::default()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        assets: assets.clone(),
        canvas: canvas.clone(),
        painter,
        started_at: Instant::now(),
    }));

    {
        let mut a = assets.borrow_mut();

        let scene_for_petals = scene.clone();
        a.load(SpriteId::Petal, PETAL_URL, move || {
            scene_for_petals.borrow_mut().fill_petals();
        })?;

        match config.foreground {
            Foreground::Branches => {
                for (i, url) in BRANCH_URLS.iter().enumerate() {
                    a.load(SpriteId::Branch(i), url, || {})?;
                }
            }
            Foreground::Fish => a.load(SpriteId::Fish, FISH_URL, || {})?,
        }

        // The loop waits for the background only
        let ctx_for_loop = frame_ctx.clone();
        a.load(SpriteId::Background, BACKGROUND_URL, move || {
            frame::start_loop(ctx_for_loop.clone());
        })?;
    }

    let rustle = match audio::Cue::new(BRANCH_SOUND_URL) {
        Ok(cue) => Some(Rc::new(cue)),
        Err(e) => {
            log::warn!("branch sound unavailable: {:?}", e);
            None
        }
    };
    events::wire_pointermove(events::PointerWiring {
        canvas,
        scene,
        rustle,
    });

    Ok(())
}
