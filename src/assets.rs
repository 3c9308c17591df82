//! Image loading. Images are created up front and report completion through
//! `onload`; a sprite that never loads is simply never drawn.

use crate::core::SpriteId;
use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
pub struct Assets {
    images: FnvHashMap<SpriteId, web::HtmlImageElement>,
}

impl Assets {
    /// Start loading `url` into slot `id`; `on_load` runs once it is decoded.
    pub fn load(
        &mut self,
        id: SpriteId,
        url: &str,
        mut on_load: impl FnMut() + 'static,
    ) -> anyhow::Result<()> {
        let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let loaded_url = url.to_string();
        let onload = Closure::wrap(Box::new(move || {
            log::info!("[assets] loaded {}", loaded_url);
            on_load();
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let failed_url = url.to_string();
        let onerror = Closure::wrap(Box::new(move || {
            log::warn!("[assets] failed to load {}", failed_url);
        }) as Box<dyn FnMut()>);
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        img.set_src(url);
        self.images.insert(id, img);
        Ok(())
    }

    #[inline]
    pub fn ready(&self, id: SpriteId) -> bool {
        self.images
            .get(&id)
            .map(|img| img.complete() && img.natural_width() > 0)
            .unwrap_or(false)
    }

    /// The image for `id`, only once it is ready to draw.
    #[inline]
    pub fn get(&self, id: SpriteId) -> Option<&web::HtmlImageElement> {
        if self.ready(id) {
            self.images.get(&id)
        } else {
            None
        }
    }
}
