use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// A short sample restarted from the beginning on every trigger.
pub struct Cue {
    el: web::HtmlAudioElement,
}

impl Cue {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new_with_src(url).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_preload("auto");
        Ok(Self { el })
    }

    pub fn play_from_start(&self) {
        self.el.set_current_time(0.0);
        match self.el.play() {
            Ok(promise) => {
                // Autoplay policy rejects until the page has seen a user gesture
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("[audio] play rejected: {:?}", e);
                    }
                });
            }
            Err(e) => log::warn!("[audio] play error: {:?}", e),
        }
    }
}
