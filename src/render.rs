//! Immediate-mode Canvas 2D painting of the scene.

use crate::assets::Assets;
use crate::constants::*;
use crate::core::{
    BranchSet, FishPond, PetalPool, SpriteId, SunRays, Viewport, GLOW_RADIUS,
};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Run `f` between save/restore so transforms never leak, even on error.
    fn isolated<F>(&self, f: F) -> Result<(), JsValue>
    where
        F: FnOnce(&web::CanvasRenderingContext2d) -> Result<(), JsValue>,
    {
        self.ctx.save();
        let res = f(&self.ctx);
        self.ctx.restore();
        res
    }

    /// Sprite centred on `center` (physical px), rotated, optionally mirrored.
    fn sprite(
        &self,
        img: &web::HtmlImageElement,
        center: Vec2,
        angle: f32,
        size: Vec2,
        mirror: bool,
    ) -> Result<(), JsValue> {
        self.isolated(|ctx| {
            ctx.translate(center.x as f64, center.y as f64)?;
            ctx.rotate(angle as f64)?;
            if mirror {
                ctx.scale(-1.0, 1.0)?;
            }
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                -(size.x as f64) * 0.5,
                -(size.y as f64) * 0.5,
                size.x as f64,
                size.y as f64,
            )
        })
    }

    pub fn clear(&self, vp: &Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, vp.surface.x as f64, vp.surface.y as f64);
    }

    pub fn background(&self, assets: &Assets, vp: &Viewport) -> Result<(), JsValue> {
        let Some(img) = assets.get(SpriteId::Background) else {
            return Ok(());
        };
        let [x, y, w, h] = vp.poster_rect();
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img, x as f64, y as f64, w as f64, h as f64,
        )
    }

    pub fn sun_rays(&self, rays: &SunRays, frame: u64, vp: &Viewport) -> Result<(), JsValue> {
        let origin = vp.to_physical(SunRays::origin());
        let scale = vp.scale;
        self.isolated(|ctx| {
            ctx.translate(origin.x as f64, origin.y as f64)?;
            ctx.rotate(SunRays::rotation(frame) as f64)?;

            for ray in rays.rays() {
                let tip = ray.tip() * scale;
                let gradient = ctx.create_linear_gradient(0.0, 0.0, tip.x as f64, tip.y as f64);
                gradient.add_color_stop(0.0, RAY_COLOR_INNER)?;
                gradient.add_color_stop(1.0, RAY_COLOR_OUTER)?;
                ctx.begin_path();
                ctx.move_to(0.0, 0.0);
                ctx.line_to(tip.x as f64, tip.y as f64);
                ctx.set_stroke_style_canvas_gradient(&gradient);
                ctx.set_line_width(ray.width as f64);
                ctx.stroke();
            }

            let glow_r = (GLOW_RADIUS * scale) as f64;
            let glow = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, glow_r)?;
            glow.add_color_stop(0.0, GLOW_COLOR_INNER)?;
            glow.add_color_stop(1.0, GLOW_COLOR_OUTER)?;
            ctx.begin_path();
            ctx.arc(0.0, 0.0, glow_r, 0.0, TAU)?;
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.fill();
            Ok(())
        })
    }

    pub fn color_wash(&self, vp: &Viewport) {
        let [x, y, w, h] = vp.poster_rect();
        self.ctx.set_fill_style_str(WASH_COLOR);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    pub fn petals(&self, pool: &PetalPool, assets: &Assets, vp: &Viewport) -> Result<(), JsValue> {
        let Some(img) = assets.get(SpriteId::Petal) else {
            return Ok(());
        };
        for p in pool.petals() {
            let size = Vec2::splat(p.size * vp.scale);
            self.sprite(img, vp.to_physical(p.pos), p.angle, size, false)?;
        }
        Ok(())
    }

    pub fn branches(&self, set: &BranchSet, assets: &Assets, vp: &Viewport) -> Result<(), JsValue> {
        for b in set.branches() {
            let Some(img) = assets.get(SpriteId::Branch(b.sprite)) else {
                continue;
            };
            let size = Vec2::splat(b.size * vp.scale);
            self.sprite(img, vp.to_physical(b.anchor), b.angle, size, false)?;
        }
        Ok(())
    }

    pub fn fish(&self, pond: &FishPond, assets: &Assets, vp: &Viewport) -> Result<(), JsValue> {
        let Some(img) = assets.get(SpriteId::Fish) else {
            return Ok(());
        };
        for group in pond.groups() {
            for f in &group.fish {
                let size = Vec2::splat(f.size * vp.scale);
                let mirror = f.velocity.x < 0.0;
                self.isolated(|ctx| {
                    ctx.set_global_alpha(f.opacity.clamp(0.0, 1.0) as f64);
                    self.sprite(img, vp.to_physical(f.pos), 0.0, size, mirror)
                })?;
            }
        }
        Ok(())
    }
}
