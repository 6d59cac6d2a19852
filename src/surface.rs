use crate::constants::FADE_RGB;
use heart_core::curve::sprite_outline;
use heart_core::{SpriteConfig, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Pre-render the heart sprite onto an offscreen canvas.
fn build_sprite(document: &web::Document, cfg: &SpriteConfig) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let px = cfg.size.ceil().max(1.0) as u32;
    canvas.set_width(px);
    canvas.set_height(px);

    let ctx = context_2d(&canvas)?;
    let outline = sprite_outline(&cfg.curve, cfg.size, cfg.texture_span, cfg.sample_step);
    ctx.begin_path();
    for (i, p) in outline.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x as f64, p.y as f64);
        } else {
            ctx.line_to(p.x as f64, p.y as f64);
        }
    }
    ctx.close_path();
    ctx.set_fill_style_str(&cfg.color);
    ctx.fill();
    log::debug!("[surface] sprite {}px, {} outline points", px, outline.len());
    Ok(canvas)
}

/// Canvas 2D implementation of the engine's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sprite: web::HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
        sprite: &SpriteConfig,
    ) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        let sprite = build_sprite(document, sprite)?;
        Ok(Self {
            canvas,
            ctx,
            sprite,
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn fade(&mut self, alpha: f32) {
        let (r, g, b) = FADE_RGB;
        self.ctx
            .set_fill_style_str(&format!("rgba({},{},{},{})", r, g, b, alpha));
        self.ctx
            .fill_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn set_fill_color(&mut self, css: &str) {
        self.ctx.set_fill_style_str(css);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_sprite(&mut self, x: f32, y: f32, size: f32) {
        _ = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.sprite,
            x as f64,
            y as f64,
            size as f64,
            size as f64,
        );
    }
}
