//! Falling letters background.
//!
//! A full-viewport canvas behind the page content. The animation is started
//! once the canvas is mounted and stopped when the component is cleaned up.

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::rain::{FADE_STYLE, FONT_SIZE, GLYPH_STYLE};
use crate::core::{BrowserScheduler, RainAnimation, RainSurface};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/falling_letters/falling_letters.module.css");

/// 2D canvas sized to the viewport.
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font: String,
}

impl CanvasSurface {
    fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            font: format!("{}px monospace", FONT_SIZE),
        })
    }
}

impl RainSurface for CanvasSurface {
    fn viewport(&self) -> (f64, f64) {
        dom::viewport_size()
    }

    fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn fade(&self) {
        self.ctx.set_fill_style_str(FADE_STYLE);
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        self.ctx.set_fill_style_str(GLYPH_STYLE);
        self.ctx.set_font(&self.font);
    }

    fn draw_glyph(&self, glyph: char, x: f64, y: f64) {
        let mut buf = [0u8; 4];
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
    }
}

#[component]
pub fn FallingLetters() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let animation = StoredValue::new_local(None::<RainAnimation<BrowserScheduler>>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if animation.with_value(Option::is_some) {
            return;
        }
        match CanvasSurface::new(canvas) {
            Some(surface) => {
                animation.set_value(Some(RainAnimation::start(&BrowserScheduler, surface)));
            }
            None => log::warn!("2d canvas context unavailable; background disabled"),
        }
    });

    on_cleanup(move || {
        animation.update_value(|a| {
            a.take();
        })
    });

    view! { <canvas node_ref=canvas_ref class=css::canvas aria-hidden="true" /> }
}
