//! Translates a [`FrameOutput`] into canvas 2D calls and per-tile style
//! deltas. Draw order: wireframe floaters at the back, then particle dots
//! and their links, then the noise grain over everything.

use crate::frame::TileBinding;
use fx_core::{FloaterSprite, FrameOutput, IDLE_BRIGHTNESS};
use std::f32::consts::TAU;
use wasm_bindgen::Clamped;
use web_sys as web;

pub fn paint_frame(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    out: &FrameOutput,
) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    for f in &out.floaters {
        draw_floater(ctx, f);
    }

    for d in &out.dots {
        let b = d.brightness;
        ctx.set_fill_style_str(&format!("rgba({b},{b},{b},{:.3})", d.alpha));
        ctx.begin_path();
        let _ = ctx.arc(
            d.pos.x as f64,
            d.pos.y as f64,
            (d.size * 0.5) as f64,
            0.0,
            TAU as f64,
        );
        ctx.fill();
    }

    for l in &out.links {
        ctx.set_stroke_style_str(&format!("rgba(255,255,255,{:.3})", l.alpha));
        ctx.begin_path();
        ctx.move_to(l.from.x as f64, l.from.y as f64);
        ctx.line_to(l.to.x as f64, l.to.y as f64);
        ctx.stroke();
    }

    if !out.noise_rgba.is_empty() {
        if let Ok(image) = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&out.noise_rgba),
            out.noise_width,
            out.noise_height,
        ) {
            let _ = ctx.put_image_data(&image, 0.0, 0.0);
        }
    }
}

fn draw_floater(ctx: &web::CanvasRenderingContext2d, f: &FloaterSprite) {
    ctx.set_stroke_style_str(&format!("rgba(255,255,255,{:.3})", f.alpha));
    ctx.set_line_width(1.0);

    let sides = f.sides as usize;
    let radius = (f.size * 0.5) as f64;
    let vertex = |i: usize| -> (f64, f64) {
        let angle = (i as f32 / sides as f32) * TAU + f.rotation;
        (
            f.pos.x as f64 + angle.cos() as f64 * radius,
            f.pos.y as f64 + angle.sin() as f64 * radius,
        )
    };

    ctx.begin_path();
    for i in 0..sides {
        let (x, y) = vertex(i);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.stroke();

    // Internal chords between non-adjacent vertices give the wireframe look.
    for i in 0..sides {
        for j in (i + 2)..sides {
            if i == 0 && j == sides - 1 {
                continue; // adjacent across the seam
            }
            let (x1, y1) = vertex(i);
            let (x2, y2) = vertex(j);
            ctx.begin_path();
            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
            ctx.stroke();
        }
    }
}

/// Apply each tile's flicker state as CSS deltas: a glow plus elevated
/// brightness/contrast while active, the resting grayscale treatment while
/// idle. The tile's own noise overlay reads the custom property.
pub fn apply_tile_styles(tiles: &[TileBinding], out: &FrameOutput) {
    for tile in tiles {
        let Some(sample) = out.flickers.iter().find(|f| f.id == tile.flicker) else {
            continue;
        };
        let style = tile.el.style();
        if sample.active {
            let s = &sample.style;
            let _ = style.set_property(
                "filter",
                &format!(
                    "grayscale(0%) brightness({:.2}) contrast({:.2})",
                    s.brightness, s.contrast
                ),
            );
            let _ = style.set_property(
                "box-shadow",
                &format!(
                    "0 0 {r}px rgba(255,255,255,{g:.2}), inset 0 0 {r}px rgba(255,255,255,{gh:.2})",
                    r = s.glow_radius_px,
                    g = s.glow_strength,
                    gh = s.glow_strength * 0.625,
                ),
            );
            let _ = style.set_property("--noise-opacity", &format!("{:.2}", s.noise_opacity));
        } else {
            let _ = style.set_property(
                "filter",
                &format!("grayscale(100%) brightness({IDLE_BRIGHTNESS:.2})"),
            );
            let _ = style.set_property("box-shadow", "none");
            let _ = style.set_property("--noise-opacity", "0");
        }
    }
}
