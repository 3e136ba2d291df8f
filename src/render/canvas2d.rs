//! Browser canvas backend

use glam::Vec2;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

use super::{Canvas, Style, TextStyle};

fn apply(ctx: &CanvasRenderingContext2d, style: &Style) {
    ctx.set_stroke_style_str(style.color);
    ctx.set_fill_style_str(style.color);
    ctx.set_line_width(style.line_width as f64);
}

fn finish(ctx: &CanvasRenderingContext2d, style: &Style) {
    ctx.close_path();
    if style.fill {
        ctx.fill();
    }
    ctx.stroke();
}

impl Canvas for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn path(&mut self, points: &[Vec2], style: &Style) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        apply(self, style);
        self.begin_path();
        self.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.line_to(p.x as f64, p.y as f64);
        }
        finish(self, style);
    }

    fn text(&mut self, pos: Vec2, text: &str, style: &TextStyle) {
        self.set_fill_style_str(style.color);
        self.set_font(style.font);
        self.set_text_align(style.align.as_css());
        if let Err(e) = self.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: &Style) {
        apply(self, style);
        self.begin_path();
        if let Err(e) = self.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        finish(self, style);
    }
}
