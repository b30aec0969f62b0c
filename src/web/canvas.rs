// `Surface` backed by a 2D canvas context

use crate::color::Color;
use crate::surface::Surface;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `Ok(None)` when the canvas cannot hand out a 2D context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Option<CanvasSurface>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
            None => return Ok(None),
        };
        Ok(Some(CanvasSurface { canvas, context }))
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// False once the canvas has been removed from the document.
    pub fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, 2.0 * std::f64::consts::PI)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}
