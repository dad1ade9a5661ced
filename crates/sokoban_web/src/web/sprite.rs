use sokoban_games::{Location, Size};

pub(super) trait Sprite {
    fn draw(
        &self,
        ctx: &web_sys::CanvasRenderingContext2d,
        loc: Location,
        size: Size,
    ) -> Result<(), String>;
}

/// Pre-rendered image held in a detached `<canvas>`.
pub(super) struct CanvasSprite {
    canvas: web_sys::HtmlCanvasElement,
}

impl CanvasSprite {
    pub(super) fn new(canvas: web_sys::HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl Sprite for CanvasSprite {
    fn draw(
        &self,
        ctx: &web_sys::CanvasRenderingContext2d,
        loc: Location,
        size: Size,
    ) -> Result<(), String> {
        ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.canvas,
            loc.x,
            loc.y,
            size.w,
            size.h,
        )
        .map_err(|_| "sprite: drawImage(canvas) threw".to_string())
    }
}

pub(super) struct OffscreenCanvasSprite {
    canvas: web_sys::OffscreenCanvas,
}

impl OffscreenCanvasSprite {
    pub(super) fn new(canvas: web_sys::OffscreenCanvas) -> Self {
        Self { canvas }
    }
}

impl Sprite for OffscreenCanvasSprite {
    fn draw(
        &self,
        ctx: &web_sys::CanvasRenderingContext2d,
        loc: Location,
        size: Size,
    ) -> Result<(), String> {
        ctx.draw_image_with_offscreen_canvas_and_dw_and_dh(
            &self.canvas,
            loc.x,
            loc.y,
            size.w,
            size.h,
        )
        .map_err(|_| "sprite: drawImage(offscreen) threw".to_string())
    }
}
