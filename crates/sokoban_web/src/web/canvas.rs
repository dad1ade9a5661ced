use std::f64::consts::PI;

use sokoban_games::{Board, Location, Size};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use super::sprite::{CanvasSprite, OffscreenCanvasSprite, Sprite};

const BACKGROUND: &str = "#444444";
const GRID_LINE: &str = "#333333";
const WALL: &str = "#111111";
const BLOCK: &str = "#224466";
const GOAL: &str = "#664422";
const PLAYER: &str = "#66FF88";
const HINT: &str = "#669966";
const SOLVED: &str = "#88DDFF";
const LEGEND: &str = "rgba(255, 255, 255, 0.78)";

pub(super) fn context2d(
    canvas: &web_sys::HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())
}

fn offscreen_context2d(
    canvas: &web_sys::OffscreenCanvas,
) -> Result<web_sys::OffscreenCanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "offscreen: get_context threw".to_string())?
        .ok_or("offscreen: missing 2d context".to_string())?
        .dyn_into::<web_sys::OffscreenCanvasRenderingContext2d>()
        .map_err(|_| "offscreen: context is not 2d".to_string())
}

/// The subset of the 2d context API the static background needs; implemented
/// for both the on-page and the offscreen context.
trait Surface {
    fn fill_rect_with(&self, color: &str, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect_with(&self, color: &str, x: f64, y: f64, w: f64, h: f64);
}

#[allow(deprecated)]
impl Surface for web_sys::OffscreenCanvasRenderingContext2d {
    fn fill_rect_with(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.set_fill_style(&JsValue::from_str(color));
        self.fill_rect(x, y, w, h);
    }

    fn stroke_rect_with(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.set_stroke_style(&JsValue::from_str(color));
        self.stroke_rect(x, y, w, h);
    }
}

impl Surface for web_sys::CanvasRenderingContext2d {
    fn fill_rect_with(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.set_fill_style_str(color);
        self.fill_rect(x, y, w, h);
    }

    fn stroke_rect_with(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.set_stroke_style_str(color);
        self.stroke_rect(x, y, w, h);
    }
}

/// Inset square covering one cell.
fn cell_rect(loc: &Location, cell: f64) -> (f64, f64, f64, f64) {
    (loc.x * cell + 1.0, loc.y * cell + 1.0, cell - 2.0, cell - 2.0)
}

fn paint_background(s: &impl Surface, board: &Board, cells: u32, side: f64) {
    let cell = side / cells as f64;
    s.fill_rect_with(BACKGROUND, 0.0, 0.0, side, side);

    for row in 0..cells {
        for col in 0..cells {
            s.stroke_rect_with(GRID_LINE, col as f64 * cell, row as f64 * cell, cell, cell);
        }
    }

    for wall in board.walls() {
        let (x, y, w, h) = cell_rect(wall, cell);
        s.fill_rect_with(WALL, x, y, w, h);
    }
}

/// Renders the parts of the board that never move (floor grid and walls).
///
/// Prefers an `OffscreenCanvas`; browsers without it get a detached `<canvas>`.
pub(super) fn render_background(
    board: &Board,
    cells: u32,
    side: u32,
) -> Result<Box<dyn Sprite>, String> {
    match web_sys::OffscreenCanvas::new(side, side) {
        Ok(canvas) => {
            let ctx = offscreen_context2d(&canvas)?;
            paint_background(&ctx, board, cells, side as f64);
            Ok(Box::new(OffscreenCanvasSprite::new(canvas)))
        }
        Err(_) => {
            log::info!("OffscreenCanvas unavailable, using a detached canvas");
            let canvas = dom::create_canvas(side, side)?;
            let ctx = context2d(&canvas)?;
            paint_background(&ctx, board, cells, side as f64);
            Ok(Box::new(CanvasSprite::new(canvas)))
        }
    }
}

fn fill_circle(
    ctx: &web_sys::CanvasRenderingContext2d,
    loc: &Location,
    cell: f64,
) -> Result<(), String> {
    ctx.begin_path();
    ctx.arc(
        loc.x * cell + cell / 2.0,
        loc.y * cell + cell / 2.0,
        cell / 4.0,
        0.0,
        PI * 2.0,
    )
    .map_err(|_| "canvas: arc threw".to_string())?;
    ctx.fill();
    Ok(())
}

pub(super) struct DrawOptions<'a> {
    pub(super) cell_size: f64,
    pub(super) side: f64,
    pub(super) show_hints: bool,
    pub(super) status: &'a str,
}

pub(super) fn draw_board(
    ctx: &web_sys::CanvasRenderingContext2d,
    board: &Board,
    background: &dyn Sprite,
    opts: &DrawOptions<'_>,
) -> Result<(), String> {
    let cell = opts.cell_size;

    background.draw(ctx, Location::ORIGIN, Size::square(opts.side))?;

    for block in board.blocks() {
        let (x, y, w, h) = cell_rect(block, cell);
        ctx.fill_rect_with(BLOCK, x, y, w, h);
    }

    // Goals are drawn over blocks so a placed block still shows its target.
    ctx.set_fill_style_str(GOAL);
    for goal in board.goals() {
        fill_circle(ctx, goal, cell)?;
    }

    ctx.set_fill_style_str(if board.is_solved() { SOLVED } else { PLAYER });
    fill_circle(ctx, &board.player, cell)?;

    if opts.show_hints && !board.is_solved() {
        ctx.set_line_width(2.0);
        for target in board.valid_moves() {
            let (x, y, w, h) = cell_rect(&target, cell);
            ctx.stroke_rect_with(HINT, x, y, w, h);
        }
    }

    if !opts.status.is_empty() {
        ctx.set_fill_style_str(LEGEND);
        ctx.set_font("14px ui-sans-serif, system-ui, sans-serif");
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        ctx.fill_text(opts.status, 8.0, 8.0)
            .map_err(|_| "canvas: fill_text threw".to_string())?;
    }

    Ok(())
}
