// Canvas rendering - world border, food, blobs, name labels
use sim::GameState;
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Vertical gap between a blob's top edge and its name label, in pixels.
const LABEL_OFFSET_PX: f64 = 5.0;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    /// Draw one complete frame from the current game state.
    pub fn draw(&self, game: &GameState) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);

        self.draw_border(game);
        self.draw_food(game);
        self.draw_ai(game);
        self.draw_player(game);
    }

    fn draw_border(&self, game: &GameState) {
        let camera = &game.camera;
        let top_left = camera.world_to_screen(Vec2::ZERO);
        let bottom_right = camera.world_to_screen(Vec2::splat(game.bounds.size));

        self.ctx.set_stroke_style_str("black");
        self.ctx.set_line_width(2.0);
        self.ctx.stroke_rect(
            top_left.x as f64,
            top_left.y as f64,
            (bottom_right.x - top_left.x) as f64,
            (bottom_right.y - top_left.y) as f64,
        );
    }

    fn draw_food(&self, game: &GameState) {
        let camera = &game.camera;
        for food in &game.food {
            if !camera.is_on_screen(food.position, food.radius) {
                continue;
            }
            let screen = camera.world_to_screen(food.position);
            self.fill_circle(screen, (food.radius * camera.zoom) as f64, &food.color.to_css());
        }
    }

    fn draw_ai(&self, game: &GameState) {
        let camera = &game.camera;
        for ai in &game.roster.ais {
            for blob in &ai.blobs {
                if !camera.is_on_screen(blob.position, blob.radius) {
                    continue;
                }
                let screen = camera.world_to_screen(blob.position);
                let radius = (blob.radius * camera.zoom) as f64;
                self.fill_circle(screen, radius, &blob.color.to_css());

                self.ctx.set_fill_style_str("white");
                self.ctx.set_text_align("center");
                self.ctx
                    .fill_text(
                        &ai.name,
                        screen.x as f64,
                        screen.y as f64 - radius - LABEL_OFFSET_PX,
                    )
                    .ok();
            }
        }
    }

    fn draw_player(&self, game: &GameState) {
        let camera = &game.camera;
        for blob in &game.player.blobs {
            if !camera.is_on_screen(blob.position, blob.radius) {
                continue;
            }
            let screen = camera.world_to_screen(blob.position);
            self.fill_circle(screen, (blob.radius * camera.zoom) as f64, &blob.color.to_css());
        }
    }

    #[inline]
    fn fill_circle(&self, center: Vec2, radius: f64, css: &str) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.set_fill_style_str(css);
        self.ctx.fill();
        self.ctx.close_path();
    }
}
