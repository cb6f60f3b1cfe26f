// WASM client for the blob arena: runs the simulation in the browser
// and wires DOM events into it.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use sim::{Config, GameState, GameStatus};
use wasm_bindgen::prelude::*;
use web_sys::{window, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

mod input; // Mouse and keyboard event handling
mod render; // Canvas rendering, drawing blobs/food/border
mod ui; // DOM manipulation, dashboard, leaderboard, overlays

use input::InputState;
use render::Renderer;
use ui::Ui;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// The browser-side application: simulation plus rendering and HUD.
pub struct GameApp {
    game: GameState,
    renderer: Renderer,
    ui: Ui,
    input: Rc<RefCell<InputState>>,
}

impl GameApp {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let window = window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        // Fill the browser window
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let canvas_size = Vec2::new(width as f32, height as f32);

        let config = injected_config();
        let game = GameState::new(config, canvas_size);
        let renderer = Renderer::new(canvas)?;
        let ui = Ui::new(document);
        let input = Rc::new(RefCell::new(InputState::new(canvas_size)));

        Ok(Self {
            game,
            renderer,
            ui,
            input,
        })
    }

    pub fn input_state(&self) -> Rc<RefCell<InputState>> {
        self.input.clone()
    }

    /// One frame: drain input, advance the simulation, redraw.
    pub fn update(&mut self, now_ms: f64) {
        let frame = self.input.borrow_mut().drain();

        if let Some(size) = frame.resized {
            self.game.resize(size);
        }
        self.game.set_pointer(frame.pointer);
        if frame.wheel_delta != 0.0 {
            self.game.adjust_zoom(frame.wheel_delta);
        }
        if frame.split_requested {
            self.game.split(now_ms);
        }
        if frame.click_requested && self.game.status == GameStatus::Over {
            self.game.restart(now_ms);
        }

        self.game.tick(now_ms);

        self.renderer.draw(&self.game);
        self.ui.update(&self.game);
    }
}

/// Read the configuration object the host injects as `window.GAME_CONFIG`.
/// Falls back to defaults when absent or malformed.
fn injected_config() -> Config {
    window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("GAME_CONFIG")).ok())
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
        .unwrap_or_default()
}

/// Handle JS interacts with: constructing it boots the whole game.
#[wasm_bindgen]
pub struct GameAppWrapper {
    app: Rc<RefCell<GameApp>>,
}

#[wasm_bindgen]
impl GameAppWrapper {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameAppWrapper, JsValue> {
        init();

        let app = Rc::new(RefCell::new(GameApp::new(canvas_id)?));

        setup_input_handlers(app.clone())?;
        setup_resize_handler(app.clone())?;
        setup_animation_loop(app.clone())?;

        Ok(GameAppWrapper { app })
    }

    /// Whether the session is still live.
    pub fn is_running(&self) -> bool {
        self.app.borrow().game.status == GameStatus::Running
    }

    /// The player's current total mass, for console inspection.
    pub fn total_mass(&self) -> f32 {
        self.app.borrow().game.player.total_mass()
    }
}

fn setup_input_handlers(app: Rc<RefCell<GameApp>>) -> Result<(), JsValue> {
    let window = window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let input_state = app.borrow().input_state();

    // Mouse move: track the pointer
    {
        let input = input_state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            input.borrow_mut().pointer =
                Vec2::new(event.client_x() as f32, event.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Wheel: accumulate zoom deltas
    {
        let input = input_state.clone();
        let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
            event.prevent_default();
            input.borrow_mut().wheel_delta += event.delta_y() as f32;
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Space: split toward the pointer
    {
        let input = input_state.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == " " {
                event.prevent_default();
                input.borrow_mut().split_requested = true;
            }
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Click: restart after game over. Listens on the document because the
    // canvas is hidden while the overlay is up.
    {
        let input = input_state.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            input.borrow_mut().click_requested = true;
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Resize the canvas with the browser window and tell the game.
fn setup_resize_handler(app: Rc<RefCell<GameApp>>) -> Result<(), JsValue> {
    let win = window().ok_or("No window")?;
    let input_state = app.borrow().input_state();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(win) = web_sys::window() {
            let width = win
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            if let Some(doc) = win.document() {
                if let Some(el) = doc.get_element_by_id("gameCanvas") {
                    if let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() {
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                    }
                }
            }
            input_state.borrow_mut().resized = Some(Vec2::new(width as f32, height as f32));
        }
    }) as Box<dyn FnMut()>);

    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn setup_animation_loop(app: Rc<RefCell<GameApp>>) -> Result<(), JsValue> {
    let win = window().ok_or("No window")?;

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now_ms = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        app.borrow_mut().update(now_ms);

        if let Some(win) = web_sys::window() {
            if let Some(callback) = f.borrow().as_ref() {
                win.request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok();
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        win.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }

    Ok(())
}
