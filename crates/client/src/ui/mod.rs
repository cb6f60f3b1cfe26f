// DOM manipulation - dashboard, leaderboard, game over overlay
use sim::{GameState, GameStatus, LeaderboardEntry};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Maximum rows shown on the leaderboard.
const LEADERBOARD_LIMIT: usize = 10;

pub struct Ui {
    document: Document,
}

impl Ui {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn get_el(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Refresh every HUD element from the current game state.
    pub fn update(&self, game: &GameState) {
        self.update_dashboard(game);
        self.update_leaderboard(&game.leaderboard());
        self.set_game_over_visible(game.status == GameStatus::Over);
    }

    /// Mass, average position and zoom readouts.
    fn update_dashboard(&self, game: &GameState) {
        if let Some(el) = self.get_el("mass") {
            el.set_text_content(Some(&format!("{:.0}", game.player.total_mass())));
        }
        if let Some(el) = self.get_el("location") {
            let text = match game.player.average_position() {
                Some(pos) => format!("({:.0}, {:.0})", pos.x, pos.y),
                None => "-".to_string(),
            };
            el.set_text_content(Some(&text));
        }
        if let Some(el) = self.get_el("zoom") {
            el.set_text_content(Some(&format!("{:.2}", game.camera.zoom)));
        }
    }

    /// Top entries by mass, the player's row highlighted.
    fn update_leaderboard(&self, entries: &[LeaderboardEntry]) {
        let list = match self.get_el("top-players") {
            Some(el) => el,
            None => return,
        };
        let mut html = String::new();
        for entry in entries.iter().take(LEADERBOARD_LIMIT) {
            let escaped = html_escape(&entry.name);
            if entry.is_player {
                html.push_str(&format!(
                    "<li style=\"font-weight: bold; color: rgb(255, 77, 0);\">{}: {:.0}</li>",
                    escaped, entry.mass
                ));
            } else {
                html.push_str(&format!("<li>{}: {:.0}</li>", escaped, entry.mass));
            }
        }
        list.set_inner_html(&html);
    }

    /// Toggle between the live HUD and the game over overlay.
    fn set_game_over_visible(&self, over: bool) {
        if let Some(overlay) = self.get_el("game-over") {
            if over {
                overlay.class_list().add_1("active").ok();
            } else {
                overlay.class_list().remove_1("active").ok();
            }
        }
        for id in &["gameCanvas", "dashboard", "leaderboard"] {
            if let Some(el) = self.get_el(id) {
                if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                    let display = if over { "none" } else { "" };
                    el.style().set_property("display", display).ok();
                }
            }
        }
    }
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
