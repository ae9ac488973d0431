//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from `AppState`, then
//! let the components draw it into a frame buffer. The buffer is printed in
//! one go so Zellij never shows a half-drawn frame.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState) {
    print!("{}", render_to_string(state));
}

/// Renders the plugin UI into a string of ANSI output.
#[must_use]
pub fn render_to_string(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, state.rows, state.cols)
}

/// Draws the empty state if there is one, the page otherwise.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(&mut out, empty, theme, rows, cols);
    } else {
        components::render_page_mode(&mut out, vm, theme, rows, cols);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fixtures::portfolio;
    use crate::domain::CardRef;

    fn state(rows: usize, cols: usize) -> AppState {
        let mut state = AppState::new(portfolio(), Theme::default(), 4, 1, 2026);
        state.resize(rows, cols);
        state
    }

    #[test]
    fn frame_shows_brand_page_and_footer() {
        let out = render_to_string(&state(24, 80));
        assert!(out.contains("AT Portfolio"));
        assert!(out.contains("Ada Test"));
        assert!(out.contains("© 2026 Ada"));
    }

    #[test]
    fn open_dialog_is_drawn_over_dimmed_page() {
        let mut state = state(24, 80);
        state.open_card(CardRef::Certificate(1)).unwrap();
        let out = render_to_string(&state);
        assert!(out.contains("[×]"));
        assert!(out.contains("Certificate toeic"));
        assert!(out.contains(Theme::dim()));
    }

    #[test]
    fn tiny_pane_renders_only_the_empty_state() {
        let out = render_to_string(&state(4, 20));
        assert!(out.contains("trop petite"));
        assert!(!out.contains("AT Portfolio"));
    }
}
