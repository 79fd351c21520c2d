//! Navigation Stack
//!
//! A plain stack of [`Screen`]s. The top of the stack is the visible screen;
//! screens below it stay mounted.

use crate::egui_app::types::Screen;

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::Landing)
    }
}

impl Navigator {
    pub fn new(initial: Screen) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// The visible screen
    pub fn current(&self) -> &Screen {
        // The stack is never empty: `go_back` refuses to pop the root
        &self.stack[self.stack.len() - 1]
    }

    /// Push a screen on top of the stack
    pub fn navigate(&mut self, screen: Screen) {
        tracing::info!("Navigating {} -> {}", self.current().route_name(), screen.route_name());
        self.stack.push(screen);
    }

    /// Pop the visible screen. Returns false when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Replace the whole stack with a single screen
    pub fn reset(&mut self, screen: Screen) {
        self.stack.clear();
        self.stack.push(screen);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The topmost picker screen on the stack, mounted or visible
    pub fn mounted_picker(&self) -> Option<&Screen> {
        self.stack.iter().rev().find(|s| s.is_picker())
    }

    pub fn history(&self) -> &[Screen] {
        &self.stack
    }
}
