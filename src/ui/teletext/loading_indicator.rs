//! Loading indicator for terminal UI

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Simple ASCII loading indicator with rotating animation
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    frame: usize,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current animation frame character
    pub fn current_frame(&self) -> &'static str {
        FRAMES[self.frame]
    }

    /// Advances to the next animation frame
    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// `message` prefixed with the current frame.
    pub fn label(&self, message: &str) -> String {
        format!("{} {}", self.current_frame(), message)
    }
}
