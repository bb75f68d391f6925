//! Common status symbols used in the status bar

/// Progress indicator (⟳)
pub const PROGRESS: &str = "⟳";

/// Paw print, shown for fresh fun facts
pub const PAW: &str = "🐾";

pub fn progress(msg: &str) -> String {
    format!("{} {}...", PROGRESS, msg)
}

pub fn paw(msg: &str) -> String {
    format!("{} {}", PAW, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        assert_eq!(progress("Flipping"), "⟳ Flipping...");
        assert_eq!(paw("New fact"), "🐾 New fact");
    }
}
