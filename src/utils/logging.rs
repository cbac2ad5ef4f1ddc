// ============================================================================
// Logging
// Console subscriber for applications and tests that want engine traces
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber at the given level.
///
/// Returns `false` if a global subscriber was already installed, so calling
/// this from several tests is harmless.
pub fn init_tracing(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_refused() {
        init_tracing(Level::TRACE);
        assert!(!init_tracing(Level::DEBUG));
    }
}
