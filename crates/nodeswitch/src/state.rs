use std::sync::RwLock;
use std::time::{Duration, Instant};

/// An action is considered recent within this window.
const HEALTH_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Shared application state, guarded by a single lock. Handlers touch
/// it at the start of every user-initiated action.
pub struct AppState {
    inner: RwLock<Inner>,
}

struct Inner {
    last_active: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                last_active: Instant::now(),
            }),
        }
    }

    pub fn touch(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.last_active = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.last_active.elapsed()
    }

    pub fn healthy(&self) -> bool {
        self.idle_for() < HEALTH_WINDOW
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_healthy() {
        let state = AppState::new();
        assert!(state.healthy());
    }

    #[test]
    fn test_touch_resets_idle_time() {
        let state = AppState::new();
        std::thread::sleep(Duration::from_millis(10));
        let before = state.idle_for();
        state.touch();
        assert!(state.idle_for() < before);
    }
}
