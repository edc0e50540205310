use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::{CONTENT_ZOOM_MAX, CONTENT_ZOOM_MIN};

/// Managed state for the update notifier: the persisted startup toggle plus
/// the single-flight guard keeping concurrent checks from stacking.
#[derive(Debug)]
pub(crate) struct UpdateCheckState {
    enabled: Mutex<bool>,
    pub(crate) check_in_flight: AtomicBool,
}

impl UpdateCheckState {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled: Mutex::new(enabled),
            check_in_flight: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.lock().map(|guard| *guard).unwrap_or(true)
    }
}

/// Zoom factor applied to the content view, adjusted from the View menu.
#[derive(Debug)]
pub(crate) struct ContentZoom {
    factor: Mutex<f64>,
}

impl Default for ContentZoom {
    fn default() -> Self {
        Self {
            factor: Mutex::new(1.0),
        }
    }
}

impl ContentZoom {
    pub(crate) fn adjust(&self, step: f64) -> f64 {
        match self.factor.lock() {
            Ok(mut guard) => {
                *guard = clamp_zoom_factor(*guard + step);
                *guard
            }
            Err(_) => 1.0,
        }
    }

    pub(crate) fn reset(&self) -> f64 {
        if let Ok(mut guard) = self.factor.lock() {
            *guard = 1.0;
        }
        1.0
    }
}

pub(crate) fn clamp_zoom_factor(factor: f64) -> f64 {
    factor.clamp(CONTENT_ZOOM_MIN, CONTENT_ZOOM_MAX)
}

pub(crate) struct AtomicFlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> AtomicFlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for AtomicFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::{clamp_zoom_factor, AtomicFlagGuard, ContentZoom, UpdateCheckState};

    #[test]
    fn atomic_flag_guard_try_set_rejects_double_set_until_drop() {
        let flag = AtomicBool::new(false);

        let guard = AtomicFlagGuard::try_set(&flag).expect("first set should succeed");
        assert!(flag.load(Ordering::Relaxed));
        assert!(AtomicFlagGuard::try_set(&flag).is_none());

        drop(guard);
        assert!(!flag.load(Ordering::Relaxed));
        assert!(AtomicFlagGuard::try_set(&flag).is_some());
    }

    #[test]
    fn update_check_state_reports_configured_toggle() {
        assert!(UpdateCheckState::new(true).is_enabled());
        assert!(!UpdateCheckState::new(false).is_enabled());
    }

    #[test]
    fn content_zoom_adjusts_within_bounds() {
        let zoom = ContentZoom::default();
        assert!((zoom.adjust(0.1) - 1.1).abs() < 1e-9);
        assert!((zoom.reset() - 1.0).abs() < 1e-9);

        for _ in 0..100 {
            zoom.adjust(0.1);
        }
        assert!((zoom.adjust(0.1) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_zoom_factor_enforces_limits() {
        assert!((clamp_zoom_factor(0.0) - 0.3).abs() < 1e-9);
        assert!((clamp_zoom_factor(9.0) - 3.0).abs() < 1e-9);
        assert!((clamp_zoom_factor(1.5) - 1.5).abs() < 1e-9);
    }
}
