//! Mount-time state shared by widgets.
//!
//! Widgets attached to a host start with transitions suppressed so the very
//! first frame is drawn in its resting style; the flag clears itself once
//! that frame has been rendered.

use std::sync::atomic::{AtomicBool, Ordering};

/// Mount bookkeeping for one widget.
#[derive(Debug, Default)]
pub struct Mount {
    mounted: bool,
    first_frame_pending: AtomicBool,
}

impl Mount {
    /// Record that the widget was attached. Suppresses transitions until the
    /// next frame has been drawn.
    pub fn attach(&mut self) {
        self.mounted = true;
        self.first_frame_pending.store(true, Ordering::Relaxed);
    }

    /// Record that the widget was detached.
    pub fn detach(&mut self) {
        self.mounted = false;
        self.first_frame_pending.store(false, Ordering::Relaxed);
    }

    /// Whether the widget is attached.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the frame being drawn is the first since mount.
    pub fn transitions_suppressed(&self) -> bool {
        self.first_frame_pending.load(Ordering::Relaxed)
    }

    /// Called at the end of `view`.
    pub fn frame_rendered(&self) {
        self.first_frame_pending.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_never_suppresses() {
        let mount = Mount::default();
        assert!(!mount.is_mounted());
        assert!(!mount.transitions_suppressed());
    }

    #[test]
    fn suppression_lasts_one_frame() {
        let mut mount = Mount::default();
        mount.attach();
        assert!(mount.transitions_suppressed());
        mount.frame_rendered();
        assert!(!mount.transitions_suppressed());
        mount.frame_rendered();
        assert!(!mount.transitions_suppressed());
    }

    #[test]
    fn remount_suppresses_again() {
        let mut mount = Mount::default();
        mount.attach();
        mount.frame_rendered();
        mount.detach();
        assert!(!mount.is_mounted());
        mount.attach();
        assert!(mount.transitions_suppressed());
    }
}
