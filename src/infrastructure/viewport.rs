//! Terminal implementation of the visibility capability
//!
//! The renderer reports which row range ended up on screen after each frame;
//! the watcher turns that into edge-triggered "became visible" callbacks.

use std::ops::Range;

use crate::core::pager::{OnVisible, Sentinel, VisibilityWatcher};

#[derive(Default)]
pub struct ViewportWatcher {
    target: Option<Sentinel>,
    on_visible: Option<OnVisible>,
    visible: bool,
}

impl ViewportWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the rows drawn in the last frame (the sentinel row included).
    ///
    /// Fires once when the observed sentinel enters the range; staying
    /// visible over later frames does not fire again.
    pub fn report(&mut self, visible_rows: Range<usize>) {
        let Some(sentinel) = self.target else {
            return;
        };

        let now_visible = visible_rows.contains(&sentinel.0);
        if now_visible && !self.visible {
            if let Some(callback) = self.on_visible.as_mut() {
                log::debug!("viewport: sentinel at row {} became visible", sentinel.0);
                callback();
            }
        }
        self.visible = now_visible;
    }

    pub fn is_observing(&self) -> bool {
        self.target.is_some()
    }
}

impl VisibilityWatcher for ViewportWatcher {
    fn observe(&mut self, sentinel: Sentinel, on_visible: OnVisible) {
        self.target = Some(sentinel);
        self.on_visible = Some(on_visible);
        // a fresh observation reports an already-visible sentinel
        self.visible = false;
    }

    fn dispose(&mut self) {
        self.target = None;
        self.on_visible = None;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    fn observed(sentinel: usize) -> (ViewportWatcher, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&fired);
        let mut watcher = ViewportWatcher::new();
        watcher.observe(
            Sentinel(sentinel),
            Box::new(move || {
                handle.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (watcher, fired)
    }

    #[test]
    fn test_fires_once_while_visible() {
        let (mut watcher, fired) = observed(25);

        watcher.report(0..10);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        watcher.report(18..26);
        watcher.report(18..26);
        watcher.report(19..26);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fires_again_after_leaving_view() {
        let (mut watcher, fired) = observed(25);

        watcher.report(20..26);
        watcher.report(0..10);
        watcher.report(20..26);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_visible_on_first_report() {
        let (mut watcher, fired) = observed(3);
        watcher.report(0..4);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disposed_never_fires() {
        let (mut watcher, fired) = observed(3);
        watcher.dispose();
        watcher.report(0..4);

        assert!(!watcher.is_observing());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
