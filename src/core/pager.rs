//! Visibility-driven pager
//!
//! Turns "the sentinel became visible" into a single page advance. The host
//! supplies the actual visibility detection through [`VisibilityWatcher`]; the
//! pager only decides when an observation should be live.

/// Identity of the sentinel: the row position it is rendered at.
///
/// The sentinel moves whenever rows are added, which counts as a new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sentinel(pub usize);

/// Callback invoked when the observed sentinel becomes visible
pub type OnVisible = Box<dyn FnMut() + Send>;

/// Host capability that reports sentinel visibility.
///
/// Implementations must call `on_visible` at most once per transition from
/// hidden to visible, and never after `dispose`.
pub trait VisibilityWatcher: Send {
    fn observe(&mut self, sentinel: Sentinel, on_visible: OnVisible);
    fn dispose(&mut self);
}

/// Keeps at most one live observation, matching the current sentinel and
/// eligibility.
pub struct Pager<W: VisibilityWatcher> {
    watcher: W,
    observing: Option<Sentinel>,
}

impl<W: VisibilityWatcher> Pager<W> {
    pub fn new(watcher: W) -> Self {
        Self {
            watcher,
            observing: None,
        }
    }

    /// Re-arm or detach the watcher.
    ///
    /// Nothing happens while the sentinel and eligibility are unchanged, so an
    /// existing observation keeps its "already visible" memory. A moved
    /// sentinel or regained eligibility starts a fresh observation; lost
    /// eligibility detaches the watcher.
    pub fn sync<F>(&mut self, sentinel: Option<Sentinel>, eligible: bool, on_visible: F)
    where
        F: FnMut() + Send + 'static,
    {
        let target = sentinel.filter(|_| eligible);
        if target == self.observing {
            return;
        }

        if self.observing.take().is_some() {
            self.watcher.dispose();
        }
        if let Some(sentinel) = target {
            log::debug!("pager: observing sentinel at row {}", sentinel.0);
            self.watcher.observe(sentinel, Box::new(on_visible));
            self.observing = Some(sentinel);
        }
    }

    /// Detach for good (view teardown)
    pub fn teardown(&mut self) {
        if self.observing.take().is_some() {
            self.watcher.dispose();
        }
    }

    pub fn observing(&self) -> Option<Sentinel> {
        self.observing
    }

    pub fn watcher(&self) -> &W {
        &self.watcher
    }

    pub fn watcher_mut(&mut self) -> &mut W {
        &mut self.watcher
    }
}
