use gloo_timers::callback::Interval;

/// Whether a list of `len` entries has anything to rotate through.
pub fn needs_rotation(len: usize) -> bool {
    len > 1
}

/// A browser interval that is cancelled when the handle is dropped.
///
/// Components create one inside an effect and return its `cancel` from the
/// effect destructor, so no callback fires after the component unmounts.
pub struct ScopedInterval {
    interval: Option<Interval>,
}

impl ScopedInterval {
    pub fn start<F>(millis: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        log::debug!("Starting interval every {}ms", millis);
        Self {
            interval: Some(Interval::new(millis, callback)),
        }
    }

    /// A handle with nothing scheduled, for lists that have nothing to rotate.
    pub fn idle() -> Self {
        Self { interval: None }
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
            log::debug!("Interval cancelled");
        }
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_handle_cancels_cleanly() {
        let mut handle = ScopedInterval::idle();
        assert!(!handle.is_active());
        handle.cancel();
        assert!(!handle.is_active());
    }

    #[test]
    fn test_needs_rotation_only_past_one_entry() {
        assert!(!needs_rotation(0));
        assert!(!needs_rotation(1));
        assert!(needs_rotation(2));
        assert!(needs_rotation(10));
    }
}
