//! Client-side cooldown that gates repeated "send me another email" requests.
//! The countdown is driven by a one-second timer that only exists while the
//! cooldown is running.

/// Seconds a resend stays disabled after an email was requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
}

impl ResendCooldown {
    pub const fn idle() -> Self {
        Self { remaining: 0 }
    }

    /// A cooldown that has just been (re)started.
    pub const fn started() -> Self {
        Self {
            remaining: RESEND_COOLDOWN_SECS,
        }
    }

    /// Advances by one second and returns the seconds left.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn can_resend(&self) -> bool {
        !self.is_active()
    }
}

/// A cooldown paired with the handle of the timer that drives it. `H` is the
/// browser interval in the app; dropping it stops the ticks.
pub struct CooldownTimer<H> {
    cooldown: ResendCooldown,
    handle: Option<H>,
}

impl<H> Default for CooldownTimer<H> {
    fn default() -> Self {
        Self {
            cooldown: ResendCooldown::idle(),
            handle: None,
        }
    }
}

impl<H> CooldownTimer<H> {
    /// Replaces the countdown. A timer is spawned only for an active cooldown;
    /// any previous handle is dropped.
    pub fn start(&mut self, next: ResendCooldown, spawn: impl FnOnce() -> H) {
        self.cooldown = next;
        self.handle = next.is_active().then(spawn);
    }

    /// Advances one second. Once the countdown reaches zero the handle is
    /// released and returned so the caller can drop it outside the tick.
    pub fn tick(&mut self) -> Option<H> {
        if self.cooldown.tick() == 0 {
            self.handle.take()
        } else {
            None
        }
    }

    pub fn cooldown(&self) -> ResendCooldown {
        self.cooldown
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{CooldownTimer, RESEND_COOLDOWN_SECS, ResendCooldown};

    #[test]
    fn idle_allows_resend() {
        let cooldown = ResendCooldown::idle();
        assert!(cooldown.can_resend());
        assert_eq!(cooldown.remaining(), 0);
    }

    #[test]
    fn counts_down_by_one_to_zero() {
        let mut cooldown = ResendCooldown::started();
        assert_eq!(cooldown.remaining(), RESEND_COOLDOWN_SECS);

        let mut previous = cooldown.remaining();
        while cooldown.is_active() {
            assert!(!cooldown.can_resend());
            let next = cooldown.tick();
            assert_eq!(next + 1, previous);
            previous = next;
        }

        assert_eq!(cooldown.remaining(), 0);
        assert!(cooldown.can_resend());
        assert_eq!(cooldown.tick(), 0);
    }

    #[test]
    fn timer_releases_its_handle_at_zero() {
        let mut timer = CooldownTimer::default();
        timer.start(ResendCooldown::started(), || "interval");
        assert!(timer.is_running());

        for _ in 1..RESEND_COOLDOWN_SECS {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.tick(), Some("interval"));
        assert!(!timer.is_running());
        assert!(timer.cooldown().can_resend());
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn idle_start_spawns_no_timer() {
        let mut timer = CooldownTimer::<()>::default();
        let mut spawned = false;
        timer.start(ResendCooldown::idle(), || spawned = true);
        assert!(!spawned);
        assert!(!timer.is_running());
    }

    #[test]
    fn restart_replaces_the_running_timer() {
        let mut timer = CooldownTimer::default();
        timer.start(ResendCooldown::started(), || 1);
        for _ in 0..25 {
            timer.tick();
        }
        timer.start(ResendCooldown::started(), || 2);
        assert_eq!(timer.cooldown().remaining(), RESEND_COOLDOWN_SECS);

        let mut released = None;
        while released.is_none() {
            released = timer.tick();
        }
        assert_eq!(released, Some(2));
    }
}
