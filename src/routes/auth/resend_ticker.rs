//! One-second ticker behind the resend buttons. The interval exists only while
//! a cooldown is running and is dropped when it reaches zero or the page
//! unmounts.

use crate::features::auth::cooldown::{CooldownTimer, ResendCooldown};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub(super) struct ResendTicker {
    cooldown: RwSignal<ResendCooldown>,
    timer: StoredValue<CooldownTimer<Interval>, LocalStorage>,
}

impl ResendTicker {
    pub(super) fn new() -> Self {
        Self {
            cooldown: RwSignal::new(ResendCooldown::idle()),
            timer: StoredValue::new_local(CooldownTimer::default()),
        }
    }

    /// Reactive view of the countdown for labels and disabled states.
    pub(super) fn cooldown(&self) -> ResendCooldown {
        self.cooldown.get()
    }

    pub(super) fn current(&self) -> ResendCooldown {
        self.cooldown.get_untracked()
    }

    pub(super) fn start(&self, next: ResendCooldown) {
        let ticker = *self;
        self.timer.update_value(|timer| {
            timer.start(next, || Interval::new(1_000, move || ticker.tick()));
        });
        self.cooldown.set(next);
    }

    fn tick(&self) {
        // None once the page is gone.
        let Some((cooldown, finished)) = self.timer.try_update_value(|timer| {
            let finished = timer.tick();
            (timer.cooldown(), finished)
        }) else {
            return;
        };
        self.cooldown.set(cooldown);

        if let Some(interval) = finished {
            // An interval cannot be dropped from inside its own callback.
            spawn_local(async move { drop(interval) });
        }
    }
}
