// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! Each visible snackbar owns exactly one timer, keyed by id. Timers are plain
//! deadlines checked on the stack's periodic tick, so cancelling one is just
//! forgetting it. [`Registry::reconcile`] diffs the registry against the
//! current stack and hover state:
//!
//! - ids that left the stack lose their timer,
//! - the hovered id has its timer paused,
//! - new ids, and ids that stopped being hovered, get a running timer,
//! - running timers of untouched ids keep their deadline.

use super::notification::NotificationId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// What happens to a paused timer once the pointer leaves its snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumePolicy {
    /// Start the full duration again.
    #[default]
    Restart,
    /// Continue with whatever time was left when the pointer entered.
    Remaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Running { deadline: Instant },
    Paused { remaining: Duration },
}

/// Per-notification auto-dismiss timers.
#[derive(Debug, Clone)]
pub struct Registry {
    duration: Duration,
    policy: ResumePolicy,
    timers: HashMap<NotificationId, Timer>,
}

impl Registry {
    #[must_use]
    pub fn new(duration: Duration, policy: ResumePolicy) -> Self {
        Self {
            duration,
            policy,
            timers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Brings the timers in line with the visible `ids` and the `hovered` one.
    pub fn reconcile(
        &mut self,
        ids: impl IntoIterator<Item = NotificationId>,
        hovered: Option<NotificationId>,
        now: Instant,
    ) {
        let live: HashSet<NotificationId> = ids.into_iter().collect();

        self.timers.retain(|id, _| {
            let keep = live.contains(id);
            if !keep {
                tracing::trace!(%id, "timer cancelled, snackbar gone");
            }
            keep
        });

        for id in live {
            let current = self.timers.get(&id).copied();
            let next = if hovered == Some(id) {
                match current {
                    Some(Timer::Running { deadline }) => {
                        tracing::trace!(%id, "timer paused");
                        Timer::Paused {
                            remaining: deadline.saturating_duration_since(now),
                        }
                    }
                    Some(paused @ Timer::Paused { .. }) => paused,
                    None => Timer::Paused {
                        remaining: self.duration,
                    },
                }
            } else {
                match current {
                    Some(running @ Timer::Running { .. }) => running,
                    Some(Timer::Paused { remaining }) => {
                        let left = match self.policy {
                            ResumePolicy::Restart => self.duration,
                            ResumePolicy::Remaining => remaining,
                        };
                        tracing::trace!(%id, ?left, "timer resumed");
                        Timer::Running {
                            deadline: now + left,
                        }
                    }
                    None => {
                        tracing::trace!(%id, duration = ?self.duration, "timer started");
                        Timer::Running {
                            deadline: now + self.duration,
                        }
                    }
                }
            };
            self.timers.insert(id, next);
        }
    }

    /// Removes and returns every running timer whose deadline has passed,
    /// oldest snackbar first.
    pub fn expired(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due: Vec<NotificationId> = self
            .timers
            .iter()
            .filter_map(|(id, timer)| match timer {
                Timer::Running { deadline } if *deadline <= now => Some(*id),
                _ => None,
            })
            .collect();
        due.sort_unstable();

        for id in &due {
            self.timers.remove(id);
        }
        due
    }

    /// Cancels the timer of `id`, if any.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            tracing::trace!(count = self.timers.len(), "all timers cancelled");
        }
        self.timers.clear();
    }

    /// Returns the deadline of a running timer.
    #[must_use]
    pub fn deadline(&self, id: NotificationId) -> Option<Instant> {
        match self.timers.get(&id) {
            Some(Timer::Running { deadline }) => Some(*deadline),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_running(&self, id: NotificationId) -> bool {
        matches!(self.timers.get(&id), Some(Timer::Running { .. }))
    }

    #[must_use]
    pub fn is_paused(&self, id: NotificationId) -> bool {
        matches!(self.timers.get(&id), Some(Timer::Paused { .. }))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIX_SECONDS: Duration = Duration::from_millis(6000);

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_ids_get_one_running_timer() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(1), id(2)], None, t0);
        registry.reconcile([id(1), id(2)], None, t0 + ms(10));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.deadline(id(1)), Some(t0 + SIX_SECONDS));
    }

    #[test]
    fn existing_deadlines_survive_unrelated_changes() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(1)], None, t0);
        registry.reconcile([id(1), id(2)], None, t0 + ms(2000));

        assert_eq!(registry.deadline(id(1)), Some(t0 + SIX_SECONDS));
        assert_eq!(registry.deadline(id(2)), Some(t0 + ms(8000)));
    }

    #[test]
    fn removed_ids_lose_their_timer() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(1), id(2)], None, t0);
        registry.reconcile([id(2)], None, t0);

        assert!(!registry.is_running(id(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn hovered_timer_never_expires() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(1)], None, t0);
        registry.reconcile([id(1)], Some(id(1)), t0 + ms(3000));

        assert!(registry.is_paused(id(1)));
        assert!(registry.expired(t0 + ms(60_000)).is_empty());
    }

    #[test]
    fn restart_policy_restarts_full_duration_after_hover() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(1)], None, t0);
        registry.reconcile([id(1)], Some(id(1)), t0 + ms(3000));
        registry.reconcile([id(1)], None, t0 + ms(5000));

        assert!(registry.expired(t0 + ms(6000)).is_empty());
        assert!(registry.expired(t0 + ms(10_999)).is_empty());
        assert_eq!(registry.expired(t0 + ms(11_000)), vec![id(1)]);
    }

    #[test]
    fn remaining_policy_resumes_where_it_paused() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Remaining);

        registry.reconcile([id(1)], None, t0);
        registry.reconcile([id(1)], Some(id(1)), t0 + ms(3000));
        registry.reconcile([id(1)], None, t0 + ms(5000));

        assert_eq!(registry.deadline(id(1)), Some(t0 + ms(8000)));
    }

    #[test]
    fn expired_drains_in_stack_order() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(3), id(1), id(2)], None, t0);

        assert_eq!(registry.expired(t0 + SIX_SECONDS), vec![id(1), id(2), id(3)]);
        assert!(registry.is_empty());
    }

    #[test]
    fn cancel_all_leaves_nothing_to_fire() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);

        registry.reconcile([id(1), id(2)], Some(id(2)), t0);
        registry.cancel_all();

        assert!(registry.is_empty());
        assert!(registry.expired(t0 + ms(60_000)).is_empty());
    }

    #[test]
    fn cancel_reports_whether_a_timer_existed() {
        let t0 = Instant::now();
        let mut registry = Registry::new(SIX_SECONDS, ResumePolicy::Restart);
        registry.reconcile([id(1)], None, t0);

        assert!(registry.cancel(id(1)));
        assert!(!registry.cancel(id(1)));
    }
}
