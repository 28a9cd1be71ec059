//! Time-boxed "add a review" modal.
//!
//! Opening the modal starts a fixed budget. If it runs out before the form
//! is submitted the modal closes and whatever was typed is thrown away.

use std::time::{Duration, Instant};

use super::Reducer;

pub const SUBMIT_BUDGET: Duration = Duration::from_secs(120);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Submitted,
    TimedOut,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Countdown<F> {
    Closed {
        last: Option<CloseReason>,
    },
    Open {
        form: F,
        deadline: Instant,
        remaining: Duration,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum CountdownEvent<E> {
    Open { now: Instant },
    Tick { now: Instant },
    /// Forwarded to the form while the modal is open.
    Form(E),
    Submitted,
    Cancel,
}

impl<F> Default for Countdown<F> {
    fn default() -> Self {
        Self::Closed { last: None }
    }
}

impl<F> Countdown<F> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed { .. } => None,
        }
    }

    /// Whole seconds left, rounded up, for the on-screen timer.
    pub fn seconds_left(&self) -> Option<u64> {
        match self {
            Self::Open { remaining, .. } => {
                let secs = remaining.as_secs();
                Some(if remaining.subsec_nanos() > 0 { secs + 1 } else { secs })
            }
            Self::Closed { .. } => None,
        }
    }

    pub fn last_close(&self) -> Option<CloseReason> {
        match self {
            Self::Closed { last } => *last,
            Self::Open { .. } => None,
        }
    }
}

impl<F> Reducer for Countdown<F>
where
    F: Reducer + Default,
{
    type Event = CountdownEvent<F::Event>;

    fn update(self, event: Self::Event) -> Self {
        match (self, event) {
            (Self::Closed { .. }, CountdownEvent::Open { now }) => Self::Open {
                form: F::default(),
                deadline: now + SUBMIT_BUDGET,
                remaining: SUBMIT_BUDGET,
            },
            (
                Self::Open {
                    form, deadline, ..
                },
                CountdownEvent::Tick { now },
            ) => {
                let remaining = deadline.saturating_duration_since(now);
                // A submit already on the wire settles the modal instead.
                if remaining.is_zero() && !form.in_flight() {
                    Self::Closed {
                        last: Some(CloseReason::TimedOut),
                    }
                } else {
                    Self::Open {
                        form,
                        deadline,
                        remaining,
                    }
                }
            }
            (
                Self::Open {
                    form,
                    deadline,
                    remaining,
                },
                CountdownEvent::Form(event),
            ) => Self::Open {
                form: form.update(event),
                deadline,
                remaining,
            },
            (Self::Open { .. }, CountdownEvent::Submitted) => Self::Closed {
                last: Some(CloseReason::Submitted),
            },
            (Self::Open { .. }, CountdownEvent::Cancel) => Self::Closed {
                last: Some(CloseReason::Cancelled),
            },
            (state, _) => state,
        }
    }
}
