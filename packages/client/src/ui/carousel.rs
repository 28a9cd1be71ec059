//! Featured review carousel with auto-advance.

use std::time::{Duration, Instant};

use super::Reducer;

pub const SLIDE_COUNT: usize = 5;
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);
/// Quiet period after manual navigation before auto-advance resumes.
pub const RESUME_AFTER: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    last_advance: Instant,
    paused_until: Option<Instant>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    Next { now: Instant },
    Previous { now: Instant },
    GoTo { index: usize, now: Instant },
    Tick { now: Instant },
}

impl Carousel {
    pub fn new(now: Instant) -> Self {
        Self::with_slides(SLIDE_COUNT, now)
    }

    pub fn with_slides(slide_count: usize, now: Instant) -> Self {
        Self {
            slide_count: slide_count.max(1),
            current: 0,
            last_advance: now,
            paused_until: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused_until.is_some()
    }

    fn manual(self, index: usize, now: Instant) -> Self {
        Self {
            current: index % self.slide_count,
            last_advance: now,
            paused_until: Some(now + RESUME_AFTER),
            ..self
        }
    }

    fn tick(self, now: Instant) -> Self {
        if let Some(until) = self.paused_until {
            if now < until {
                return self;
            }
            return Self {
                last_advance: now,
                paused_until: None,
                ..self
            };
        }

        let elapsed = now.saturating_duration_since(self.last_advance);
        let steps = (elapsed.as_millis() / AUTO_ADVANCE.as_millis()) as u32;
        if steps == 0 {
            return self;
        }
        Self {
            current: (self.current + steps as usize) % self.slide_count,
            last_advance: self.last_advance + AUTO_ADVANCE * steps,
            ..self
        }
    }
}

impl Reducer for Carousel {
    type Event = CarouselEvent;

    fn update(self, event: CarouselEvent) -> Self {
        match event {
            CarouselEvent::Next { now } => self.manual(self.current + 1, now),
            CarouselEvent::Previous { now } => {
                self.manual(self.current + self.slide_count - 1, now)
            }
            CarouselEvent::GoTo { index, now } => self.manual(index, now),
            CarouselEvent::Tick { now } => self.tick(now),
        }
    }
}
