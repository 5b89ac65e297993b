//! Timer-driven process simulations, modeled as explicit state machines
//! advanced by passing the current `Instant`. The UI passes real time;
//! tests pass synthetic instants. A cancel request is recorded but never
//! stops a machine from reaching its success outcome.

use std::time::{Duration, Instant};

pub const SEARCH_TICK: Duration = Duration::from_millis(500);
pub const DRIVER_FOUND_AFTER: Duration = Duration::from_secs(4);
pub const SEARCH_REDIRECT_AFTER: Duration = Duration::from_secs(6);
pub const TRIP_DURATION: Duration = Duration::from_secs(20);
pub const PAYMENT_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Searching,
    Found,
    Redirect,
}

/// Fake driver search: progress creeps to 90%, a driver is "found" at a
/// fixed delay, and the screen redirects shortly after.
#[derive(Debug)]
pub struct DriverSearch {
    started: Instant,
    cancel_requested: bool,
}

impl DriverSearch {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            cancel_requested: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancel_requested = true;
    }

    pub fn cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    pub fn phase(&self, now: Instant) -> SearchPhase {
        let elapsed = now.duration_since(self.started);
        if elapsed >= SEARCH_REDIRECT_AFTER {
            SearchPhase::Redirect
        } else if elapsed >= DRIVER_FOUND_AFTER {
            SearchPhase::Found
        } else {
            SearchPhase::Searching
        }
    }

    /// Percent shown on the progress bar: +10 per tick, capped at 90
    /// until the driver is found.
    pub fn progress(&self, now: Instant) -> u8 {
        match self.phase(now) {
            SearchPhase::Searching => {
                let ticks = now.duration_since(self.started).as_millis() / SEARCH_TICK.as_millis();
                (ticks * 10).min(90) as u8
            }
            SearchPhase::Found | SearchPhase::Redirect => 100,
        }
    }

    pub fn status_text(&self, now: Instant) -> &'static str {
        match self.phase(now) {
            SearchPhase::Searching => "Buscando conductor cercano...",
            SearchPhase::Found | SearchPhase::Redirect => "¡Conductor Encontrado! 🎉",
        }
    }
}

/// Fake delivery trip with a fixed duration. Completion is unconditional:
/// a cancel request changes nothing about the outcome.
#[derive(Debug)]
pub struct DeliveryTrip {
    started: Instant,
    cancel_requested: bool,
}

impl DeliveryTrip {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            cancel_requested: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancel_requested = true;
    }

    pub fn cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started);
        (elapsed.as_secs_f32() / TRIP_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_delivered(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= TRIP_DURATION
    }

    pub fn status_text(&self, now: Instant, store_name: &str) -> String {
        if self.is_delivered(now) {
            format!("¡Pedido Entregado! Disfruta tu {store_name}.")
        } else {
            "Tu pedido está siendo preparado...".to_string()
        }
    }
}

/// Fake payment processing: a fixed delay, then success. No failure
/// outcome is modeled.
#[derive(Debug)]
pub struct PaymentProcessing {
    started: Instant,
}

impl PaymentProcessing {
    pub fn new(now: Instant) -> Self {
        Self { started: now }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= PAYMENT_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_search_phases_follow_the_clock() {
        let start = Instant::now();
        let search = DriverSearch::new(start);
        assert_eq!(search.phase(start), SearchPhase::Searching);
        assert_eq!(
            search.phase(start + Duration::from_millis(3999)),
            SearchPhase::Searching
        );
        assert_eq!(
            search.phase(start + DRIVER_FOUND_AFTER),
            SearchPhase::Found
        );
        assert_eq!(
            search.phase(start + SEARCH_REDIRECT_AFTER),
            SearchPhase::Redirect
        );
    }

    #[test]
    fn search_progress_caps_at_90_until_found() {
        let start = Instant::now();
        let search = DriverSearch::new(start);
        assert_eq!(search.progress(start), 0);
        assert_eq!(search.progress(start + Duration::from_millis(1000)), 20);
        assert_eq!(search.progress(start + Duration::from_millis(3900)), 70);
        // Capped while still searching, full once found.
        assert!(search.progress(start + Duration::from_millis(3999)) <= 90);
        assert_eq!(search.progress(start + Duration::from_secs(5)), 100);
    }

    #[test]
    fn cancel_does_not_stop_the_search() {
        let start = Instant::now();
        let mut search = DriverSearch::new(start);
        search.cancel();
        assert!(search.cancel_requested());
        assert_eq!(
            search.phase(start + SEARCH_REDIRECT_AFTER),
            SearchPhase::Redirect
        );
    }

    #[test]
    fn trip_delivers_unconditionally_despite_cancel() {
        let start = Instant::now();
        let mut trip = DeliveryTrip::new(start);
        trip.cancel();
        let end = start + TRIP_DURATION;
        assert!(trip.is_delivered(end));
        assert_eq!(
            trip.status_text(end, "Pizzería Napoli"),
            "¡Pedido Entregado! Disfruta tu Pizzería Napoli."
        );
    }

    #[test]
    fn trip_progress_is_clamped() {
        let start = Instant::now();
        let trip = DeliveryTrip::new(start);
        assert_eq!(trip.progress(start), 0.0);
        assert!(trip.progress(start + Duration::from_secs(10)) < 1.0);
        assert_eq!(trip.progress(start + Duration::from_secs(40)), 1.0);
    }

    #[test]
    fn payment_completes_after_fixed_delay() {
        let start = Instant::now();
        let payment = PaymentProcessing::new(start);
        assert!(!payment.is_complete(start + Duration::from_millis(1499)));
        assert!(payment.is_complete(start + PAYMENT_DURATION));
    }
}
