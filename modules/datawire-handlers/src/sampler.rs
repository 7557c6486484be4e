//! Timer tick → SAMPLE.

use std::collections::HashMap;

use amqp_engine::{dispatch, Event, Handler};
use chrono::{DateTime, Duration, Utc};
use datawire_common::{Config, DatawireError, DatawireResult};
use datawire_events::DatawireEvent;
use tracing::debug;

const DEFAULT_FREQUENCY: f64 = 1.0;

/// Delegating handler that emits a `SAMPLE` event for a link each time a
/// sampling interval has elapsed on it.
///
/// Time comes from event timestamps. A link's clock starts at its remote open
/// (or its first timer tick). On each timer tick for the link, the tick is
/// forwarded first; then one sample follows if at least `1 / frequency`
/// seconds passed since the previous sample. Transport closure clears every
/// link's clock.
pub struct Sampler<H> {
    delegate: H,
    frequency: f64,
    last_sample: HashMap<String, DateTime<Utc>>,
}

impl<H: Handler> Sampler<H> {
    /// One sample per second.
    pub fn new(delegate: H) -> Self {
        Self {
            delegate,
            frequency: DEFAULT_FREQUENCY,
            last_sample: HashMap::new(),
        }
    }

    pub fn with_frequency(delegate: H, frequency: f64) -> DatawireResult<Self> {
        let mut sampler = Self::new(delegate);
        sampler.set_frequency(frequency)?;
        Ok(sampler)
    }

    pub fn from_config(delegate: H, config: &Config) -> DatawireResult<Self> {
        Self::with_frequency(delegate, config.sample_frequency)
    }

    /// Samples per second.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) -> DatawireResult<()> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(DatawireError::Config(format!(
                "sampling frequency must be a positive number, got {frequency}"
            )));
        }
        self.frequency = frequency;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::microseconds((1_000_000.0 / self.frequency).round() as i64)
    }

    /// Forget every link's clock.
    pub fn reset(&mut self) {
        self.last_sample.clear();
    }

    pub fn tracked_links(&self) -> usize {
        self.last_sample.len()
    }

    pub fn delegate(&self) -> &H {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut H {
        &mut self.delegate
    }

    pub fn into_delegate(self) -> H {
        self.delegate
    }

    /// Whether a tick at `ts` on `link` is due a sample. Starts the link's
    /// clock when it has none.
    fn due(&mut self, link: &str, ts: DateTime<Utc>) -> bool {
        let interval = self.interval();
        match self.last_sample.get_mut(link) {
            Some(last) if ts - *last >= interval => {
                *last = ts;
                true
            }
            Some(_) => false,
            None => {
                self.last_sample.insert(link.to_string(), ts);
                false
            }
        }
    }
}

impl<H: Handler> Handler for Sampler<H> {
    fn on_unhandled(&mut self, event: &dyn Event) {
        dispatch(event, &mut self.delegate);
    }

    fn on_link_remote_open(&mut self, event: &dyn Event) {
        let context = event.context();
        if let Some(link) = context.link_name() {
            self.last_sample.entry(link.to_string()).or_insert(context.ts);
        }
        dispatch(event, &mut self.delegate);
    }

    fn on_timer_task(&mut self, event: &dyn Event) {
        dispatch(event, &mut self.delegate);

        let context = event.context();
        let Some(link) = context.link_name() else {
            return;
        };
        if self.due(link, context.ts) {
            debug!(link, frequency = self.frequency, "Sampling link");
            dispatch(&DatawireEvent::sample(context.clone()), &mut self.delegate);
        }
    }

    fn on_transport_closed(&mut self, event: &dyn Event) {
        self.reset();
        dispatch(event, &mut self.delegate);
    }
}
