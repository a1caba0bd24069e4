//! Fixed-cadence sampling and publishing
//!
//! The scheduler holds no clock: it only reacts to ticks from whatever
//! periodic trigger drives it (the binary uses a sleep-and-tick loop).
//! Every failure is absorbed at the tick boundary; the next tick is
//! the retry mechanism.

use crate::config::MarkerConfig;
use crate::marker::classify;
use crate::sampler::{DistanceReading, DistanceSampler};
use crate::stats::SampleStats;
use crate::streaming::MarkerSink;
use crate::transport::Transport;

/// Drives sample → classify → publish once per tick
///
/// Owns the serial channel for its whole lifetime. A `None` channel
/// means sensing is disabled (the device could not be opened or
/// configured at startup); every tick then drops as invalid until the
/// process restarts.
pub struct PublishScheduler {
    link: Option<Box<dyn Transport>>,
    sampler: DistanceSampler,
    settings: MarkerConfig,
    sink: Box<dyn MarkerSink>,
    stats: SampleStats,
}

impl PublishScheduler {
    pub fn new(
        link: Option<Box<dyn Transport>>,
        settings: MarkerConfig,
        sink: Box<dyn MarkerSink>,
    ) -> Self {
        Self {
            link,
            sampler: DistanceSampler::new(),
            settings,
            sink,
            stats: SampleStats::new(),
        }
    }

    /// Handle one timer tick
    ///
    /// At most one sample and at most one publish. An invalid sample
    /// produces a warning and no descriptor; a publish failure is
    /// logged and dropped. Nothing escapes to the caller.
    pub fn tick(&mut self) {
        let reading = match self.link.as_deref_mut() {
            Some(link) => self.sampler.sample(link),
            None => DistanceReading::invalid(),
        };

        if !reading.valid {
            self.stats.record_invalid();
            log::warn!("No valid sonar data this tick");
            return;
        }

        self.stats.record_valid(reading.centimeters);
        log::info!("Distance received: {:.2} cm", reading.centimeters);

        let marker = classify(&reading, &self.settings);
        if let Err(e) = self.sink.publish(&marker) {
            log::warn!("Failed to publish marker: {}", e);
        }
    }

    /// Sampling statistics since startup
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::MockSink;
    use crate::transport::MockTransport;

    fn settings() -> MarkerConfig {
        MarkerConfig {
            frame_id: "base_link".to_string(),
            namespace: "sonar".to_string(),
            id: 0,
        }
    }

    #[test]
    fn test_publishes_only_valid_ticks() {
        let link = MockTransport::new();
        let sink = MockSink::new();
        let mut scheduler = PublishScheduler::new(
            Some(Box::new(link.clone())),
            settings(),
            Box::new(sink.clone()),
        );

        // Alternate valid readings with timeouts and garbage
        let windows: [&[u8]; 6] = [b"12.0\n", b"", b"45.3\n", b"ERR", b"150.0\n", b""];
        for bytes in windows {
            link.inject_read(bytes);
            scheduler.tick();
        }

        let published = sink.published();
        assert_eq!(published.len(), 3);
        assert_eq!(published[0].color, [1.0, 0.0, 0.0, 0.8]);
        assert_eq!(published[1].position, [45.3_f32 / 100.0, 0.0, 0.0]);
        assert_eq!(published[1].color, [1.0, 1.0, 0.0, 0.8]);
        assert_eq!(published[2].color, [0.0, 1.0, 0.0, 0.8]);

        assert_eq!(scheduler.stats().ticks(), 6);
        assert_eq!(scheduler.stats().valid(), 3);
        assert_eq!(scheduler.stats().invalid(), 3);
    }

    #[test]
    fn test_disabled_channel_never_publishes() {
        let sink = MockSink::new();
        let mut scheduler = PublishScheduler::new(None, settings(), Box::new(sink.clone()));

        for _ in 0..5 {
            scheduler.tick();
        }

        assert!(sink.published().is_empty());
        assert_eq!(scheduler.stats().invalid(), 5);
    }

    #[test]
    fn test_end_to_end_descriptor_values() {
        let link = MockTransport::new();
        let sink = MockSink::new();
        let mut scheduler = PublishScheduler::new(
            Some(Box::new(link.clone())),
            settings(),
            Box::new(sink.clone()),
        );

        link.inject_read(b"45.3\n");
        scheduler.tick();

        let published = sink.published();
        assert_eq!(published.len(), 1);
        let marker = &published[0];
        assert!((marker.position[0] - 0.453).abs() < 1e-6);
        assert_eq!(marker.color, [1.0, 1.0, 0.0, 0.8]);
        assert_eq!(marker.scale, [0.2, 0.2, 0.2]);
        assert_eq!(marker.lifetime_secs, 1.0);
    }
}
