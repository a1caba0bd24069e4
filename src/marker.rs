//! Marker descriptor types and distance classification
//!
//! A [`MarkerDescriptor`] is the visual representation of one sonar
//! reading: a fixed-size sphere placed along the sensor axis, colored
//! by severity band. Descriptors are immutable once built and consumed
//! once by the publish step; the consumer expires them via
//! [`MarkerDescriptor::lifetime_secs`].

use crate::config::MarkerConfig;
use crate::sampler::DistanceReading;
use serde::{Deserialize, Serialize};

/// Geometry rendered for a marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkerShape {
    Sphere,
    Cube,
    Cylinder,
}

/// What the consumer should do with the descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkerAction {
    /// Add the marker, replacing any previous one with the same
    /// namespace and id
    Add,
    /// Remove the marker
    Delete,
}

/// Visual descriptor published once per valid reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    /// Coordinate space the position is expressed in
    pub frame_id: String,
    /// Marker namespace; together with `id` this identifies the
    /// sensor's marker slot in the consumer
    pub namespace: String,
    pub id: u32,
    pub shape: MarkerShape,
    pub action: MarkerAction,
    /// Offset from the frame origin, meters (identity orientation)
    pub position: [f32; 3],
    /// Marker extent, meters
    pub scale: [f32; 3],
    /// RGBA, each channel 0.0-1.0
    pub color: [f32; 4],
    /// Consumer hides the marker after this long without a replacement
    pub lifetime_secs: f32,
}

/// Marker diameter in meters (fixed-size sphere)
pub const MARKER_SCALE_M: f32 = 0.2;

/// Marker expiry when no replacement arrives
pub const MARKER_LIFETIME_SECS: f32 = 1.0;

// Severity bands, nearest first. Boundary values belong to the higher band.
const DANGER_BELOW_CM: f32 = 20.0;
const CAUTION_BELOW_CM: f32 = 100.0;

const COLOR_DANGER: [f32; 4] = [1.0, 0.0, 0.0, 0.8];
const COLOR_CAUTION: [f32; 4] = [1.0, 1.0, 0.0, 0.8];
const COLOR_CLEAR: [f32; 4] = [0.0, 1.0, 0.0, 0.8];

/// Map a valid reading to its visual descriptor
///
/// Pure and deterministic: the same reading and settings always yield
/// an identical descriptor. Callers only classify valid readings.
pub fn classify(reading: &DistanceReading, settings: &MarkerConfig) -> MarkerDescriptor {
    let cm = reading.centimeters;

    let color = if cm < DANGER_BELOW_CM {
        COLOR_DANGER
    } else if cm < CAUTION_BELOW_CM {
        COLOR_CAUTION
    } else {
        COLOR_CLEAR
    };

    MarkerDescriptor {
        frame_id: settings.frame_id.clone(),
        namespace: settings.namespace.clone(),
        id: settings.id,
        shape: MarkerShape::Sphere,
        action: MarkerAction::Add,
        position: [cm / 100.0, 0.0, 0.0],
        scale: [MARKER_SCALE_M; 3],
        color,
        lifetime_secs: MARKER_LIFETIME_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> MarkerConfig {
        MarkerConfig {
            frame_id: "base_link".to_string(),
            namespace: "sonar".to_string(),
            id: 0,
        }
    }

    fn color_at(cm: f32) -> [f32; 4] {
        classify(&DistanceReading::valid(cm), &settings()).color
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(color_at(19.999), COLOR_DANGER);
        assert_eq!(color_at(20.0), COLOR_CAUTION);
        assert_eq!(color_at(99.999), COLOR_CAUTION);
        assert_eq!(color_at(100.0), COLOR_CLEAR);
    }

    #[test]
    fn test_descriptor_geometry() {
        let marker = classify(&DistanceReading::valid(45.3), &settings());
        assert_eq!(marker.frame_id, "base_link");
        assert_eq!(marker.namespace, "sonar");
        assert_eq!(marker.id, 0);
        assert_eq!(marker.shape, MarkerShape::Sphere);
        assert_eq!(marker.action, MarkerAction::Add);
        assert_eq!(marker.position, [45.3_f32 / 100.0, 0.0, 0.0]);
        assert!((marker.position[0] - 0.453).abs() < 1e-6);
        assert_eq!(marker.scale, [0.2, 0.2, 0.2]);
        assert_eq!(marker.color, COLOR_CAUTION);
        assert_eq!(marker.lifetime_secs, 1.0);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let reading = DistanceReading::valid(73.25);
        let first = classify(&reading, &settings());
        let second = classify(&reading, &settings());
        assert_eq!(first, second);
    }
}
