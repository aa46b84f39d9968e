//! Wind decomposition and runway selection utilities.

use std::fmt;

/// Side the crosswind blows from, seen from the runway heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CrosswindDirection {
    FromRight,
    FromLeft,
}

impl fmt::Display for CrosswindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromRight => write!(f, "from right"),
            Self::FromLeft => write!(f, "from left"),
        }
    }
}

/// Wind resolved along and across a runway heading.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindComponents {
    /// Component along the runway, positive when blowing down it.
    pub headwind: f64,
    /// Component across the runway, positive when blowing from the right.
    pub crosswind: f64,
    /// Magnitude of the crosswind component.
    pub crosswind_speed: f64,
    /// Magnitude of any negative headwind, zero otherwise.
    pub tailwind: f64,
    pub is_tailwind: bool,
    pub crosswind_direction: CrosswindDirection,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolves `wind_speed` into components along and across a runway heading.
/// Both primary components are rounded to two decimals before the derived
/// fields are computed from them.
pub fn wind_components(
    runway_heading_deg: f64,
    wind_direction_deg: f64,
    wind_speed: f64,
) -> WindComponents {
    let angle = wind_direction_deg.to_radians() - runway_heading_deg.to_radians();

    let headwind = round2(wind_speed * angle.cos());
    let crosswind = round2(wind_speed * angle.sin());

    WindComponents {
        headwind,
        crosswind,
        crosswind_speed: crosswind.abs(),
        tailwind: (-headwind).max(0.0),
        is_tailwind: headwind < 0.0,
        crosswind_direction: if crosswind >= 0.0 {
            CrosswindDirection::FromRight
        } else {
            CrosswindDirection::FromLeft
        },
    }
}

/// One end of a runway.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunwayEnd {
    pub ident: String,
    /// True heading of the runway when taking off from this end.
    pub heading_deg: f64,
}

/// A runway described by both of its ends.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Runway {
    /// Lower-numbered end.
    pub le: RunwayEnd,
    /// Higher-numbered end.
    pub he: RunwayEnd,
    pub length_ft: f64,
}

/// Runway end chosen for takeoff.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BestRunway {
    pub ident: String,
    pub heading_deg: f64,
    pub headwind: f64,
    pub crosswind: f64,
    pub length_ft: f64,
}

/// Picks the runway end with the greatest headwind component for the given
/// wind. Returns `None` when `runways` is empty.
pub fn best_runway_for_takeoff(
    runways: &[Runway],
    wind_direction_deg: f64,
    wind_speed: f64,
) -> Option<BestRunway> {
    let mut best: Option<BestRunway> = None;

    for runway in runways {
        for end in [&runway.le, &runway.he] {
            let components = wind_components(end.heading_deg, wind_direction_deg, wind_speed);
            if best
                .as_ref()
                .map_or(true, |b| components.headwind > b.headwind)
            {
                best = Some(BestRunway {
                    ident: end.ident.clone(),
                    heading_deg: end.heading_deg,
                    headwind: components.headwind,
                    crosswind: components.crosswind,
                    length_ft: runway.length_ft,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_right_crosswind() {
        let w = wind_components(0.0, 90.0, 20.0);
        assert!((w.headwind - 0.0).abs() < 1e-9);
        assert!((w.crosswind - 20.0).abs() < 1e-9);
        assert!((w.crosswind_speed - 20.0).abs() < 1e-9);
        assert_eq!(w.crosswind_direction, CrosswindDirection::FromRight);
        assert!(!w.is_tailwind);
        assert!((w.tailwind - 0.0).abs() < 1e-9);
    }

    #[test]
    fn pure_left_crosswind() {
        let w = wind_components(0.0, 270.0, 20.0);
        assert!((w.crosswind + 20.0).abs() < 1e-9);
        assert_eq!(w.crosswind_direction, CrosswindDirection::FromLeft);
        assert!(!w.is_tailwind);
    }

    #[test]
    fn direct_tailwind() {
        let w = wind_components(132.0, 312.0, 20.0);
        assert!((w.headwind + 20.0).abs() < 1e-9);
        assert!((w.tailwind - 20.0).abs() < 1e-9);
        assert!(w.is_tailwind);
        assert!((w.crosswind - 0.0).abs() < 1e-9);
    }

    #[test]
    fn quartering_headwind_rounds_to_two_decimals() {
        let w = wind_components(90.0, 120.0, 15.0);
        assert!((w.headwind - 12.99).abs() < 1e-9);
        assert!((w.crosswind - 7.5).abs() < 1e-9);
        assert!(!w.is_tailwind);
    }

    #[test]
    fn crosswind_direction_display() {
        assert_eq!(CrosswindDirection::FromRight.to_string(), "from right");
        assert_eq!(CrosswindDirection::FromLeft.to_string(), "from left");
    }

    #[test]
    fn best_runway_faces_the_wind() {
        let runways = vec![
            Runway {
                le: RunwayEnd { ident: "09".into(), heading_deg: 90.0 },
                he: RunwayEnd { ident: "27".into(), heading_deg: 270.0 },
                length_ft: 6000.0,
            },
            Runway {
                le: RunwayEnd { ident: "18".into(), heading_deg: 180.0 },
                he: RunwayEnd { ident: "36".into(), heading_deg: 360.0 },
                length_ft: 4500.0,
            },
        ];

        let best = best_runway_for_takeoff(&runways, 80.0, 18.0).expect("best runway");
        assert_eq!(best.ident, "09");
        assert!((best.length_ft - 6000.0).abs() < 1e-9);
        assert!(best.headwind > 17.0);
    }

    #[test]
    fn best_runway_of_empty_list_is_none() {
        assert!(best_runway_for_takeoff(&[], 80.0, 18.0).is_none());
    }
}
