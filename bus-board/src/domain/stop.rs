//! Transit stop types.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// An opaque NaPTAN stop identifier, e.g. `490008660N`.
///
/// The identifier is only ever used to ask the transit API for arrivals,
/// so it is restricted to ASCII letters and digits. That keeps it safe to
/// place in a URL path segment.
///
/// # Examples
///
/// ```
/// use bus_board::domain::StopId;
///
/// let stop = StopId::parse("490008660N").unwrap();
/// assert_eq!(stop.as_str(), "490008660N");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("490/../N").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStopId {
                reason: "must contain only ASCII letters and digits",
            });
        }

        Ok(StopId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit stop near the query point.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPoint {
    /// Identifier used to fetch arrivals.
    pub id: StopId,

    /// Display name, e.g. "Charlton Church Lane".
    pub name: String,

    /// Stop letter or indicator, e.g. "Stop K". Not every stop has one.
    pub indicator: Option<String>,

    /// Distance from the query point in meters.
    pub distance_meters: f64,
}

impl StopPoint {
    pub fn new(id: StopId, name: impl Into<String>, distance_meters: f64) -> Self {
        Self {
            id,
            name: name.into(),
            indicator: None,
            distance_meters,
        }
    }

    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = Some(indicator.into());
        self
    }

    /// Name used when rendering the stop, including its indicator if known.
    pub fn label(&self) -> String {
        match self.indicator.as_deref() {
            Some(indicator) if !indicator.is_empty() => format!("{} ({})", self.name, indicator),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_stop_ids() {
        assert!(StopId::parse("490008660N").is_ok());
        assert!(StopId::parse("490G00008660").is_ok());
        assert!(StopId::parse("1").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert_eq!(
            StopId::parse("").unwrap_err().to_string(),
            "invalid stop id: must not be empty"
        );
    }

    #[test]
    fn reject_path_characters() {
        assert!(StopId::parse("490/N").is_err());
        assert!(StopId::parse("490 N").is_err());
        assert!(StopId::parse("..").is_err());
        assert!(StopId::parse("49?0").is_err());
    }

    #[test]
    fn debug_and_display() {
        let id = StopId::parse("490008660N").unwrap();
        assert_eq!(format!("{id:?}"), "StopId(490008660N)");
        assert_eq!(id.to_string(), "490008660N");
    }

    #[test]
    fn label_includes_indicator() {
        let id = StopId::parse("490008660N").unwrap();
        let stop = StopPoint::new(id.clone(), "Charlton Church Lane", 45.0);
        assert_eq!(stop.label(), "Charlton Church Lane");

        let stop = stop.with_indicator("Stop K");
        assert_eq!(stop.label(), "Charlton Church Lane (Stop K)");

        let stop = StopPoint::new(id, "The Valley", 10.0).with_indicator("");
        assert_eq!(stop.label(), "The Valley");
    }
}
