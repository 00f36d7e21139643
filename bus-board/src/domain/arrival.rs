//! Arrival predictions.

/// A forecast of one vehicle reaching a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalPrediction {
    /// Route name as shown on the bus, e.g. "486".
    pub line_name: String,

    /// Final destination of the vehicle.
    pub destination_name: String,

    /// Direction of travel as shown at the stop, e.g. "North Greenwich".
    pub towards: String,

    /// Name of the stop the prediction is for.
    pub station_name: String,

    /// Seconds until the vehicle reaches the stop.
    pub seconds_to_station: i64,
}

impl ArrivalPrediction {
    /// Whole minutes until arrival, rounded down.
    ///
    /// Anything under a minute is `0`. Predictions slightly in the past
    /// (the upstream occasionally reports small negative values) also
    /// count as `0`.
    ///
    /// ```
    /// use bus_board::domain::ArrivalPrediction;
    ///
    /// let mut prediction = ArrivalPrediction {
    ///     line_name: "486".into(),
    ///     destination_name: "Bexleyheath".into(),
    ///     towards: "Charlton".into(),
    ///     station_name: "Charlton Church Lane".into(),
    ///     seconds_to_station: 119,
    /// };
    /// assert_eq!(prediction.minutes_to_station(), 1);
    ///
    /// prediction.seconds_to_station = 120;
    /// assert_eq!(prediction.minutes_to_station(), 2);
    /// ```
    pub fn minutes_to_station(&self) -> i64 {
        self.seconds_to_station.max(0) / 60
    }
}
