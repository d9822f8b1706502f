//! Static analytics sample series
//!
//! The analytics view charts a fixed day of traffic; there is no live
//! metrics pipeline behind it.

use serde::Serialize;

/// One point of the sample traffic series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficSample {
    /// Time-of-day label, e.g. "04:00"
    pub label: &'static str,

    /// Requests in the window
    pub requests: u64,

    /// Average latency in milliseconds
    pub latency_ms: u64,
}

/// The fixed series fed to the traffic and latency charts
pub fn sample_traffic_series() -> Vec<TrafficSample> {
    vec![
        TrafficSample { label: "00:00", requests: 4000, latency_ms: 240 },
        TrafficSample { label: "04:00", requests: 3000, latency_ms: 198 },
        TrafficSample { label: "08:00", requests: 2000, latency_ms: 210 },
        TrafficSample { label: "12:00", requests: 2780, latency_ms: 250 },
        TrafficSample { label: "16:00", requests: 1890, latency_ms: 220 },
        TrafficSample { label: "20:00", requests: 2390, latency_ms: 310 },
        TrafficSample { label: "23:59", requests: 3490, latency_ms: 280 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_covers_the_day() {
        let series = sample_traffic_series();
        assert_eq!(series.len(), 7);
        assert_eq!(series.first().unwrap().label, "00:00");
        assert_eq!(series.last().unwrap().label, "23:59");
    }
}
