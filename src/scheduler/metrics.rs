//! Run metrics and the human-readable report.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Aggregate metrics of one scheduling run.
///
/// Produced once per invocation and purely observational: metrics never feed
/// back into scheduling decisions. The `Display` rendering is the
/// human-readable report surfaced to operators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMetrics {
    /// Wall-clock duration of the two scheduling phases.
    pub run_duration: Duration,

    /// Head-repositioning time of the final order, in milliseconds.
    pub addressing_duration: u64,

    /// Transfer time of the final order, in milliseconds.
    pub read_duration: u64,

    /// Total belt passes over the run.
    pub belt_wear: u64,

    /// Tape-direction reversals over the run.
    pub motor_wear: u64,

    /// Belt passes per lpos cell.
    pub lpos_passes: BTreeMap<u32, u64>,
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "schedule metrics:")?;
        writeln!(
            f,
            "  run duration:        {:.3} ms",
            self.run_duration.as_secs_f64() * 1e3
        )?;
        writeln!(
            f,
            "  addressing duration: {} ms",
            self.addressing_duration
        )?;
        writeln!(f, "  read duration:       {} ms", self.read_duration)?;
        writeln!(f, "  tape belt wear:      {}", self.belt_wear)?;
        write!(f, "  tape motor wear:     {}", self.motor_wear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_report() {
        let metrics = RunMetrics {
            run_duration: Duration::from_micros(1500),
            addressing_duration: 2040,
            read_duration: 25,
            belt_wear: 310,
            motor_wear: 4,
            lpos_passes: BTreeMap::new(),
        };
        let report = metrics.to_string();
        assert!(report.contains("run duration:        1.500 ms"));
        assert!(report.contains("addressing duration: 2040 ms"));
        assert!(report.contains("read duration:       25 ms"));
        assert!(report.contains("tape belt wear:      310"));
        assert!(report.contains("tape motor wear:     4"));
    }
}
