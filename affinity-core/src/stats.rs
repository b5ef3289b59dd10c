//! Stat dumps for debugging and script-driven `showstats`.

use std::fmt;

use serde::Serialize;

use crate::record::RelationshipRecord;
use crate::tier::RelationshipTier;

/// Header line of a rendered report.
pub const STATS_HEADER: &str = "=== RELATIONSHIP STATS ===";

/// Footer line of a rendered report.
pub const STATS_FOOTER: &str = "==========================";

/// One character's line in a stat dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRow {
    /// Registered name.
    pub name: String,
    /// Current points.
    pub points: u32,
    /// Points ceiling.
    pub max_points: u32,
    /// Derived tier.
    pub tier: RelationshipTier,
}

impl From<&RelationshipRecord> for StatsRow {
    fn from(rec: &RelationshipRecord) -> Self {
        Self {
            name: rec.name().to_string(),
            points: rec.points(),
            max_points: rec.max_points(),
            tier: rec.tier(),
        }
    }
}

impl fmt::Display for StatsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{} ({})", self.name, self.points, self.max_points, self.tier)
    }
}

/// Snapshot of every record, in registration order.
///
/// Producing a report has no side effects; printing it is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Rows in registration order.
    pub rows: Vec<StatsRow>,
}

impl StatsReport {
    /// Rendered lines, header and footer included.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(STATS_HEADER.to_string());
        lines.extend(self.rows.iter().map(ToString::to_string));
        lines.push(STATS_FOOTER.to_string());
        lines
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{STATS_HEADER}")?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        write!(f, "{STATS_FOOTER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, points: u32) -> StatsRow {
        StatsRow {
            name: name.to_string(),
            points,
            max_points: 100,
            tier: RelationshipTier::from_points(points),
        }
    }

    #[test]
    fn renders_banner_and_rows() {
        let report = StatsReport {
            rows: vec![row("brownsugar", 65), row("character2", 0)],
        };
        assert_eq!(
            report.to_string(),
            "=== RELATIONSHIP STATS ===\n\
             brownsugar: 65/100 (Close Friend)\n\
             character2: 0/100 (Stranger)\n\
             =========================="
        );
    }

    #[test]
    fn lines_match_display() {
        let report = StatsReport {
            rows: vec![row("brownsugar", 20)],
        };
        assert_eq!(report.lines().join("\n"), report.to_string());
    }

    #[test]
    fn empty_report_still_has_banner() {
        assert_eq!(StatsReport::default().lines().len(), 2);
    }

    #[test]
    fn serializes_tier_as_variant_name() {
        let json = serde_json::to_string(&row("brownsugar", 85)).expect("serialize");
        assert!(json.contains("\"tier\":\"Soulmate\""));
    }
}
