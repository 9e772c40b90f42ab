// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completed-route summary

use crate::status::RouteOutcome;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Summary shown once a route reaches `complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub outcome: RouteOutcome,
    pub packages: usize,
    #[serde(with = "humantime_serde")]
    pub route_time: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_cents: Option<u64>,
}

impl RouteSummary {
    /// Route time rounded down to whole minutes
    pub fn route_minutes(&self) -> u64 {
        self.route_time.as_secs() / 60
    }

    pub fn payout_display(&self) -> Option<String> {
        self.payout_cents
            .map(|cents| format!("${}.{:02}", cents / 100, cents % 100))
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.outcome {
            RouteOutcome::Delivered => "Packages Delivered",
            RouteOutcome::Returned => "Packages Returned",
        };
        writeln!(f, "{}: {}", heading, self.packages)?;
        let rounded = Duration::from_secs(self.route_time.as_secs());
        write!(f, "Route Time: {}", humantime::format_duration(rounded))?;
        if let Some(payout) = self.payout_display() {
            write!(f, "\nEarnings: {}", payout)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(payout_cents: Option<u64>) -> RouteSummary {
        RouteSummary {
            outcome: RouteOutcome::Delivered,
            packages: 4,
            route_time: Duration::from_secs(45 * 60 + 30),
            payout_cents,
        }
    }

    #[test]
    fn payout_formats_as_dollars() {
        assert_eq!(summary(Some(1250)).payout_display().as_deref(), Some("$12.50"));
        assert_eq!(summary(Some(7)).payout_display().as_deref(), Some("$0.07"));
        assert_eq!(summary(None).payout_display(), None);
    }

    #[test]
    fn display_lists_route_time_and_earnings() {
        let text = summary(Some(1250)).to_string();
        assert_eq!(
            text,
            "Packages Delivered: 4\nRoute Time: 45m 30s\nEarnings: $12.50"
        );
        assert_eq!(summary(None).route_minutes(), 45);
    }

    #[test]
    fn route_time_serializes_humanized() {
        let json = serde_json::to_value(summary(None)).unwrap();
        assert_eq!(json["route_time"], "45m 30s");
        assert_eq!(json["outcome"], "delivered");
        assert!(json.get("payout_cents").is_none());
    }
}
