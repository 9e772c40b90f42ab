// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;
use std::time::Duration;

fn make_pipeline(clock: &FakeClock) -> HandoffPipeline {
    let route = RouteInfo::new(
        "Michael Chen",
        "Sunset Heights",
        "123 Main Street, Apt 4B\nHendersonville, NC 28792",
        "UPS Store #1234\n456 Commerce Dr, Hendersonville, NC 28792",
    );
    let packages = vec![
        PackageItem::new("1", "PKG-2025-001", "John Doe", "Apt 4B", "Amazon")
            .with_tracking("1Z999AA10123456784"),
        PackageItem::new("4", "PKG-2025-004", "Sarah Lee", "Apt 5D", "USPS"),
    ];
    HandoffPipeline::new("route-1", route, packages, clock).unwrap()
}

#[test]
fn text_snapshot_at_pickup() {
    let clock = FakeClock::new();
    let mut pipeline = make_pipeline(&clock);
    pipeline.confirm_arrival(&clock).unwrap();
    pipeline.toggle_checked("4");

    let text = pipeline.snapshot().to_string();

    assert_eq!(
        text,
        "Route: Sunset Heights (driver: Michael Chen)\n\
         Status: picked-up - Confirm Package Pickup\n\
         Timeline: [x] On the Way  [>] Picked Up  [ ] Delivered  [ ] Returned\n\
         Pickup: 123 Main Street, Apt 4B, Hendersonville, NC 28792\n\
         Drop-off: UPS Store #1234, 456 Commerce Dr, Hendersonville, NC 28792\n\
         Packages (1/2 checked):\n\
         \x20 [x] PKG-2025-001  John Doe (Apt 4B) | Amazon | 1Z999AA10123456784\n\
         \x20 [ ] PKG-2025-004  Sarah Lee (Apt 5D) | USPS\n\
         Next: toggle-checked, confirm-pickup, reset"
    );
}

#[test]
fn text_snapshot_after_return_shows_reason_and_summary() {
    let clock = FakeClock::new();
    let mut pipeline = make_pipeline(&clock);
    pipeline.confirm_arrival(&clock).unwrap();
    pipeline.confirm_pickup(&clock).unwrap();
    pipeline
        .mark_undeliverable(
            ReturnReason::Damaged,
            Some("box crushed".to_string()),
            &clock,
        )
        .unwrap();
    clock.advance(Duration::from_secs(300));
    pipeline.confirm_return_complete(&clock).unwrap();

    let text = pipeline.snapshot().to_string();

    assert!(text.contains("Return: damaged - Package damaged (box crushed)\n"));
    assert!(text.contains("Packages Returned: 2\nRoute Time: 5m\n"));
    assert!(text.ends_with("Next: toggle-checked, reset"));
}

#[test]
fn json_snapshot_omits_empty_optionals() {
    let clock = FakeClock::new();
    let pipeline = make_pipeline(&clock);

    let json = serde_json::to_value(pipeline.snapshot()).unwrap();

    assert_eq!(json["status"], "on-the-way");
    assert_eq!(json["heading"], "En Route to Pickup");
    assert_eq!(json["checked"], 2);
    assert_eq!(json["packages"][1]["id"], "4");
    assert_eq!(json["timeline"]["steps"][0]["state"], "active");
    assert!(json.get("return_reason").is_none());
    assert!(json.get("summary").is_none());
}

#[test]
fn json_snapshot_includes_receipt() {
    let clock = FakeClock::new();
    let mut pipeline = make_pipeline(&clock);
    pipeline.confirm_arrival(&clock).unwrap();
    pipeline.confirm_pickup(&clock).unwrap();
    pipeline.attach_receipt("dropoff.jpg", &clock).unwrap();

    let snapshot = pipeline.snapshot();
    assert_eq!(snapshot.receipt.as_deref(), Some("dropoff.jpg"));
    assert!(snapshot.to_string().contains("Receipt: dropoff.jpg\n"));
}
