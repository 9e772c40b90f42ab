// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_package_starts_checked() {
    let pkg = PackageItem::new("1", "PKG-2025-001", "John Doe", "Apt 4B", "Amazon");
    assert!(pkg.is_checked);
    assert!(pkg.tracking_number.is_none());
}

#[test]
fn package_display_includes_tracking_when_present() {
    let pkg = PackageItem::new("1", "PKG-2025-001", "John Doe", "Apt 4B", "Amazon")
        .with_tracking("1Z999AA10123456784");
    assert_eq!(
        pkg.to_string(),
        "PKG-2025-001  John Doe (Apt 4B) | Amazon | 1Z999AA10123456784"
    );
}

#[test]
fn package_display_omits_missing_tracking() {
    let pkg = PackageItem::new("4", "PKG-2025-004", "Sarah Lee", "Apt 5D", "USPS");
    assert_eq!(pkg.to_string(), "PKG-2025-004  Sarah Lee (Apt 5D) | USPS");
}

#[test]
fn route_info_payout_is_optional_in_json() {
    let route = RouteInfo::new("Michael Chen", "Sunset Heights", "a", "b");
    let json = serde_json::to_value(&route).unwrap();
    assert!(json.get("payout_cents").is_none());

    let json = serde_json::to_value(route.with_payout(1250)).unwrap();
    assert_eq!(json["payout_cents"], 1250);
}

#[test]
fn ids_serialize_as_plain_strings() {
    let json = serde_json::to_string(&PackageId::from("4")).unwrap();
    assert_eq!(json, "\"4\"");
    assert_eq!(RouteId::from("route-1").to_string(), "route-1");
}
