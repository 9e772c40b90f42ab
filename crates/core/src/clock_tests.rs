// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn clones_share_advances() {
    let clock = FakeClock::new();
    let other = clock.clone();
    let start = clock.now();

    other.advance(Duration::from_secs(45 * 60));
    other.advance(Duration::from_secs(30));

    assert_eq!(clock.now() - start, Duration::from_secs(45 * 60 + 30));
    assert_eq!(clock.elapsed(), Duration::from_secs(45 * 60 + 30));
}

#[test]
fn fake_clock_stands_still_until_advanced() {
    let clock = FakeClock::new();
    let first = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    assert_eq!(clock.now(), first);
}

#[test]
fn system_clock_moves_forward() {
    let clock = SystemClock;
    let start = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    assert!(clock.now() > start);
}
