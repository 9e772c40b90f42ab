// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route id generation

use crate::route::RouteId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out an id for each new run of a route
pub trait RouteIdGen: Clone + Send + Sync {
    fn next_route_id(&self) -> RouteId;
}

/// Random v4 UUIDs, used by the CLI
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRouteIds;

impl RouteIdGen for UuidRouteIds {
    fn next_route_id(&self) -> RouteId {
        RouteId(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `<prefix>-<n>` ids; clones draw from the same counter
#[derive(Clone, Debug)]
pub struct SequentialRouteIds {
    prefix: String,
    issued: Arc<AtomicU64>,
}

impl SequentialRouteIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Default for SequentialRouteIds {
    fn default() -> Self {
        Self::new("route")
    }
}

impl RouteIdGen for SequentialRouteIds {
    fn next_route_id(&self) -> RouteId {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        RouteId(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_route_ids_are_unique() {
        let a = UuidRouteIds.next_route_id();
        let b = UuidRouteIds.next_route_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a.0).is_ok());
    }

    #[test]
    fn sequential_ids_count_across_clones() {
        let ids = SequentialRouteIds::default();
        let clone = ids.clone();
        assert_eq!(ids.next_route_id(), RouteId::from("route-1"));
        assert_eq!(clone.next_route_id(), RouteId::from("route-2"));
        assert_eq!(
            SequentialRouteIds::new("sunset").next_route_id(),
            RouteId::from("sunset-1")
        );
    }
}
