use std::time::Duration;

use crate::types::GameStage;

/// Contains the tuning knobs for the roster synchronization routines: how
/// often each drain runs, and how far the host lifecycle must have progressed
/// before queued upserts may be applied.
#[derive(Clone)]
pub struct RosterSyncConfig {
    /// Interval between removal-queue drains
    pub removal_drain_interval: Duration,
    /// Interval between upsert-queue drains
    pub upsert_drain_interval: Duration,
    /// Minimum lifecycle stage required before the upsert drain may run.
    /// Removals are not gated on stage, only on subsystem enablement and
    /// roster existence.
    pub min_upsert_stage: GameStage,
}

impl Default for RosterSyncConfig {
    fn default() -> Self {
        Self {
            removal_drain_interval: Duration::from_millis(500),
            upsert_drain_interval: Duration::from_millis(500),
            min_upsert_stage: GameStage::SpaceCenter,
        }
    }
}
