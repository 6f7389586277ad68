use log::warn;

use crate::{
    backends::Timer,
    config::RosterSyncConfig,
    events::{GameEventHandler, GameEventHub, GameEventKind, SubscriptionId},
    gate::ReadinessGate,
    refresh::RefreshNotifier,
    remote::{reconciler, record::RawRecord, record_queue::RecordQueue},
    roster::Roster,
    types::GameStage,
};

/// Cloneable producer-side handle the transport layer uses to hand records
/// and removals to the sync core. Non-blocking, callable from any thread.
#[derive(Clone)]
pub struct RecordSender {
    removals: RecordQueue<String>,
    upserts: RecordQueue<RawRecord>,
}

impl RecordSender {
    pub fn enqueue_removal(&self, name: impl Into<String>) {
        self.removals.enqueue(name.into());
    }

    pub fn enqueue_upsert(&self, record: RawRecord) {
        self.upserts.enqueue(record);
    }
}

/// The consumer-side engine: owns the queues, the readiness gate, the drain
/// timers and the refresh notifier, and reconciles queued records into the
/// host's Roster.
///
/// All methods other than the enqueue delegations must be called from the
/// single apply thread; exclusive Roster access is structural, not locked.
pub struct RemoteRosterManager {
    config: RosterSyncConfig,
    gate: ReadinessGate,
    removals: RecordQueue<String>,
    upserts: RecordQueue<RawRecord>,
    removal_timer: Timer,
    upsert_timer: Timer,
    notifier: RefreshNotifier,
    subscriptions: Vec<(GameEventKind, SubscriptionId)>,
}

impl RemoteRosterManager {
    pub fn new(config: RosterSyncConfig) -> Self {
        let gate = ReadinessGate::new(config.min_upsert_stage);
        let removal_timer = Timer::new(config.removal_drain_interval);
        let upsert_timer = Timer::new(config.upsert_drain_interval);
        Self {
            config,
            gate,
            removals: RecordQueue::new(),
            upserts: RecordQueue::new(),
            removal_timer,
            upsert_timer,
            notifier: RefreshNotifier::new(),
            subscriptions: Vec::new(),
        }
    }

    /// Handle for the transport layer; clones share the same queues
    pub fn record_sender(&self) -> RecordSender {
        RecordSender {
            removals: self.removals.clone(),
            upserts: self.upserts.clone(),
        }
    }

    /// Ingestion API, mirrored from `RecordSender` for callers that hold the
    /// manager directly
    pub fn enqueue_removal(&self, name: impl Into<String>) {
        self.removals.enqueue(name.into());
    }

    pub fn enqueue_upsert(&self, record: RawRecord) {
        self.upserts.enqueue(record);
    }

    pub fn refresh_notifier_mut(&mut self) -> &mut RefreshNotifier {
        &mut self.notifier
    }

    pub fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Installs the given (event kind, handler) pairs on the host's event
    /// hub, opens the gate and restarts the drain cadence.
    pub fn on_enable(
        &mut self,
        hub: &mut dyn GameEventHub,
        bindings: Vec<(GameEventKind, GameEventHandler)>,
    ) {
        for (kind, handler) in bindings {
            let id = hub.subscribe(kind, handler);
            self.subscriptions.push((kind, id));
        }
        self.gate.set_enabled(true);
        self.removal_timer.reset();
        self.upsert_timer.reset();
    }

    /// Removes every subscription installed on enable, closes the gate and
    /// discards both backlogs. Unprocessed items are dropped, not drained.
    pub fn on_disable(&mut self, hub: &mut dyn GameEventHub) {
        for (kind, id) in self.subscriptions.drain(..) {
            hub.unsubscribe(kind, id);
        }
        self.gate.set_enabled(false);
        self.removals.reset();
        self.upserts.reset();
    }

    /// Runs the two scheduled drain routines when their timers ring. Called
    /// every host tick; the cheap common case is both timers quiet or both
    /// queues empty. The host passes `None` while its Roster does not exist
    /// yet.
    pub fn tick(&mut self, stage: GameStage, roster: Option<&mut Roster>) {
        let removal_due = self.removal_timer.ringing();
        if removal_due {
            self.removal_timer.reset();
        }
        let upsert_due = self.upsert_timer.ringing();
        if upsert_due {
            self.upsert_timer.reset();
        }

        let roster_exists = roster.is_some();
        let Some(roster) = roster else {
            return;
        };

        if removal_due && self.gate.base_open(roster_exists) {
            self.drain_removals(roster);
        }
        if upsert_due && self.gate.upsert_open(roster_exists, stage) {
            self.drain_upserts(roster);
        }
    }

    /// Synchronously applies every pending upsert, bypassing the timers and
    /// the stage check. For callers that must guarantee all pending records
    /// are in the Roster before constructing dependent state.
    pub fn load_all_pending(&mut self, roster: &mut Roster) {
        self.drain_upserts(roster);
    }

    fn drain_removals(&mut self, roster: &mut Roster) {
        let mut removed = 0usize;
        for name in self.removals.drain() {
            // The member may already be gone; that is a no-op, not an error.
            if roster.remove(&name).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            self.notifier.request_refresh();
        }
    }

    fn drain_upserts(&mut self, roster: &mut Roster) {
        let mut applied = 0usize;
        for record in self.upserts.drain() {
            match reconciler::apply_record(roster, record) {
                Ok(()) => applied += 1,
                Err(err) => warn!("discarding crew record: {}", err),
            }
        }
        if applied > 0 {
            self.notifier.request_refresh();
        }
    }

    pub fn config(&self) -> &RosterSyncConfig {
        &self.config
    }
}
