/// Gameplay notifications the host publishes, which the sync subsystem
/// listens to while enabled (to rebroadcast locally initiated crew changes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEventKind {
    CrewLeveledUp,
    CrewStatusChanged,
    CrewKindChanged,
}

/// Handler invoked with the name of the crew member the event concerns
pub type GameEventHandler = Box<dyn FnMut(&str) + Send>;

/// Opaque token identifying an installed subscription, so it can be removed
/// symmetrically on disable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The host's event publisher, specified only at this interface. Every
/// subscription installed through `subscribe` during enable must be removed
/// through `unsubscribe` during disable.
pub trait GameEventHub {
    fn subscribe(&mut self, kind: GameEventKind, handler: GameEventHandler) -> SubscriptionId;
    fn unsubscribe(&mut self, kind: GameEventKind, id: SubscriptionId);
}
