use crate::types::GameStage;

/// Pure predicate deciding whether queued work may be applied this tick.
///
/// Removals need only the base predicate (subsystem enabled, roster exists):
/// deleting an entry is safe at any lifecycle stage once a registry exists.
/// Upserts additionally require the host to have progressed past a minimum
/// stage, so record application never races the host's construction of its
/// own baseline roster.
pub struct ReadinessGate {
    enabled: bool,
    min_upsert_stage: GameStage,
}

impl ReadinessGate {
    pub fn new(min_upsert_stage: GameStage) -> Self {
        Self {
            enabled: false,
            min_upsert_stage,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gate for removal draining
    pub fn base_open(&self, roster_exists: bool) -> bool {
        self.enabled && roster_exists
    }

    /// Stricter gate for upsert draining
    pub fn upsert_open(&self, roster_exists: bool, stage: GameStage) -> bool {
        self.base_open(roster_exists) && stage >= self.min_upsert_stage
    }
}

#[cfg(test)]
mod tests {
    use crate::types::GameStage;

    use super::ReadinessGate;

    #[test]
    fn closed_until_enabled() {
        let mut gate = ReadinessGate::new(GameStage::SpaceCenter);
        assert!(!gate.base_open(true));
        assert!(!gate.upsert_open(true, GameStage::Flight));

        gate.set_enabled(true);
        assert!(gate.base_open(true));
        assert!(gate.upsert_open(true, GameStage::Flight));
    }

    #[test]
    fn removals_open_before_upserts() {
        let mut gate = ReadinessGate::new(GameStage::SpaceCenter);
        gate.set_enabled(true);

        assert!(gate.base_open(true));
        assert!(!gate.upsert_open(true, GameStage::MainMenu));
        assert!(gate.upsert_open(true, GameStage::SpaceCenter));
    }

    #[test]
    fn nothing_open_without_roster() {
        let mut gate = ReadinessGate::new(GameStage::SpaceCenter);
        gate.set_enabled(true);

        assert!(!gate.base_open(false));
        assert!(!gate.upsert_open(false, GameStage::Flight));
    }
}
