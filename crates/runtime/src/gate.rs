//! Craft gate: routes craft attempts to the registered systems.

use std::collections::HashMap;
use std::sync::Arc;

use craft_core::{
    CraftOutcome, CraftSystem, CraftSystemKind, Crafter, EndingMessage, ProximityDetector,
    ShardError, ToolState, standard_systems,
};
use tracing::{debug, info};

use crate::OracleManager;
use crate::error::{Result, RuntimeError};

/// Permission to start a craft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CraftStart {
    pub kind: CraftSystemKind,
    /// Sound to play for the crafter, if the system has one.
    pub sound: Option<u16>,
}

/// Registry of craft systems keyed by kind.
pub struct CraftGate {
    systems: HashMap<CraftSystemKind, Arc<dyn CraftSystem>>,
}

impl CraftGate {
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateSystem`] if two systems share a kind.
    pub fn new(systems: Vec<Box<dyn CraftSystem>>) -> Result<Self> {
        let mut registry: HashMap<CraftSystemKind, Arc<dyn CraftSystem>> =
            HashMap::with_capacity(systems.len());
        for system in systems {
            let kind = system.kind();
            if registry.insert(kind, Arc::from(system)).is_some() {
                return Err(RuntimeError::DuplicateSystem { kind });
            }
        }
        Ok(Self { systems: registry })
    }

    /// Gate with every supported system; blacksmithy uses `detector`.
    pub fn standard(detector: ProximityDetector) -> Self {
        let systems = standard_systems(detector)
            .into_iter()
            .map(|system| (system.kind(), Arc::<dyn CraftSystem>::from(system)))
            .collect();
        Self { systems }
    }

    pub fn system(&self, kind: CraftSystemKind) -> Result<&Arc<dyn CraftSystem>> {
        self.systems
            .get(&kind)
            .ok_or(RuntimeError::UnknownSystem { kind })
    }

    /// Decides whether `crafter` may start a `kind` craft with `tool`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Denied`] with the system's reason, or
    /// [`RuntimeError::UnknownSystem`] if `kind` is not registered.
    pub fn begin(
        &self,
        oracles: &OracleManager,
        kind: CraftSystemKind,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<CraftStart> {
        let system = self.system(kind)?;
        let env = oracles.as_craft_env();

        match system.can_craft(&env, crafter, tool) {
            Ok(()) => {
                debug!(%kind, location = ?crafter.location, "craft allowed");
                Ok(CraftStart {
                    kind,
                    sound: system.craft_sound(),
                })
            }
            Err(denial) => {
                info!(
                    %kind,
                    code = denial.error_code(),
                    message = %denial.message(),
                    location = ?crafter.location,
                    "craft denied: {denial}"
                );
                Err(denial.into())
            }
        }
    }

    /// Resolves the messages that close a `kind` craft.
    pub fn finish(&self, kind: CraftSystemKind, outcome: &CraftOutcome) -> Result<EndingMessage> {
        let ending = self.system(kind)?.ending_message(outcome);
        debug!(%kind, ?outcome, message = %ending.message, "craft finished");
        Ok(ending)
    }

    pub fn kinds(&self) -> impl Iterator<Item = CraftSystemKind> + '_ {
        self.systems.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Default for CraftGate {
    fn default() -> Self {
        Self::standard(ProximityDetector::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::{ActorLocation, Blacksmithy, MapPlane, MessageId, PlainCraft, Point3, Quality};

    fn crafter() -> Crafter {
        Crafter::player(ActorLocation::new(Point3::new(100, 100, 0), MapPlane::Trammel))
    }

    #[test]
    fn standard_gate_registers_every_kind() {
        let gate = CraftGate::default();
        assert_eq!(gate.len(), 10);
        assert!(gate.system(CraftSystemKind::GodBrewing).is_ok());
    }

    #[test]
    fn duplicate_kinds_are_rejected() {
        let result = CraftGate::new(vec![
            Box::new(PlainCraft::cooking()),
            Box::new(PlainCraft::cooking()),
        ]);
        assert!(matches!(
            result,
            Err(RuntimeError::DuplicateSystem {
                kind: CraftSystemKind::Cooking
            })
        ));
    }

    #[test]
    fn unregistered_kind_is_an_internal_error() {
        let gate = CraftGate::new(vec![Box::new(PlainCraft::cooking())]).unwrap();
        let err = gate
            .begin(
                &OracleManager::empty(),
                CraftSystemKind::Masonry,
                &crafter(),
                Some(&ToolState::in_pack(5)),
            )
            .unwrap_err();
        assert!(err.denial().is_none());
        assert_eq!(err.error_code(), "RUNTIME_UNKNOWN_SYSTEM");
    }

    #[test]
    fn allowed_craft_reports_sound() {
        let gate = CraftGate::default();
        let start = gate
            .begin(
                &OracleManager::empty(),
                CraftSystemKind::Tailoring,
                &crafter(),
                Some(&ToolState::in_pack(5)),
            )
            .unwrap();
        assert_eq!(start.sound, Some(0x248));
    }

    #[test]
    fn blacksmithy_in_empty_world_is_denied() {
        let gate = CraftGate::new(vec![Box::new(Blacksmithy::default())]).unwrap();
        let err = gate
            .begin(
                &OracleManager::empty(),
                CraftSystemKind::Blacksmithy,
                &crafter(),
                Some(&ToolState::in_pack(5)),
            )
            .unwrap_err();
        assert_eq!(err.denial().map(|d| d.message()), Some(MessageId(1044267)));
    }

    #[test]
    fn finish_uses_the_system_rules() {
        let gate = CraftGate::default();
        let outcome = CraftOutcome::Created {
            quality: Quality::Exceptional,
            maker_mark: false,
            tool_broken: true,
        };
        let ending = gate.finish(CraftSystemKind::Carpentry, &outcome).unwrap();
        assert_eq!(ending.message, MessageId::EXCEPTIONAL);
        assert_eq!(ending.tool_notice, Some(MessageId::TOOL_WORN_OUT));
    }
}
