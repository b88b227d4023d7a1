//! Localized message numbers and craft result reporting.

use core::fmt;

/// Identifier of a localized client string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageId(pub u32);

impl MessageId {
    pub const TOOL_WORN_OUT: Self = Self(1044038);
    pub const MUST_USE_EQUIPPED_TOOL: Self = Self(1048146);
    pub const STONECRAFT_NOT_LEARNED: Self = Self(1044633);
    pub const TOOL_NOT_ON_PERSON: Self = Self(1044263);
    pub const NOT_NEAR_ANVIL_AND_FORGE: Self = Self(1044267);
    pub const GLASSBLOWING_NOT_LEARNED: Self = Self(1044634);
    pub const NOT_NEAR_FORGE: Self = Self(1044628);
    pub const WRONG_LOCATION: Self = Self(501816);

    pub const FAILED_MATERIALS_LOST: Self = Self(1044043);
    pub const FAILED_NO_MATERIALS_LOST: Self = Self(1044157);
    pub const BELOW_AVERAGE: Self = Self(502785);
    pub const EXCEPTIONAL_WITH_MARK: Self = Self(1044156);
    pub const EXCEPTIONAL: Self = Self(1044155);
    pub const CREATED: Self = Self(1044154);
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    BelowAverage,
    #[default]
    Regular,
    Exceptional,
}

/// How a craft attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CraftOutcome {
    Failed {
        lost_material: bool,
        tool_broken: bool,
    },
    Created {
        quality: Quality,
        maker_mark: bool,
        tool_broken: bool,
    },
}

impl CraftOutcome {
    pub const fn tool_broken(&self) -> bool {
        match self {
            Self::Failed { tool_broken, .. } | Self::Created { tool_broken, .. } => *tool_broken,
        }
    }
}

/// Messages sent to the crafter once an attempt ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndingMessage {
    pub message: MessageId,
    /// Sent before `message` when the tool broke during the attempt.
    pub tool_notice: Option<MessageId>,
}

impl EndingMessage {
    /// Resolves the ending message for `outcome`.
    ///
    /// Systems that ignore quality always report a plain creation.
    pub fn resolve(outcome: &CraftOutcome, reports_quality: bool) -> Self {
        let message = match *outcome {
            CraftOutcome::Failed {
                lost_material: true,
                ..
            } => MessageId::FAILED_MATERIALS_LOST,
            CraftOutcome::Failed { .. } => MessageId::FAILED_NO_MATERIALS_LOST,
            CraftOutcome::Created { .. } if !reports_quality => MessageId::CREATED,
            CraftOutcome::Created {
                quality: Quality::BelowAverage,
                ..
            } => MessageId::BELOW_AVERAGE,
            CraftOutcome::Created {
                quality: Quality::Exceptional,
                maker_mark: true,
                ..
            } => MessageId::EXCEPTIONAL_WITH_MARK,
            CraftOutcome::Created {
                quality: Quality::Exceptional,
                ..
            } => MessageId::EXCEPTIONAL,
            CraftOutcome::Created { .. } => MessageId::CREATED,
        };

        Self {
            message,
            tool_notice: outcome.tool_broken().then_some(MessageId::TOOL_WORN_OUT),
        }
    }
}
