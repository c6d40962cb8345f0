//! Phase labels and the named transitions between them.

use std::fmt;

/// Thermodynamic phase of water at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    Supercritical,
    /// Fall-through of the decision tree. Only non-finite input reaches it;
    /// anything else producing it is a classifier defect.
    Unknown,
}

impl Phase {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Liquid => "Liquid",
            Self::Gas => "Gas",
            Self::Supercritical => "Supercritical Fluid",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Named transition between two of solid, liquid and gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseChange {
    /// Solid to liquid
    Melting,
    /// Liquid to solid
    Freezing,
    /// Liquid to gas
    Evaporation,
    /// Gas to liquid
    Condensation,
    /// Solid to gas
    Sublimation,
    /// Gas to solid
    Deposition,
}

impl PhaseChange {
    pub const ALL: [PhaseChange; 6] = [
        Self::Melting,
        Self::Freezing,
        Self::Evaporation,
        Self::Condensation,
        Self::Sublimation,
        Self::Deposition,
    ];

    /// Name the transition from `from` to `to`.
    ///
    /// `None` when the phases are equal or either side is supercritical or
    /// unknown; crossing into the supercritical region is continuous.
    pub fn between(from: Phase, to: Phase) -> Option<Self> {
        match (from, to) {
            (Phase::Solid, Phase::Liquid) => Some(Self::Melting),
            (Phase::Liquid, Phase::Solid) => Some(Self::Freezing),
            (Phase::Liquid, Phase::Gas) => Some(Self::Evaporation),
            (Phase::Gas, Phase::Liquid) => Some(Self::Condensation),
            (Phase::Solid, Phase::Gas) => Some(Self::Sublimation),
            (Phase::Gas, Phase::Solid) => Some(Self::Deposition),
            _ => None,
        }
    }

    pub fn initial_phase(self) -> Phase {
        match self {
            Self::Melting | Self::Sublimation => Phase::Solid,
            Self::Freezing | Self::Evaporation => Phase::Liquid,
            Self::Condensation | Self::Deposition => Phase::Gas,
        }
    }

    pub fn final_phase(self) -> Phase {
        match self {
            Self::Freezing | Self::Deposition => Phase::Solid,
            Self::Melting | Self::Condensation => Phase::Liquid,
            Self::Evaporation | Self::Sublimation => Phase::Gas,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Melting => Self::Freezing,
            Self::Freezing => Self::Melting,
            Self::Evaporation => Self::Condensation,
            Self::Condensation => Self::Evaporation,
            Self::Sublimation => Self::Deposition,
            Self::Deposition => Self::Sublimation,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Melting => "Melting",
            Self::Freezing => "Freezing",
            Self::Evaporation => "Evaporation",
            Self::Condensation => "Condensation",
            Self::Sublimation => "Sublimation",
            Self::Deposition => "Deposition",
        }
    }
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
