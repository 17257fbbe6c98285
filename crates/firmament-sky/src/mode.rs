use firmament_astro::SkyCalculations;

/// How a sky advances. Chosen once when the sky is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkyMode {
    /// Sun and moon placed by hand. Updates do nothing.
    Manual,
    /// A full snapshot applied once. Updates do nothing.
    Static,
    /// Computed once for a fixed instant and location.
    CalculatedStatic(SkyCalculations),
    /// Recomputed on every update, with the clock advanced by the update's delta.
    CalculatedDynamic(SkyCalculations),
}

impl SkyMode {
    pub fn calculations(&self) -> Option<&SkyCalculations> {
        match self {
            Self::CalculatedStatic(calc) | Self::CalculatedDynamic(calc) => Some(calc),
            Self::Manual | Self::Static => None,
        }
    }

    pub fn calculations_mut(&mut self) -> Option<&mut SkyCalculations> {
        match self {
            Self::CalculatedStatic(calc) | Self::CalculatedDynamic(calc) => Some(calc),
            Self::Manual | Self::Static => None,
        }
    }

    pub fn is_calculated(&self) -> bool {
        self.calculations().is_some()
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::CalculatedDynamic(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Static => "Static",
            Self::CalculatedStatic(_) => "CalculatedStatic",
            Self::CalculatedDynamic(_) => "CalculatedDynamic",
        }
    }
}
