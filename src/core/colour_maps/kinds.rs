use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    #[default]
    FireGradient,
    BlueWhiteGradient,
    Spectrum,
    PrettyBands,
    PrettyBands2,
    BwBands,
    PrettyBlends,
    PrettyBlends2,
    BwBlends,
    PrettyPeriodic,
    PrettyPeriodic2,
    BwStripes,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[
        Self::FireGradient,
        Self::BlueWhiteGradient,
        Self::Spectrum,
        Self::PrettyBands,
        Self::PrettyBands2,
        Self::BwBands,
        Self::PrettyBlends,
        Self::PrettyBlends2,
        Self::BwBlends,
        Self::PrettyPeriodic,
        Self::PrettyPeriodic2,
        Self::BwStripes,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
            Self::Spectrum => "Spectrum",
            Self::PrettyBands => "Pretty bands",
            Self::PrettyBands2 => "Pretty bands 2",
            Self::BwBands => "Black and white bands",
            Self::PrettyBlends => "Pretty blends",
            Self::PrettyBlends2 => "Pretty blends 2",
            Self::BwBlends => "Black and white blends",
            Self::PrettyPeriodic => "Pretty periodic",
            Self::PrettyPeriodic2 => "Pretty periodic 2",
            Self::BwStripes => "Black and white stripes",
        }
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue-white",
            Self::Spectrum => "spectrum",
            Self::PrettyBands => "pretty-bands",
            Self::PrettyBands2 => "pretty-bands-2",
            Self::BwBands => "bw-bands",
            Self::PrettyBlends => "pretty-blends",
            Self::PrettyBlends2 => "pretty-blends-2",
            Self::BwBlends => "bw-blends",
            Self::PrettyPeriodic => "pretty-periodic",
            Self::PrettyPeriodic2 => "pretty-periodic-2",
            Self::BwStripes => "bw-stripes",
        }
    }
}
impl fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourMapKinds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown colour map '{s}'"))
    }
}
