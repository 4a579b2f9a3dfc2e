use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;

use crate::core::data::complex_rect::ComplexRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    RationalJulia,
    Newton,
    MandelbrotPolynomiograph,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::RationalJulia,
        Self::Newton,
        Self::MandelbrotPolynomiograph,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::RationalJulia => "Rational Julia",
            Self::Newton => "Newton polynomiograph",
            Self::MandelbrotPolynomiograph => "Mandelbrot polynomiograph",
        }
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::RationalJulia => "rational-julia",
            Self::Newton => "newton",
            Self::MandelbrotPolynomiograph => "mandelbrot-pg",
        }
    }

    /// Region showing the whole of the fractal at a 7:4 aspect ratio.
    #[must_use]
    pub fn default_region(self) -> ComplexRect {
        let (centre, width) = match self {
            Self::Mandelbrot => (Complex64::new(-0.75, 0.0), 3.5),
            Self::Julia | Self::RationalJulia | Self::Newton => (Complex64::new(0.0, 0.0), 3.5),
            Self::MandelbrotPolynomiograph => (Complex64::new(0.0, 0.0), 4.0),
        };

        match ComplexRect::centred(centre, width, width * 4.0 / 7.0) {
            Ok(region) => region,
            Err(_) => unreachable!("default regions have positive size"),
        }
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown fractal '{s}'"))
    }
}
