use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::blue_white_gradient::BlueWhiteGradient;
use crate::core::colour_maps::fire_gradient::FireGradient;
use crate::core::colour_maps::kinds::ColourMapKinds;
use crate::core::colour_maps::presets;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKinds::FireGradient => Box::new(FireGradient::new(max_iterations)),
        ColourMapKinds::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
        ColourMapKinds::Spectrum => Box::new(presets::spectrum(max_iterations)),
        ColourMapKinds::PrettyBands => Box::new(presets::pretty_bands(max_iterations)),
        ColourMapKinds::PrettyBands2 => Box::new(presets::pretty_bands_2(max_iterations)),
        ColourMapKinds::BwBands => Box::new(presets::bw_bands(max_iterations)),
        ColourMapKinds::PrettyBlends => Box::new(presets::pretty_blends(max_iterations)),
        ColourMapKinds::PrettyBlends2 => Box::new(presets::pretty_blends_2(max_iterations)),
        ColourMapKinds::BwBlends => Box::new(presets::bw_blends(max_iterations)),
        ColourMapKinds::PrettyPeriodic => Box::new(presets::pretty_periodic(max_iterations)),
        ColourMapKinds::PrettyPeriodic2 => Box::new(presets::pretty_periodic_2(max_iterations)),
        ColourMapKinds::BwStripes => Box::new(presets::bw_stripes(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKinds::ALL.first(), Some(&ColourMapKinds::default()));
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn ids_parse_back_to_kind() {
        for &kind in ColourMapKinds::ALL {
            assert_eq!(kind.id().parse::<ColourMapKinds>(), Ok(kind));
        }
        assert!("rainbow".parse::<ColourMapKinds>().is_err());
    }

    #[test]
    fn every_kind_colours_escapes_and_blacks_out_the_interior() {
        use crate::core::data::colour::Colour;
        use crate::core::data::frac_result::FracResult;
        use num_complex::Complex64;

        let record = |iterations| FracResult::new(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), iterations);

        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind, 64);

            assert!(map.map(&record(17)).is_ok(), "{kind}");
            assert_eq!(map.map(&record(63)).unwrap(), Colour::BLACK, "{kind}");
            assert!(map.map(&record(64)).is_err(), "{kind}");
        }
    }
}
