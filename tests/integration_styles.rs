//! Style resolver and breakpoint table properties

use synapse_landing::{tier_for, ElementRole, StyleSheet, Tier};

#[test]
fn test_resolver_covers_full_cross_product() {
    let sheet = StyleSheet::builtin().expect("builtin sheet must build");
    for role in ElementRole::ALL {
        for tier in Tier::ALL {
            let rule = sheet
                .resolve(role, tier)
                .unwrap_or_else(|e| panic!("missing rule: {}", e));
            assert!(rule.font_rem >= 0.0);
            assert!(rule.pad_rem >= 0.0);
        }
    }
}

#[test]
fn test_tiers_are_contiguous_and_monotonic() {
    let mut last = Tier::Narrow;
    for w in 0..3000 {
        let tier = tier_for(w as f64).expect("tier_for must be total over w >= 0");
        assert!(tier >= last, "tier decreased between {} and {}", w - 1, w);
        last = tier;
    }
}

#[test]
fn test_threshold_widths_map_to_the_new_tier() {
    // Lower bounds are inclusive
    assert_eq!(tier_for(768.0).unwrap(), Tier::Medium);
    assert_eq!(tier_for(1280.0).unwrap(), Tier::Wide);
    assert_eq!(tier_for(1536.0).unwrap(), Tier::UltraWide);
    // And just below each threshold the old tier still holds
    assert_eq!(tier_for(767.999).unwrap(), Tier::Narrow);
    assert_eq!(tier_for(1279.999).unwrap(), Tier::Medium);
    assert_eq!(tier_for(1535.999).unwrap(), Tier::Wide);
}

#[test]
fn test_negative_width_is_an_input_error() {
    let err = tier_for(-0.5).unwrap_err();
    assert!(!err.is_configuration());
}

#[test]
fn test_headline_scale_monotone_over_adjacent_tiers() {
    let sheet = StyleSheet::builtin().unwrap();
    for pair in Tier::ALL.windows(2) {
        let lo = sheet.resolve(ElementRole::Headline, pair[0]).unwrap();
        let hi = sheet.resolve(ElementRole::Headline, pair[1]).unwrap();
        assert!(
            hi.font_rem >= lo.font_rem,
            "headline shrank from {:?} to {:?}",
            pair[0],
            pair[1]
        );
    }
}
