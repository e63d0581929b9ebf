//! Property tests for the code tables, the appearance assembler and the
//! color parser.

use overviewsdk::models::{
    AppearanceColor, AppearanceType, Category, RgbColor, UNKNOWN_APPEARANCE_CODE,
};
use overviewsdk::parser::appearance::assemble_appearance;
use overviewsdk::parser::{CategoryMap, RawOverview};
use overviewsdk::ErrorKind;
use proptest::prelude::*;

fn order_codes() -> Vec<u8> {
    AppearanceType::ALL
        .iter()
        .map(|kind| kind.code())
        .chain(std::iter::once(UNKNOWN_APPEARANCE_CODE))
        .collect()
}

proptest! {
    #[test]
    fn appearance_code_roundtrip(code in any::<u8>()) {
        if let Some(kind) = AppearanceType::from_code(code) {
            prop_assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn rules_follow_order_without_sentinels(
        order in prop::collection::vec(prop::sample::select(order_codes()), 0..40),
        states in prop::collection::vec(prop::sample::select(order_codes()), 0..10),
        category in prop::sample::select(vec![Category::Background, Category::Flag]),
    ) {
        let rules = assemble_appearance(
            category,
            &order,
            &states,
            &CategoryMap::default(),
            &CategoryMap::default(),
        )
        .unwrap();

        let expected: Vec<u8> = order
            .iter()
            .copied()
            .filter(|&code| code != UNKNOWN_APPEARANCE_CODE)
            .collect();
        let codes: Vec<u8> = rules.iter().map(|rule| rule.kind.code()).collect();
        prop_assert_eq!(codes, expected);

        for rule in &rules {
            prop_assert!(!rule.blink);
            prop_assert_eq!(rule.color, AppearanceColor::Default);
            prop_assert_eq!(rule.enabled, states.contains(&rule.kind.code()));
        }
    }

    #[test]
    fn hex_formats_canonically(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let canonical = format!("0xff{r:02x}{g:02x}{b:02x}");

        let hash = RgbColor::from_hex(&format!("#{r:02X}{g:02X}{b:02X}")).unwrap();
        prop_assert_eq!(hash.to_argb_hex(), canonical.clone());

        let prefixed = RgbColor::from_hex(&format!("0xFF{r:02x}{g:02X}{b:02x}")).unwrap();
        prop_assert_eq!(prefixed.to_argb_hex(), canonical);
    }

    #[test]
    fn short_hex_expands(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let color = RgbColor::from_hex(&format!("#{r:X}{g:X}{b:X}")).unwrap();
        prop_assert_eq!(color, RgbColor::new(r * 17, g * 17, b * 17));
    }

    #[test]
    fn unprefixed_keys_are_rejected(
        key in "[ac-eg-z][a-z]{0,6}_[0-9]{1,2}",
        blink in any::<bool>(),
    ) {
        let colors = format!("stateColorsNameList:\n- ['{key}', red]\n");
        let err = RawOverview::from_str(&colors).unwrap().parse_colors().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);

        let blinks = format!("stateBlinks:\n- ['{key}', {blink}]\n");
        let err = RawOverview::from_str(&blinks).unwrap().parse_blinks().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }
}

#[test]
fn test_short_hex_example() {
    assert_eq!(
        RgbColor::from_hex("#ABC").unwrap().to_argb_hex(),
        "0xffaabbcc"
    );
}
