use super::*;
use std::collections::HashSet;

#[test]
fn every_gradient_has_hex_stops() {
    for gradient in Gradient::ALL {
        let (from, to) = gradient.stops();
        for stop in [from, to] {
            assert!(stop.starts_with('#') && stop.len() == 7, "{gradient:?} has bad stop {stop}");
        }
    }
}

#[test]
fn all_lists_each_variant_once() {
    let unique = Gradient::ALL.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), Gradient::ALL.len());
}

#[test]
fn css_uses_both_stops() {
    assert_eq!(Gradient::PurplePink.css(), "background-image: linear-gradient(135deg, #a855f7, #ec4899);");
}

#[test]
fn card_accent_uses_first_two_tags() {
    assert_eq!(card_accent(&["Next.js", "TypeScript", "Node.js"]), (Gradient::Silver, Gradient::Cobalt));
    assert_eq!(card_accent(&["React", "D3.js"]), (Gradient::BlueCyan, Gradient::BlueCyan));
}

#[test]
fn card_accent_falls_back_for_unmapped_tags() {
    assert_eq!(card_accent(&["Elm", "Haskell"]), (Gradient::PurplePink, Gradient::BlueCyan));
}

#[test]
fn card_accent_treats_missing_tags_as_defaults() {
    assert_eq!(card_accent(&[]), (Gradient::BlueCyan, Gradient::Cobalt));
    assert_eq!(card_accent(&["MongoDB"]), (Gradient::Forest, Gradient::Cobalt));
}

#[test]
fn for_tech_is_case_sensitive() {
    assert_eq!(Gradient::for_tech("React"), Some(Gradient::BlueCyan));
    assert_eq!(Gradient::for_tech("react"), None);
}
