use std::thread;

use palette::color_difference::EuclideanDistance;
use palette_curator::colors::{lightness, to_hex, to_lab};
use palette_curator::{get_palette, ANCHOR_COLORS};
use proptest::prelude::*;

fn hex_palette(num_colors: usize) -> Vec<String> {
    get_palette(num_colors).into_iter().map(to_hex).collect()
}

#[test]
fn empty_palette() {
    assert!(get_palette(0).is_empty());
}

#[test]
fn single_color_is_the_gradient_midpoint() {
    assert_eq!(hex_palette(1), ["#b35a7b"]);
}

#[test]
fn two_colors_are_the_outer_anchors() {
    assert_eq!(get_palette(2), vec![ANCHOR_COLORS[0], ANCHOR_COLORS[4]]);
}

#[test]
fn five_color_palette() {
    assert_eq!(
        hex_palette(5),
        ["#003f5c", "#664e7b", "#b35a7b", "#eb745d", "#ffa600"]
    );
}

#[test]
fn seven_color_palette() {
    assert_eq!(
        hex_palette(7),
        ["#003f5c", "#4a4a75", "#81527f", "#b35a7b", "#db696a", "#f7824c", "#ffa600"]
    );
}

#[test]
fn adjacent_colors_are_perceptually_close() {
    let palette = get_palette(50);
    for pair in palette.windows(2) {
        let distance = to_lab(pair[0]).distance(to_lab(pair[1]));
        assert!(distance < 8.0, "{} -> {} is {distance}", to_hex(pair[0]), to_hex(pair[1]));
    }
}

#[test]
fn lightness_rises_steadily() {
    let lightness: Vec<f64> = get_palette(50).into_iter().map(lightness).collect();
    let steps: Vec<f64> = lightness.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(steps.iter().all(|step| *step > 0.0), "{steps:?}");

    let ideal = (lightness[49] - lightness[0]) / 49.0;
    for step in steps {
        assert!((step - ideal).abs() < 0.6, "step {step} vs {ideal}");
    }
}

#[test]
fn concurrent_callers_agree() {
    let expected = get_palette(24);
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(|| get_palette(24))).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn palette_has_requested_length(num_colors in 0usize..64) {
        prop_assert_eq!(get_palette(num_colors).len(), num_colors);
    }

    #[test]
    fn palette_is_deterministic(num_colors in 0usize..32) {
        prop_assert_eq!(get_palette(num_colors), get_palette(num_colors));
    }

    #[test]
    fn palette_spans_the_outer_anchors(num_colors in 2usize..48) {
        let palette = get_palette(num_colors);
        prop_assert_eq!(palette[0], ANCHOR_COLORS[0]);
        prop_assert_eq!(palette[num_colors - 1], ANCHOR_COLORS[4]);
    }
}
