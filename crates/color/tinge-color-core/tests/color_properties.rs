use approx::assert_relative_eq;
use tinge_color_core::{Color4d, Color4f};

#[test]
fn read_back_is_exact_over_the_unit_grid() {
    let steps = [0.0f64, 0.125, 0.25, 0.5, 0.75, 1.0];
    for &r in &steps {
        for &g in &steps {
            for &a in &steps {
                let c = Color4d::new(r, g, 0.375, a);
                assert_eq!(c.red(), r);
                assert_eq!(c.green(), g);
                assert_eq!(c.blue(), 0.375);
                assert_eq!(c.alpha(), a);
            }
        }
    }
}

#[test]
fn integer_round_trips() {
    let black = Color4f::from_rgb8(0, 0, 0);
    assert_eq!(
        [black.red(), black.green(), black.blue(), black.alpha()],
        [0.0, 0.0, 0.0, 1.0]
    );

    let white = Color4f::from_rgb8(255, 255, 255);
    assert_eq!(
        [white.red(), white.green(), white.blue(), white.alpha()],
        [1.0, 1.0, 1.0, 1.0]
    );

    let mid = Color4f::from_rgb8(128, 128, 128);
    assert_relative_eq!(mid.red(), 128.0 / 255.0, max_relative = 1e-6);
    assert_eq!(mid.to_rgba8(), [128, 128, 128, 255]);
}

#[test]
fn interpolation_matches_its_definition() {
    let c = Color4d::new(0.2, 0.4, 0.6, 0.8);
    let d = Color4d::new(0.8, 0.6, 0.4, 0.2);

    let mut out = Color4d::default();
    out.set_interpolation(&c, &d, 0.0);
    assert_eq!(out, c);
    out.set_interpolation(&c, &d, 1.0);
    assert_eq!(out, d);
    out.set_interpolation(&c, &d, 0.5);
    for i in 0..4 {
        assert_relative_eq!(out[i], (c[i] + d[i]) / 2.0, max_relative = 1e-12);
    }
}

#[test]
fn arithmetic_never_touches_alpha() {
    let c = Color4d::new(0.2, 0.3, 0.4, 0.6);
    let d = Color4d::new(0.1, 0.2, 0.3, 0.9);

    assert_eq!((c + d).alpha(), 0.6);
    assert_eq!((c - d).alpha(), 0.6);
    assert_eq!((c * d).alpha(), 0.6);
    assert_eq!((c * 0.5).alpha(), 0.6);
    assert_eq!((c / 2.0).alpha(), 0.6);
    assert_eq!((-c).alpha(), 0.6);

    let mut e = c;
    e.scale(&d);
    assert_eq!(e.alpha(), 0.6);
    e.negate();
    assert_eq!(e.alpha(), 0.6);
}

#[test]
fn set_sum_and_sub_are_rgb_only() {
    let c = Color4f::new(0.25, 0.25, 0.25, 0.5);
    let d = Color4f::new(0.5, 0.25, 0.0, 1.0);

    let mut out = Color4f::default();
    out.set_sum(&c, &d);
    assert_eq!(out.as_vec3().to_array(), [0.75, 0.5, 0.25]);
    assert_eq!(out.alpha(), 0.5);

    let sum = out;
    out.set_sub(&sum, &d);
    assert_eq!(out, c);
}

#[test]
fn basic_palette_table_contract() {
    // Period 7 in the index.
    for i in 0..21 {
        assert_eq!(Color4f::basic(i), Color4f::basic(i % 7));
    }
    assert_eq!(Color4f::basic(0), Color4f::color_red());
    assert_eq!(Color4f::basic(7), Color4f::color_red());
    assert_eq!(Color4f::basic(100), Color4f::color_blue());
    assert_eq!(Color4f::basic49(0), Color4f::color_red());
}

#[test]
fn basic49_uses_truncated_division() {
    // i = 48: i0 = 6 (white), i1 = (6 + 6) % 7 = 5 (pink).
    let expected = Color4f::lerp(&Color4f::color_white(), &Color4f::color_pink(), 0.25);
    assert_eq!(Color4f::basic49(48), expected);
}

#[test]
fn discrete_getters_cover_arbitrary_ranges() {
    let c = Color4d::new(0.0, 1.0, 0.5, 0.25);
    assert_eq!(c.red_discrete(0u8, 255), 0);
    assert_eq!(c.green_discrete(0u8, 255), 255);
    assert_eq!(c.blue_discrete(0i16, 1000), 500);
    assert_eq!(c.alpha_discrete(0u32, 65535), 16384);
    assert_eq!(c.green_discrete(-1i32, 1), 1);
}

#[test]
fn both_precisions_share_semantics() {
    let f = Color4f::basic49(10);
    let d = Color4d::basic49(10);
    for i in 0..4 {
        assert_relative_eq!(f[i] as f64, d[i], max_relative = 1e-6);
    }
}
