// Host-side tests for the debug panel bindings and hex colours.

use site_core::color::Color;
use site_core::panel::{ColorControl, ControlRange, DebugPanel, UniformControl};
use site_core::water::{WaterUniformBlock, WaterUniforms};
use site_core::SiteError;

#[test]
fn every_control_has_a_valid_range_containing_its_default() {
    let defaults = WaterUniforms::default();
    for control in UniformControl::ALL {
        let range = control.range();
        assert!(range.is_valid(), "{} has invalid range", control.name());
        let value = control.read(&defaults);
        assert!(
            value >= range.min && value <= range.max,
            "{} default {value} outside [{}, {}]",
            control.name(),
            range.min,
            range.max
        );
    }
}

#[test]
fn control_names_are_unique_and_resolvable() {
    let panel = DebugPanel::new();
    assert_eq!(panel.controls().len(), 10);
    for control in panel.controls() {
        assert_eq!(panel.lookup(control.name()).ok(), Some(*control));
    }
    let names: std::collections::HashSet<_> = UniformControl::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), UniformControl::ALL.len());
}

#[test]
fn quantize_clamps_and_snaps() {
    let r = ControlRange::new(0.0, 5.0, 1.0);
    assert_eq!(r.quantize(-3.0), 0.0);
    assert_eq!(r.quantize(9.0), 5.0);
    assert_eq!(r.quantize(2.4), 2.0);
    assert_eq!(r.quantize(2.6), 3.0);
    assert_eq!(r.quantize(f32::NAN), 0.0);
    assert_eq!(r.quantize(f32::INFINITY), 0.0);

    let fine = ControlRange::new(0.0, 1.0, 0.001);
    assert!((fine.quantize(0.12345) - 0.123).abs() < 1e-5);
    assert!(!ControlRange::new(1.0, 0.0, 0.1).is_valid());
    assert!(!ControlRange::new(0.0, 1.0, 0.0).is_valid());
}

#[test]
fn apply_writes_through_to_uniforms() {
    let panel = DebugPanel::new();
    let mut u = WaterUniforms::default();

    let stored = panel
        .apply_named(&mut u, "uBigWavesElevation", 0.5)
        .expect("known control");
    assert!((stored - 0.5).abs() < 1e-5);
    assert!((u.big_waves_elevation - 0.5).abs() < 1e-5);

    panel.apply(&mut u, UniformControl::BigWavesFrequencyY, 7.25);
    assert!((u.big_waves_frequency.y - 7.25).abs() < 1e-4);
    assert_eq!(u.big_waves_frequency.x, 4.0);

    // Out-of-range input is clamped rather than rejected.
    let stored = panel.apply(&mut u, UniformControl::SmallWavesFrequency, 99.0);
    assert_eq!(stored, 30.0);
    assert_eq!(u.small_waves_frequency, 30.0);

    panel.apply(&mut u, UniformControl::SmallIterations, 3.6);
    assert_eq!(u.small_iterations, 4.0);
}

#[test]
fn unknown_control_is_an_error() {
    let panel = DebugPanel::new();
    let mut u = WaterUniforms::default();
    let before = u.clone();
    match panel.apply_named(&mut u, "uWaveHeight", 0.3) {
        Err(SiteError::UnknownControl(name)) => assert_eq!(name, "uWaveHeight"),
        other => panic!("expected UnknownControl, got {other:?}"),
    }
    assert_eq!(u, before);
}

#[test]
fn panel_starts_collapsed_and_toggles() {
    let mut panel = DebugPanel::new();
    assert!(panel.is_collapsed());
    assert!(!panel.toggle());
    assert!(panel.toggle());
    assert!(panel.is_collapsed());
}

#[test]
fn color_controls_accept_hex_and_reject_garbage() {
    let panel = DebugPanel::new();
    let mut u = WaterUniforms::default();
    assert_eq!(panel.color_controls().len(), 2);

    let c = panel
        .apply_color(&mut u, ColorControl::Surface, "#00ff80")
        .expect("valid hex");
    assert_eq!(c, Color::from_rgb8(0, 255, 128));
    assert_eq!(ColorControl::Surface.read(&u).to_hex(), "#00ff80");

    assert!(panel.apply_color(&mut u, ColorControl::Depth, "#12345").is_err());
    assert!(panel.apply_color(&mut u, ColorControl::Depth, "zzzzzz").is_err());
    assert_eq!(ColorControl::Depth.read(&u).to_hex(), "#ff4000");
}

#[test]
fn default_colors_match_their_hex() {
    let u = WaterUniforms::default();
    assert_eq!(Color::from_hex("#ff4000").ok(), Some(u.depth_color));
    assert_eq!(Color::from_hex("#151c37").ok(), Some(u.surface_color));
    assert_eq!(u.surface_color.to_hex(), "#151c37");
}

#[test]
fn hex_parsing_forms() {
    assert_eq!(Color::from_hex("#ff4000").ok(), Some(Color::from_rgb8(255, 64, 0)));
    assert_eq!(Color::from_hex("151c37").ok(), Some(Color::from_rgb8(0x15, 0x1c, 0x37)));
    assert_eq!(Color::from_hex("#fa0").ok(), Some(Color::from_rgb8(255, 170, 0)));
    assert_eq!(Color::from_hex("  #FFFFFF ").ok(), Some(Color::new(1.0, 1.0, 1.0)));
    assert!(Color::from_hex("").is_err());
    assert!(Color::from_hex("#ff40").is_err());
    assert!(Color::from_hex("#ggg").is_err());
}

#[test]
fn linear_conversion_keeps_endpoints() {
    assert_eq!(Color::new(0.0, 0.0, 0.0).to_linear(), [0.0, 0.0, 0.0]);
    let white = Color::new(1.0, 1.0, 1.0).to_linear();
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
    let mid = Color::new(0.5, 0.5, 0.5).to_linear()[0];
    assert!(mid > 0.2 && mid < 0.23, "mid grey linear={mid}");
}

#[test]
fn uniform_block_matches_shader_layout() {
    assert_eq!(std::mem::size_of::<WaterUniformBlock>(), 208);
    let mut u = WaterUniforms::default();
    u.time = 2.5;
    let block = WaterUniformBlock::pack(&u, glam::Mat4::IDENTITY, glam::Mat4::IDENTITY);
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&block));
    // vec2 frequency at byte 128, time at 156, offset and multiplier at 188/192.
    assert_eq!(floats[32], 4.0);
    assert_eq!(floats[33], 1.5);
    assert_eq!(floats[39], 2.5);
    assert_eq!(floats[46], 3.6);
    assert_eq!(floats[47], 0.925);
    assert_eq!(floats[48], 1.0);
}
