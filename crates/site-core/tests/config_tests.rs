// Host-side tests for the configuration presets and their validation.

use site_core::config::{PreloaderConfig, SceneVariant, SiteConfig};
use site_core::preloader::{Preloader, PreloaderPhase};
use site_core::SiteError;

#[test]
fn presets_validate() {
    for variant in [SceneVariant::Home, SceneVariant::Compact] {
        let config = SiteConfig::for_variant(variant);
        assert!(config.validate().is_ok(), "{variant:?} preset invalid");
        assert_eq!(config.variant, variant);
    }
    assert_eq!(SiteConfig::default().variant, SceneVariant::Home);
}

#[test]
fn variant_names_parse_leniently() {
    assert_eq!(SceneVariant::from_name("compact"), SceneVariant::Compact);
    assert_eq!(SceneVariant::from_name(" Compact "), SceneVariant::Compact);
    assert_eq!(SceneVariant::from_name("home"), SceneVariant::Home);
    assert_eq!(SceneVariant::from_name("anything"), SceneVariant::Home);
}

#[test]
fn presets_differ_where_expected() {
    let home = SiteConfig::for_variant(SceneVariant::Home);
    let compact = SiteConfig::for_variant(SceneVariant::Compact);
    assert_eq!(home.particles.count, 2000);
    assert_eq!(home.particles.extent, [15.0, 10.0, 20.0]);
    assert_eq!(compact.particles.count, 1200);
    assert_eq!(compact.pixel_ratio_cap, 1.5);
    assert_eq!(home.pixel_ratio_cap, 2.0);
    assert!(compact.water_grid.coarse_segments < compact.water_grid.fine_segments);
    assert_eq!(home.water, compact.water);
    assert_eq!(home.selectors.follow_frames, ".work-frame");
}

#[test]
fn invalid_values_are_reported() {
    let mut config = SiteConfig::default();
    config.particles.count = 0;
    assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));

    let mut config = SiteConfig::default();
    config.camera.near = 200.0;
    assert!(config.validate().is_err());

    let mut config = SiteConfig::default();
    config.particles.extent[1] = f32::NAN;
    assert!(config.validate().is_err());

    let mut config = SiteConfig::default();
    config.pixel_ratio_cap = 0.5;
    assert!(config.validate().is_err());

    let mut config = SiteConfig::default();
    config.water_grid.fine_segments = 0;
    assert!(config.validate().is_err());
}

#[test]
fn default_preloader_timeline_counts_then_fades_out() {
    let mut preloader = Preloader::new(&PreloaderConfig::default());
    let mut elapsed_ms = 0;
    while let Some(delay) = preloader.step() {
        assert_eq!(delay, 18);
        elapsed_ms += delay;
    }
    assert_eq!(preloader.percent_text(), "100%");
    assert_eq!(elapsed_ms, 99 * 18);
    assert_eq!(preloader.phase(), PreloaderPhase::Counting);

    elapsed_ms += preloader.finish_loading();
    assert_eq!(preloader.phase(), PreloaderPhase::Loaded);
    assert!(preloader.preloader_visible());

    elapsed_ms += preloader.begin_fade().expect("fade after load");
    assert_eq!(preloader.phase(), PreloaderPhase::Fading);
    assert_eq!(elapsed_ms, 99 * 18 + 300 + 500);

    assert!(preloader.hide());
    assert!(!preloader.preloader_visible());
    assert!(preloader.content_visible());
    assert_eq!(preloader.begin_fade(), None);
}
