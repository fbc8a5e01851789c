// Host-side tests for the page-level state machines: preloader and typewriter.

use site_core::config::{PreloaderConfig, TypewriterConfig, ABOUT_TEXT};
use site_core::preloader::{Preloader, PreloaderPhase};
use site_core::typewriter::{Direction, Typewriter};

fn typewriter(text: &str) -> Typewriter {
    Typewriter::new(&TypewriterConfig {
        text: text.to_string(),
        forward_ms: 100,
        reverse_ms: 50,
    })
}

#[test]
fn preloader_counts_from_one_to_hundred() {
    let mut p = Preloader::new(&PreloaderConfig::default());
    assert_eq!(p.percent_text(), "1%");
    assert_eq!(p.phase(), PreloaderPhase::Counting);

    let mut steps = 0;
    while let Some(delay) = p.step() {
        assert_eq!(delay, 18);
        steps += 1;
    }
    assert_eq!(steps, 99);
    assert_eq!(p.percent_text(), "100%");
    assert!(p.step().is_none());
}

#[test]
fn preloader_load_event_runs_fade_timeline() {
    let mut p = Preloader::new(&PreloaderConfig::default());
    p.step();
    p.step();
    assert_eq!(p.count(), 3);

    // Fading is only possible after the load event.
    assert!(p.begin_fade().is_none());
    assert!(!p.hide());

    assert_eq!(p.finish_loading(), 300);
    assert_eq!(p.percent_text(), "100%");
    assert_eq!(p.phase(), PreloaderPhase::Loaded);
    assert!(p.preloader_visible());
    assert!(!p.content_visible());

    assert_eq!(p.begin_fade(), Some(500));
    assert_eq!(p.phase(), PreloaderPhase::Fading);
    assert!(p.begin_fade().is_none());

    assert!(p.hide());
    assert_eq!(p.phase(), PreloaderPhase::Hidden);
    assert!(!p.preloader_visible());
    assert!(p.content_visible());
    assert!(!p.hide());
}

#[test]
fn late_counter_ticks_after_load_stay_at_hundred() {
    let mut p = Preloader::new(&PreloaderConfig::default());
    p.finish_loading();
    assert!(p.step().is_none());
    assert_eq!(p.count(), 100);
    // A second load notification does not rewind the phase.
    p.begin_fade();
    p.finish_loading();
    assert_eq!(p.phase(), PreloaderPhase::Fading);
}

#[test]
fn typewriter_shows_full_text_after_len_steps() {
    let text = "Hi\nthere";
    let mut tw = typewriter(text);
    assert_eq!(tw.text(), "");
    for i in 1..=tw.len() {
        assert_eq!(tw.step(), 100);
        assert_eq!(tw.shown(), i);
    }
    assert_eq!(tw.text(), text);
    assert!(tw.is_complete());

    // Idle once complete.
    tw.step();
    assert_eq!(tw.text(), text);
}

#[test]
fn typewriter_reverse_erases_then_retypes() {
    let mut tw = typewriter("abc");
    for _ in 0..3 {
        tw.step();
    }
    tw.reverse();
    assert_eq!(tw.direction(), Direction::Reverse);
    assert_eq!(tw.step(), 50);
    assert_eq!(tw.text(), "ab");
    tw.step();
    tw.step();
    assert_eq!(tw.text(), "");
    assert!(!tw.is_complete());

    // The empty step flips direction.
    assert_eq!(tw.step(), 100);
    assert_eq!(tw.direction(), Direction::Forward);
    for _ in 0..3 {
        tw.step();
    }
    assert_eq!(tw.text(), "abc");
}

#[test]
fn typewriter_handles_multibyte_text() {
    let mut tw = typewriter("olá");
    assert_eq!(tw.len(), 3);
    tw.step();
    tw.step();
    tw.step();
    assert_eq!(tw.text(), "olá");
}

#[test]
fn about_text_types_out_completely() {
    let mut tw = Typewriter::new(&TypewriterConfig::default());
    let mut guard = 0;
    while !tw.is_complete() {
        tw.step();
        guard += 1;
        assert!(guard <= ABOUT_TEXT.chars().count());
    }
    assert_eq!(tw.text(), ABOUT_TEXT);
}
