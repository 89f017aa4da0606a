use super::*;

#[test]
fn defaults_are_valid() {
    let s = EffectSettings::default();
    assert!(s.validate().is_ok());
    assert!(s.paper_enabled);
    assert!(!s.reduce_motion);
    assert_eq!(s.paper.fiber_count, 8000);
    assert_eq!(s.burst.particle_count, 60);
    assert_eq!(s.grain.fps.num, 24);
}

#[test]
fn partial_json_fills_defaults() {
    let s = EffectSettings::from_json_str(
        r#"{ "reduce_motion": true, "paper": { "opacity": 0.4 }, "grain": { "intensity": 0.2 } }"#,
    )
    .unwrap();
    assert!(s.reduce_motion);
    assert_eq!(s.paper.opacity, 0.4);
    assert_eq!(s.paper.stain_count, 30);
    assert_eq!(s.grain.intensity, 0.2);
    assert_eq!(s.grain.fine_count, 1200);
}

#[test]
fn out_of_range_values_are_rejected() {
    let err = EffectSettings::from_json_str(r#"{ "paper": { "opacity": 1.5 } }"#).unwrap_err();
    assert!(matches!(err, KeepsakeError::Validation(_)));

    let err = EffectSettings::from_json_str(r#"{ "grain": { "fps": { "num": 0, "den": 1 } } }"#)
        .unwrap_err();
    assert!(matches!(err, KeepsakeError::Validation(_)));

    let err = EffectSettings::from_json_str(
        r#"{ "burst": { "delay": { "start": 0.5, "end": 0.1 } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, KeepsakeError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EffectSettings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, KeepsakeError::Serde(_)));
}

#[test]
fn from_path_reads_files() {
    let dir = std::path::PathBuf::from("target").join("settings_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    std::fs::write(&path, r#"{ "paper_enabled": false }"#).unwrap();

    let s = EffectSettings::from_path(&path).unwrap();
    assert!(!s.paper_enabled);

    let missing = EffectSettings::from_path(&dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, KeepsakeError::Io(_)));
}

#[test]
fn reduce_motion_flows_into_generators() {
    let mut s = EffectSettings::default();
    let mut overlay = s.grain_overlay();
    overlay.appear(0.0);
    assert!(overlay.is_ticking());
    assert_eq!(
        s.trigger_burst(Point::ZERO, &mut Lcg64::new(1)).particles().len(),
        60
    );

    s.reduce_motion = true;
    let mut overlay = s.grain_overlay();
    overlay.appear(0.0);
    assert!(!overlay.is_ticking());
    let burst = s.trigger_burst(Point::ZERO, &mut Lcg64::new(1));
    assert!(burst.particles().is_empty());
    assert_eq!(burst.rings().len(), 1);
}
