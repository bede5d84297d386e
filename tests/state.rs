//! Save/restore round-trips through the reference persistence
//! mechanism (serde_json).

use dialkit::{
    Color, Notches, NotchesState, Paint, Pointer, PointerState, PointerStatus, StateError,
    STATE_VERSION,
};

#[test]
fn notches_round_trip_preserves_parameters() {
    let mut notches = Notches::new(Paint::stroke(Color::BLACK, 3.0));
    notches.set_count(12);
    notches.set_length(8.5);
    notches.set_sweep_degrees(270.0);

    let json = serde_json::to_string(&notches.save_state()).unwrap();
    let state: NotchesState = serde_json::from_str(&json).unwrap();

    let mut restored = Notches::new(Paint::stroke(Color::BLACK, 3.0));
    restored.restore_state(&state).unwrap();

    assert_eq!(restored.count(), 12);
    assert_eq!(restored.length(), 8.5);
    assert_eq!(restored.sweep_degrees(), 270.0);
}

#[test]
fn pointer_round_trip_preserves_parameters() {
    let mut pointer = Pointer::new(Paint::fill(Color::rgb(0, 120, 255)));
    pointer.set_position(42.5);
    pointer.set_radius(9.0);
    pointer.set_halo_width(6.0);
    pointer.set_halo_alpha(200);
    pointer.set_status(PointerStatus::Pressed);

    let json = serde_json::to_string(&pointer.save_state()).unwrap();
    let state: PointerState = serde_json::from_str(&json).unwrap();

    let mut restored = Pointer::new(Paint::fill(Color::rgb(0, 120, 255)));
    restored.restore_state(&state).unwrap();

    assert_eq!(restored.position(), 42.5);
    assert_eq!(restored.radius(), 9.0);
    assert_eq!(restored.halo_width(), 6.0);
    assert_eq!(restored.halo_alpha(), 200);
    assert_eq!(restored.status(), PointerStatus::Pressed);
}

#[test]
fn restore_reclamps_hostile_values() {
    let state = PointerState {
        version: STATE_VERSION,
        position: 400.0,
        radius: -3.0,
        halo_width: -1.0,
        halo_alpha: 255,
        status: PointerStatus::Released,
    };

    let mut pointer = Pointer::new(Paint::default());
    pointer.restore_state(&state).unwrap();

    assert_eq!(pointer.position(), 100.0);
    assert_eq!(pointer.radius(), 0.0);
    assert_eq!(pointer.halo_width(), 0.0);
}

#[test]
fn unknown_version_is_rejected() {
    let state = NotchesState {
        version: 99,
        count: 4,
        length: 5.0,
        sweep_degrees: 360.0,
    };

    let mut notches = Notches::new(Paint::default());
    let err = notches.restore_state(&state).unwrap_err();
    assert!(matches!(
        err,
        StateError::UnsupportedVersion { found: 99 }
    ));
}

#[test]
fn missing_optional_fields_take_defaults() {
    // Snapshots written before the sweep was saved carry neither a
    // version nor a sweep; both default.
    let state: NotchesState = serde_json::from_str(r#"{"count": 6, "length": 4.0}"#).unwrap();
    assert_eq!(state.version, STATE_VERSION);
    assert_eq!(state.sweep_degrees, 360.0);

    let json = r#"{"position": 10.0, "radius": 2.0, "halo_width": 5.0, "halo_alpha": 128}"#;
    let state: PointerState = serde_json::from_str(json).unwrap();
    assert_eq!(state.status, PointerStatus::Released);
}

#[test]
fn setter_clamping_matches_the_contract() {
    let mut notches = Notches::new(Paint::default());
    notches.set_count(-5);
    assert_eq!(notches.count(), 0);
    notches.set_length(-1.0);
    assert_eq!(notches.length(), 0.0);

    let mut pointer = Pointer::new(Paint::default());
    pointer.set_position(150.0);
    assert_eq!(pointer.position(), 100.0);
    pointer.set_position(-10.0);
    assert_eq!(pointer.position(), 0.0);
    pointer.set_halo_alpha(300);
    assert_eq!(pointer.halo_alpha(), 255);
    pointer.set_halo_alpha(-1);
    assert_eq!(pointer.halo_alpha(), 0);
}
