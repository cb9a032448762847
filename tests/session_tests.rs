//! Session store and engine facade tests

use heatgrid::{Error, HeatGrid, SessionStore, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_get_or_create_is_lazy_and_sticky() {
    init_logging();
    let store = SessionStore::new();
    assert!(store.is_empty());

    store.with_grid(1, |grid| {
        assert_eq!(grid.size(), DEFAULT_GRID_SIZE);
        grid.set_size(3).unwrap();
    });
    // Second access sees the same grid, not a fresh one.
    store.with_grid(1, |grid| assert_eq!(grid.size(), 3));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_users_never_interact() {
    init_logging();
    let engine = HeatGrid::new();
    engine.set_grid_size(1, 3).unwrap();
    engine.set_grid_size(2, 5).unwrap();
    engine.record_hit(1, "A1").unwrap();

    assert_eq!(engine.counts(1)[0][0], 1);
    assert_eq!(engine.counts(2)[0][0], 0);
    assert_eq!(engine.counts(2).len(), 5);
}

#[test]
fn test_reset_on_fresh_session_is_a_noop() {
    let store = SessionStore::new();
    store.reset(9);
    store.with_grid(9, |grid| {
        assert_eq!(grid.size(), DEFAULT_GRID_SIZE);
        assert!(grid.counts().iter().all(|&c| c == 0));
    });
}

#[test]
fn test_engine_reset_restores_defaults() {
    let engine = HeatGrid::new();
    engine.set_grid_size(5, 4).unwrap();
    engine.record_hit(5, "D4").unwrap();

    engine.reset_grid(5);
    let counts = engine.counts(5);
    assert_eq!(counts.len(), DEFAULT_GRID_SIZE);
    assert!(counts.iter().flatten().all(|&c| c == 0));
}

#[test]
fn test_record_hit_surfaces_typed_errors() {
    let engine = HeatGrid::new();
    engine.set_grid_size(7, 3).unwrap();

    assert_eq!(engine.record_hit(7, "B2"), Ok(1));
    assert_eq!(engine.record_hit(7, "B2"), Ok(2));

    assert!(matches!(
        engine.record_hit(7, "D1"),
        Err(Error::OutOfBounds { size: 3, .. })
    ));
    assert!(matches!(
        engine.record_hit(7, "1A"),
        Err(Error::MalformedCoordinate { .. })
    ));
    // Errors leave the counts untouched.
    assert_eq!(engine.counts(7)[1][1], 2);
}

#[test]
fn test_set_grid_size_validates_range() {
    let engine = HeatGrid::new();
    assert!(matches!(
        engine.set_grid_size(3, 0),
        Err(Error::InvalidSize { requested: 0, .. })
    ));
    assert!(engine.set_grid_size(3, MAX_GRID_SIZE).is_ok());
}

#[test]
fn test_hits_revalidate_against_resized_grid() {
    let engine = HeatGrid::new();
    engine.set_grid_size(4, 6).unwrap();
    engine.record_hit(4, "F6").unwrap();

    // Shrinking resets and tightens the bounds for subsequent hits.
    engine.set_grid_size(4, 2).unwrap();
    assert!(matches!(
        engine.record_hit(4, "F6"),
        Err(Error::OutOfBounds { size: 2, .. })
    ));
}

#[test]
fn test_end_session_drops_the_grid() {
    let engine = HeatGrid::new();
    engine.set_grid_size(8, 3).unwrap();
    assert!(engine.end_session(8));
    assert!(!engine.end_session(8));
    // A later access starts a fresh default-size session.
    assert_eq!(engine.counts(8).len(), DEFAULT_GRID_SIZE);
}

#[test]
fn test_parallel_users_make_independent_progress() {
    use std::sync::Arc;
    use std::thread;

    let engine = Arc::new(HeatGrid::new());
    let mut handles = Vec::new();
    for user in 0..8u64 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                engine.record_hit(user, "A1").unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    for user in 0..8u64 {
        assert_eq!(engine.counts(user)[0][0], 100);
    }
}

#[test]
fn test_render_via_engine_produces_png() {
    let engine = HeatGrid::new();
    engine.record_hit(11, "A1").unwrap();
    let bytes = engine.render_heatmap(11).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    let ansi = engine.render_ansi(11);
    assert!(ansi.lines().count() == DEFAULT_GRID_SIZE + 1);
}
