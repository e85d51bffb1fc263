mod support;

use cellar_common::{Direction, GridLayout, ImageSet, Viewer, ViewerState};
use support::{tracing_init, RecordingLock};

fn six_images() -> ImageSet {
    ImageSet::from_pairs(&[
        ("/gallery/0.webp", "Interior 1"),
        ("/gallery/1.webp", "Interior 2"),
        ("/gallery/2.webp", "Wine Selection"),
        ("/gallery/3.webp", "Bar Area"),
        ("/gallery/4.webp", "Wine Bottles"),
        ("/gallery/5.webp", "Seating"),
    ])
    .unwrap()
}

fn open_at(index: usize) -> ViewerState {
    ViewerState {
        is_open: true,
        current_index: index,
    }
}

#[test]
fn test_open_navigate_wrap_escape() {
    tracing_init();
    let images = six_images();
    let lock = RecordingLock::default();
    let mut viewer = Viewer::new(&images, lock.clone());

    viewer.open(4).unwrap();
    assert_eq!(viewer.state(), open_at(4));

    viewer.navigate(Direction::Next);
    assert_eq!(viewer.state(), open_at(5));

    viewer.navigate(Direction::Next);
    assert_eq!(viewer.state(), open_at(0));

    viewer.handle_key("Escape");
    assert!(!viewer.state().is_open);
    assert!(!lock.is_held());
}

#[test]
fn test_arrow_key_while_closed_keeps_index() {
    tracing_init();
    let mut viewer = Viewer::new(&six_images(), RecordingLock::default());
    viewer.open(3).unwrap();
    viewer.close();

    viewer.handle_key("ArrowRight");
    assert_eq!(viewer.current_index(), 3);
    assert!(!viewer.is_open());
}

#[test]
fn test_keyboard_walk_backwards_from_first() {
    tracing_init();
    let mut viewer = Viewer::new(&six_images(), RecordingLock::default());
    viewer.open(0).unwrap();
    viewer.handle_key("ArrowLeft");
    assert_eq!(viewer.state(), open_at(5));
    viewer.handle_key("ArrowLeft");
    assert_eq!(viewer.state(), open_at(4));
}

/// No sequence of operations leaves the lock held while closed.
#[test]
fn test_lock_tracks_open_state_across_sequences() {
    tracing_init();
    let lock = RecordingLock::default();
    let mut viewer = Viewer::new(&six_images(), lock.clone());

    let keys = ["ArrowRight", "Escape", "ArrowLeft", "x", "Escape"];
    for round in 0..30usize {
        match round % 5 {
            0 => {
                let _ = viewer.open(round % 7);
            }
            1 => viewer.navigate(Direction::Previous),
            2 => viewer.close(),
            3 => {
                viewer.handle_key(keys[round % keys.len()]);
            }
            _ => viewer.navigate(Direction::Next),
        }
        assert_eq!(lock.is_held(), viewer.is_open(), "round {round}");
        assert!(lock.held() <= 1);
        assert!(viewer.current_index() < 6);
    }

    let _ = viewer.open(1);
    drop(viewer);
    assert!(!lock.is_held());
}

/// Images without a grid cell stay reachable in the viewer.
#[test]
fn test_ungridded_image_reachable_by_navigation() {
    tracing_init();
    let images = ImageSet::from_pairs(&[
        ("/0.webp", "0"),
        ("/1.webp", "1"),
        ("/2.webp", "2"),
        ("/3.webp", "3"),
        ("/4.webp", "4"),
        ("/5.webp", "5"),
        ("/6.webp", "Wide"),
        ("/7.webp", "7"),
    ])
    .unwrap();
    let layout = GridLayout::responsive();
    assert_eq!(layout.ungridded_indices(&images), vec![6]);

    let mut viewer = Viewer::new(&images, RecordingLock::default());
    viewer.open(5).unwrap();
    viewer.navigate(Direction::Next);
    let shown = images.get(viewer.current_index()).map(|e| e.label.as_str());
    assert_eq!(shown, Some("Wide"));
}

/// A parent swapping in fewer images must not leave the page locked
/// with nothing on screen.
#[test]
fn test_replacing_images_while_open_releases_lock() {
    tracing_init();
    let lock = RecordingLock::default();
    let eight = ImageSet::from_pairs(&[
        ("/0.webp", "0"),
        ("/1.webp", "1"),
        ("/2.webp", "2"),
        ("/3.webp", "3"),
        ("/4.webp", "4"),
        ("/5.webp", "5"),
        ("/6.webp", "6"),
        ("/7.webp", "7"),
    ])
    .unwrap();
    let three = ImageSet::from_pairs(&[("/a.webp", "A"), ("/b.webp", "B"), ("/c.webp", "C")])
        .unwrap();

    let mut viewer = Viewer::new(&eight, lock.clone());
    viewer.open(6).unwrap();
    viewer.set_images(&three);

    let state = viewer.state();
    assert!(!state.is_open);
    assert!(!lock.is_held());
    assert!(three.get(state.current_index).is_some());
}
