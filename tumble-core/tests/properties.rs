//! Property tests for the mapper, hit test and cycle ring

use proptest::prelude::*;
use tumble_core::config::{ScreenGeometry, DEFAULT_PRESETS};
use tumble_core::cycle::{CycleId, CycleRing, CYCLE_COUNT};
use tumble_core::touch::{CoordinateMapper, ScreenPoint};
use tumble_core::ui::Rect;
use tumble_hal::{TouchSample, SENSOR_RANGE};

fn cycle_id() -> impl Strategy<Value = CycleId> {
    (0..CYCLE_COUNT).prop_map(CycleId::from_index)
}

proptest! {
    #[test]
    fn test_mapped_points_stay_on_screen(x in 0..SENSOR_RANGE, y in 0..SENSOR_RANGE) {
        let screen = ScreenGeometry::LANDSCAPE_480X320;
        let point = CoordinateMapper::new(screen).map(&TouchSample::new(0, x, y, 0));

        prop_assert!((1..=screen.width).contains(&point.x));
        prop_assert!((1..=screen.height).contains(&point.y));
    }

    #[test]
    fn test_mapping_is_monotone(a in 0..SENSOR_RANGE, b in 0..SENSOR_RANGE) {
        let mapper = CoordinateMapper::new(ScreenGeometry::default());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = mapper.map(&TouchSample::new(0, lo, lo, 0));
        let p_hi = mapper.map(&TouchSample::new(0, hi, hi, 0));

        prop_assert!(p_hi.x <= p_lo.x);
        prop_assert!(p_hi.y <= p_lo.y);
    }

    #[test]
    fn test_rect_corners_are_inside(
        x in 0u16..400,
        y in 0u16..300,
        w in 0u16..80,
        h in 0u16..80,
    ) {
        let rect = Rect::new(x, y, w, h);
        prop_assert!(rect.contains(ScreenPoint::new(x, y)));
        prop_assert!(rect.contains(ScreenPoint::new(x + w, y + h)));
        prop_assert!(!rect.contains(ScreenPoint::new(x + w + 1, y)));
        prop_assert!(!rect.contains(ScreenPoint::new(x, y + h + 1)));
    }

    #[test]
    fn test_five_steps_is_identity(id in cycle_id()) {
        let mut forward = id;
        let mut backward = id;
        for _ in 0..CYCLE_COUNT {
            forward = forward.next();
            backward = backward.previous();
        }
        prop_assert_eq!(forward, id);
        prop_assert_eq!(backward, id);
    }

    #[test]
    fn test_navigation_sequence_matches_net_offset(moves in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut ring = CycleRing::new(DEFAULT_PRESETS);
        let start = ring.current_id().index() as i64;
        let mut offset = 0i64;

        for forward in moves {
            if forward {
                ring.go_next();
                offset += 1;
            } else {
                ring.go_previous();
                offset -= 1;
            }
        }

        let expected = (start + offset).rem_euclid(CYCLE_COUNT as i64) as usize;
        prop_assert_eq!(ring.current_id(), CycleId::from_index(expected));
    }

    #[test]
    fn test_attribute_edits_stay_in_range(presses in 0usize..64) {
        let mut ring = CycleRing::new(DEFAULT_PRESETS);
        for _ in 0..presses {
            ring.current_mut().increment_rinse_count();
            ring.current_mut().increment_spin_minutes();
        }
        prop_assert!(ring.current().rinse_count <= 6);
        prop_assert!(ring.current().spin_minutes <= 12);
    }
}
