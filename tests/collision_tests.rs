//! Property tests for obstacle overlap and the mark protocol

use proptest::prelude::*;

use tui_launch::core::{CollisionRegistry, Rect};

fn rect() -> impl Strategy<Value = Rect> {
    (-20i32..20, -20i32..20, 0i32..8, 0i32..8).prop_map(|(row, column, rows, columns)| {
        Rect::new(
            f64::from(row),
            f64::from(column),
            f64::from(rows),
            f64::from(columns),
        )
    })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn non_empty_rect_overlaps_itself(a in rect()) {
        prop_assert_eq!(a.overlaps(&a), a.rows > 0.0 && a.columns > 0.0);
    }

    #[test]
    fn point_hits_exactly_the_covered_cells(
        a in rect(),
        row in -25i32..25,
        column in -25i32..25,
    ) {
        let (r, c) = (f64::from(row), f64::from(column));
        let inside = a.row <= r && r < a.row + a.rows && a.column <= c && c < a.column + a.columns;
        prop_assert_eq!(a.overlaps(&Rect::point(r, c)), inside);
    }

    #[test]
    fn hits_match_pairwise_overlap(obstacles in prop::collection::vec(rect(), 0..12), area in rect()) {
        let mut reg = CollisionRegistry::new();
        let ids: Vec<_> = obstacles
            .iter()
            .map(|o| reg.add_obstacle(o.row, o.column, o.rows, o.columns))
            .collect();

        let expected: Vec<_> = ids
            .iter()
            .zip(&obstacles)
            .filter(|(_, o)| o.overlaps(&area))
            .map(|(id, _)| *id)
            .collect();
        prop_assert_eq!(reg.hits(&area), expected);
    }

    #[test]
    fn each_mark_is_consumed_once(obstacles in prop::collection::vec(rect(), 1..8), area in rect()) {
        let mut reg = CollisionRegistry::new();
        for o in &obstacles {
            reg.add_obstacle(o.row, o.column, o.rows, o.columns);
        }

        // Two detectors hitting the same area in one tick.
        let first = reg.mark_hits(&area);
        let second = reg.mark_hits(&area);
        prop_assert_eq!(first, second);

        let ids: Vec<_> = reg.list_obstacles().map(|o| o.id).collect();
        let consumed = ids.iter().filter(|id| reg.consume_mark(**id)).count();
        prop_assert_eq!(consumed, first);
        prop_assert!(ids.iter().all(|id| !reg.consume_mark(*id)));
    }
}
