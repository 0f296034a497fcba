//! Property tests for the spiral walk across origins and geometries.

use std::collections::HashSet;

use landgrid_spiral::{
    Assignment, Error, GeometryKind, LandCoord, NoopObserver, RingGeometry, SpiralWalk, TokenId,
    MAX_ORIGIN_AXIS,
};
use proptest::prelude::*;

fn geometry() -> impl Strategy<Value = GeometryKind> {
    prop_oneof![Just(GeometryKind::EvenSquare), Just(GeometryKind::OddSquare)]
}

fn axis() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1_000_000i64..1_000_000,
        -MAX_ORIGIN_AXIS..=MAX_ORIGIN_AXIS,
        (0i64..1_000).prop_map(|d| MAX_ORIGIN_AXIS - d),
        (0i64..1_000).prop_map(|d| d - MAX_ORIGIN_AXIS),
    ]
}

fn origin() -> impl Strategy<Value = LandCoord> {
    (axis(), axis()).prop_map(LandCoord::from)
}

fn any_coord() -> impl Strategy<Value = LandCoord> {
    (any::<i64>(), any::<i64>()).prop_map(LandCoord::from)
}

fn walk(origin: LandCoord, geometry: GeometryKind) -> SpiralWalk {
    SpiralWalk::with_geometry(origin, geometry)
        .unwrap()
        .with_observer(NoopObserver)
}

proptest! {
    #[test]
    fn first_mint_lands_on_origin(origin in origin(), geometry in geometry()) {
        let first = walk(origin, geometry).mint_next();
        prop_assert_eq!(first.token_id, TokenId(1));
        prop_assert_eq!(first.coord, origin);
        prop_assert_eq!(first.layer, 1);
    }

    #[test]
    fn coordinates_are_distinct(origin in origin(), geometry in geometry(), n in 0u64..2_000) {
        let batch = walk(origin, geometry).mint_batch(n).unwrap();
        let cells: HashSet<_> = batch.iter().map(|a| a.coord).collect();
        prop_assert_eq!(cells.len() as u64, n);
    }

    #[test]
    fn batch_equals_sequential(
        origin in origin(),
        geometry in geometry(),
        prefix in 0u64..200,
        n in 0u64..300,
    ) {
        let mut batched = walk(origin, geometry);
        let mut single = walk(origin, geometry);
        batched.mint_batch(prefix).unwrap();
        single.mint_batch(prefix).unwrap();

        let from_batch = batched.mint_batch(n).unwrap();
        let from_single: Vec<Assignment> = (0..n).map(|_| single.mint_next()).collect();

        prop_assert_eq!(from_batch, from_single);
        prop_assert_eq!(batched.minted_count(), prefix + n);
    }

    #[test]
    fn layers_match_geometry(origin in origin(), geometry in geometry(), n in 1u64..1_500) {
        let batch = walk(origin, geometry).mint_batch(n).unwrap();

        for a in &batch {
            prop_assert_eq!(geometry.layer_of(a.coord, origin), a.layer);
            prop_assert!(a.token_id.value() > geometry.tokens_through_layer(a.layer - 1).unwrap());
            prop_assert!(a.token_id.value() <= geometry.tokens_through_layer(a.layer).unwrap());
        }
        for pair in batch.windows(2) {
            let next_cell = pair[0].coord.chebyshev_distance(&pair[1].coord);
            // Consecutive tokens are neighbours, diagonally only when a new layer starts.
            prop_assert!(next_cell == 1);
        }
    }

    #[test]
    fn closed_form_agrees_with_walk(origin in origin(), geometry in geometry(), n in 1u64..1_500) {
        let batch = walk(origin, geometry).mint_batch(n).unwrap();
        for a in batch {
            prop_assert_eq!(geometry.position_of(a.token_id, origin), Some(a));
        }
    }

    #[test]
    fn lookups_round_trip(origin in origin(), geometry in geometry(), n in 0u64..500) {
        let mut w = walk(origin, geometry);
        let batch = w.mint_batch(n).unwrap();

        for a in &batch {
            prop_assert_eq!(w.coordinate_of(a.token_id).unwrap(), a.coord);
        }
        prop_assert_eq!(w.coordinate_of(0u64), Err(Error::NotFound(TokenId(0))));
        prop_assert_eq!(w.coordinate_of(n + 1), Err(Error::NotFound(TokenId(n + 1))));
    }

    #[test]
    fn origins_off_the_axis_range_are_rejected(
        inside in axis(),
        outside in prop_oneof![i64::MIN..-MAX_ORIGIN_AXIS, (MAX_ORIGIN_AXIS + 1)..=i64::MAX],
        geometry in geometry(),
        swap in any::<bool>(),
    ) {
        let origin = if swap {
            LandCoord::new(inside, outside)
        } else {
            LandCoord::new(outside, inside)
        };
        prop_assert!(matches!(
            SpiralWalk::with_geometry(origin, geometry),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn geometry_queries_accept_any_input(
        position in any_coord(),
        origin in any_coord(),
        layer in any::<u64>(),
        token in any::<u64>(),
        geometry in geometry(),
    ) {
        let found = geometry.layer_of(position, origin);
        prop_assert!(found >= 1);
        let _ = geometry.is_corner(position, layer, origin);
        let _ = geometry.layer_path(layer);

        if let Some(total) = geometry.tokens_through_layer(layer) {
            prop_assert!(layer == 0 || total >= geometry.max_steps_in_layer(layer));
        }
        if let Some(a) = geometry.position_of(TokenId(token), origin) {
            prop_assert_eq!(a.token_id, TokenId(token));
            prop_assert_eq!(geometry.layer_of(a.coord, origin), a.layer);
        }

        let distance = position.chebyshev_distance(&origin);
        prop_assert_eq!(distance, origin.chebyshev_distance(&position));
    }
}
