//! Shared setup for the slidephys benchmarks.

use glam::DVec3;
use slidephys::{
    Body, CollisionQuery, Ellipsoid, ObjectBody, ObjectBox, PhysicsConfig, PhysicsModel, Tile,
    TileMap, Triangle, TriangleList,
};

/// Square open room of `size` tiles with a pillar every fourth tile and a crate
/// every seventh.
pub fn setup_room(size: u32) -> anyhow::Result<TileMap> {
    let mut map = TileMap::new(size, size, Tile::open(0.0, 4.0));
    for y in 0..size {
        for x in 0..size {
            let tile = if x % 4 == 2 && y % 4 == 2 {
                Tile::solid()
            } else {
                Tile::open(((x + y) % 3) as f64 * 0.1, 4.0)
            };
            map.set_tile(x, y, tile)?;
            if (x * size + y) % 7 == 3 {
                let base = DVec3::new(x as f64 + 0.3, y as f64 + 0.3, 0.0);
                map.add_object_box(ObjectBox::new(base, base + DVec3::new(0.4, 0.4, 0.5)))?;
            }
        }
    }
    Ok(map)
}

/// A model over [`setup_room`] with `n` bodies walking in varying directions.
pub fn setup_model(room: u32, n: usize) -> anyhow::Result<PhysicsModel<TileMap>> {
    let mut model = PhysicsModel::new(setup_room(room)?, PhysicsConfig::default());
    let ellipsoid = Ellipsoid::new(0.25, 0.25, 0.4)?;
    for i in 0..n {
        let x = 0.5 + (i as f64 * 1.37) % (room as f64 - 1.0);
        let y = 0.5 + (i as f64 * 2.11) % (room as f64 - 1.0);
        let angle = i as f64 * 0.7;
        let body = ObjectBody::new(DVec3::new(x, y, 1.0), ellipsoid)
            .with_velocity(DVec3::new(angle.cos(), angle.sin(), 0.0) * 2.0);
        model.add_tracked_body(Body::from(body));
    }
    Ok(model)
}

/// Unit-sphere query sweeping from the origin along `velocity`.
pub fn unit_query(velocity: DVec3) -> CollisionQuery {
    let mut query = CollisionQuery::new(Ellipsoid::default());
    query.begin_sweep(DVec3::ZERO, velocity);
    query
}

/// Two walls meeting at a right angle in front of the origin.
pub fn corner() -> TriangleList {
    TriangleList::new(vec![
        Triangle::new(
            DVec3::new(2.0, 2.0, -2.0),
            DVec3::new(2.0, -2.0, -2.0),
            DVec3::new(2.0, 2.0, 10.0),
        ),
        Triangle::new(
            DVec3::new(-2.0, 2.0, -2.0),
            DVec3::new(2.0, 2.0, -2.0),
            DVec3::new(2.0, 2.0, 10.0),
        ),
    ])
}
