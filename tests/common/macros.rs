/// Asserts that every agent moves no faster than the configured max speed.
#[macro_export]
macro_rules! assert_speed_bounded {
    ($world:expr) => {
        let max = $world.config().flocking.max_speed;
        for agent in $world.agents() {
            assert!(
                agent.velocity.length() <= max,
                "{} speed {} exceeds max {}",
                agent.id,
                agent.velocity.length(),
                max
            );
        }
    };
}

/// Asserts that every agent lies inside the world rectangle.
#[macro_export]
macro_rules! assert_in_bounds {
    ($world:expr) => {
        let bounds = $world.bounds();
        for agent in $world.agents() {
            assert!(
                bounds.contains(agent.position),
                "{} at {:?} is outside {:?}",
                agent.id,
                agent.position,
                bounds
            );
        }
    };
}

/// Asserts that two vectors are equal within `1e-9`.
#[macro_export]
macro_rules! assert_vec_close {
    ($left:expr, $right:expr) => {
        let (l, r) = ($left, $right);
        assert!((l - r).length() < 1e-9, "{:?} != {:?}", l, r);
    };
}
