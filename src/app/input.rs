use glam::DVec2;
use swarm_core::config::FlockingParams;

/// Something the outside world asks for between ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A "place target" gesture at a world-space point.
    PlaceTarget(DVec2),
    /// The "add target" button: a target at a random point.
    AddRandomTarget,
    /// Slider changes for speed and perception.
    SetParams(FlockingParams),
    /// Rebuild the population with a new size.
    Reset { agent_count: usize },
    Quit,
}

impl InputEvent {
    /// Parses `"x,y"` into a [`InputEvent::PlaceTarget`].
    pub fn parse_target(s: &str) -> anyhow::Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("expected `x,y`, got `{s}`"))?;
        let x: f64 = x.trim().parse()?;
        let y: f64 = y.trim().parse()?;
        let point = DVec2::new(x, y);
        anyhow::ensure!(point.is_finite(), "target `{s}` is not a finite point");
        Ok(Self::PlaceTarget(point))
    }
}
