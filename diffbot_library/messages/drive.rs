use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one side of a differential drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wheel {
    Left,
    Right,
}

impl Wheel {
    /// Both wheels, in the order the control loop ticks them
    pub const ALL: [Wheel; 2] = [Wheel::Left, Wheel::Right];

    /// Stable index, also used as the noise stream id
    pub fn index(self) -> u64 {
        match self {
            Wheel::Left => 0,
            Wheel::Right => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Wheel::Left => "left",
            Wheel::Right => "right",
        }
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-wheel speed targets (RPM)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelTargets {
    pub left: f64,
    pub right: f64,
}

impl WheelTargets {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Target for one wheel
    pub fn get(&self, wheel: Wheel) -> f64 {
        match wheel {
            Wheel::Left => self.left,
            Wheel::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_order_and_index() {
        assert_eq!(Wheel::ALL, [Wheel::Left, Wheel::Right]);
        assert_eq!(Wheel::Left.index(), 0);
        assert_eq!(Wheel::Right.index(), 1);
        assert_eq!(Wheel::Right.to_string(), "right");
    }

    #[test]
    fn test_targets_lookup() {
        let targets = WheelTargets::new(90.0, 140.0);
        assert_eq!(targets.get(Wheel::Left), 90.0);
        assert_eq!(targets.get(Wheel::Right), 140.0);
    }
}
