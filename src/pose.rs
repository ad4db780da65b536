//! Pose data: parameter records, pose records and the fixed pose table.

use std::collections::BTreeMap;

use thiserror::Error;

/// Scalar parameters describing one body configuration.
///
/// Angles are in degrees. Nothing is clamped: out-of-range values give a
/// geometrically valid, if unrealistic, figure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseParams {
    /// Stance width scale; each hip moves out by half of it
    pub dist: f32,
    /// Hip turnout (degrees)
    pub turnout: f32,
    /// Front/back foot offset, signed
    pub front: f32,
    /// Extra arm tilt on top of the resting tilt (degrees)
    pub arm_lift: f32,
    pub elbow_bend: f32,
    pub knee_bend: f32,
}

impl PoseParams {
    pub fn new(dist: f32, turnout: f32, front: f32) -> Self {
        Self {
            dist,
            turnout,
            front,
            ..Default::default()
        }
    }

    pub fn with_arm_lift(mut self, degrees: f32) -> Self {
        self.arm_lift = degrees;
        self
    }

    pub fn with_elbow_bend(mut self, degrees: f32) -> Self {
        self.elbow_bend = degrees;
        self
    }

    pub fn with_knee_bend(mut self, degrees: f32) -> Self {
        self.knee_bend = degrees;
        self
    }

    /// Field-wise linear interpolation
    pub fn lerp(&self, other: &PoseParams, t: f32) -> PoseParams {
        PoseParams {
            dist: lerp(self.dist, other.dist, t),
            turnout: lerp(self.turnout, other.turnout, t),
            front: lerp(self.front, other.front, t),
            arm_lift: lerp(self.arm_lift, other.arm_lift, t),
            elbow_bend: lerp(self.elbow_bend, other.elbow_bend, t),
            knee_bend: lerp(self.knee_bend, other.knee_bend, t),
        }
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// How a pose places the hips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Hip anchors follow `dist` and `front`
    #[default]
    Derived,
    /// Hip anchors use the hand-authored crossed position
    FixedCrossed,
}

impl Stance {
    /// Weight of the crossed anchors for a pose with this stance
    pub fn crossing_weight(self) -> f32 {
        match self {
            Stance::Derived => 0.0,
            Stance::FixedCrossed => 1.0,
        }
    }
}

/// The figure's live configuration.
///
/// `crossing` blends the derived hip anchors (0.0) toward the crossed
/// anchors (1.0) and is interpolated like every other field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseState {
    pub params: PoseParams,
    pub crossing: f32,
}

impl PoseState {
    pub fn lerp(&self, other: &PoseState, t: f32) -> PoseState {
        PoseState {
            params: self.params.lerp(&other.params, t),
            crossing: lerp(self.crossing, other.crossing, t),
        }
    }
}

pub type PoseId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub id: PoseId,
    pub name: String,
    pub desc: String,
    pub stance: Stance,
    pub params: PoseParams,
}

impl Pose {
    pub fn new(id: PoseId, name: &str, desc: &str, params: PoseParams) -> Self {
        Self {
            id,
            name: name.to_string(),
            desc: desc.to_string(),
            stance: Stance::Derived,
            params,
        }
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    /// The state a transition into this pose ends at
    pub fn target_state(&self) -> PoseState {
        PoseState {
            params: self.params,
            crossing: self.stance.crossing_weight(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PoseTableError {
    #[error("Pose table is empty")]
    Empty,

    #[error("Duplicate pose id {0}")]
    DuplicateId(PoseId),

    #[error("Pose {0} has an empty name")]
    EmptyName(PoseId),
}

/// Immutable id -> pose mapping, built once at startup
#[derive(Debug, Clone)]
pub struct PoseTable {
    poses: BTreeMap<PoseId, Pose>,
}

impl PoseTable {
    /// Build a table, rejecting duplicate ids and empty names
    pub fn new(poses: Vec<Pose>) -> Result<Self, PoseTableError> {
        if poses.is_empty() {
            return Err(PoseTableError::Empty);
        }

        let mut map = BTreeMap::new();
        for pose in poses {
            if pose.name.trim().is_empty() {
                return Err(PoseTableError::EmptyName(pose.id));
            }
            let id = pose.id;
            if map.insert(id, pose).is_some() {
                return Err(PoseTableError::DuplicateId(id));
            }
        }

        Ok(Self { poses: map })
    }

    /// The six classical foot positions
    pub fn builtin() -> Result<Self, PoseTableError> {
        Self::new(vec![
            Pose::new(1, "I", "Heels together, turnout.", PoseParams::new(0.0, 45.0, 0.0)),
            Pose::new(
                2,
                "II",
                "Feet apart, turnout.",
                PoseParams::new(1.0, 45.0, 0.0).with_arm_lift(6.0),
            ),
            Pose::new(3, "III", "One foot in front (near).", PoseParams::new(0.1, 45.0, 0.6)),
            Pose::new(4, "IV", "One foot in front (apart).", PoseParams::new(0.4, 45.0, 0.9)),
            Pose::new(
                5,
                "V",
                "Feet crossed tightly.",
                PoseParams::new(0.0, 55.0, 0.8).with_arm_lift(14.0),
            )
            .with_stance(Stance::FixedCrossed),
            Pose::new(6, "VI", "Parallel feet.", PoseParams::new(0.3, 0.0, 0.0)),
        ])
    }

    pub fn get(&self, id: PoseId) -> Option<&Pose> {
        self.poses.get(&id)
    }

    #[allow(dead_code)] // Public API for id checks without borrowing the pose
    pub fn contains(&self, id: PoseId) -> bool {
        self.poses.contains_key(&id)
    }

    /// Pose with the lowest id
    pub fn first(&self) -> &Pose {
        // Construction guarantees at least one pose
        self.poses
            .values()
            .next()
            .expect("pose table is never empty")
    }

    /// Poses in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Pose> {
        self.poses.values()
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_six_positions() {
        let table = PoseTable::builtin().unwrap();
        assert_eq!(table.len(), 6);
        let ids: Vec<PoseId> = table.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(table.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn test_builtin_poses_pass_validation() {
        let table = PoseTable::builtin().unwrap();
        let rebuilt = PoseTable::new(table.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt.len(), table.len());

        let mut doubled: Vec<Pose> = table.iter().cloned().collect();
        doubled.push(table.first().clone());
        assert_eq!(PoseTable::new(doubled).unwrap_err(), PoseTableError::DuplicateId(1));
    }

    #[test]
    fn test_builtin_values() {
        let table = PoseTable::builtin().unwrap();
        let second = table.get(2).unwrap();
        assert_eq!(second.name, "II");
        assert_eq!(second.params.dist, 1.0);
        assert_eq!(second.params.turnout, 45.0);
        assert_eq!(second.stance, Stance::Derived);

        let fifth = table.get(5).unwrap();
        assert_eq!(fifth.name, "V");
        assert_eq!(fifth.stance, Stance::FixedCrossed);
        assert_eq!(fifth.target_state().crossing, 1.0);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let table = PoseTable::builtin().unwrap();
        assert!(table.get(999).is_none());
        assert!(table.get(0).is_none());
        assert!(!table.contains(7));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let poses = vec![
            Pose::new(1, "A", "", PoseParams::default()),
            Pose::new(1, "B", "", PoseParams::default()),
        ];
        assert_eq!(PoseTable::new(poses).unwrap_err(), PoseTableError::DuplicateId(1));
    }

    #[test]
    fn test_empty_name_rejected() {
        let poses = vec![Pose::new(3, "  ", "blank", PoseParams::default())];
        assert_eq!(PoseTable::new(poses).unwrap_err(), PoseTableError::EmptyName(3));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(PoseTable::new(Vec::new()).unwrap_err(), PoseTableError::Empty);
    }

    #[test]
    fn test_first_is_lowest_id() {
        let poses = vec![
            Pose::new(9, "Nine", "", PoseParams::default()),
            Pose::new(4, "Four", "", PoseParams::default()),
        ];
        let table = PoseTable::new(poses).unwrap();
        assert_eq!(table.first().id, 4);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = PoseParams::new(0.0, 45.0, 0.0);
        let b = PoseParams::new(1.0, 55.0, 0.8).with_knee_bend(10.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.dist - 0.5).abs() < 1e-6);
        assert!((mid.turnout - 50.0).abs() < 1e-6);
        assert!((mid.knee_bend - 5.0).abs() < 1e-6);
    }
}
