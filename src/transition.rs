//! Transition driver: eases the live pose state toward a target pose.
//!
//! At most one transition is in flight. Starting a new one discards the old
//! one without completing it and starts from wherever the figure is now.
//!
//! The duration is measured in the `dt` handed to `tick`. The frame loop
//! caps that at `MAX_ANIMATION_DT`, so below 20 FPS a transition takes
//! longer than its nominal duration in wall-clock time.

use crate::pose::{Pose, PoseId, PoseState, PoseTable};
use crate::pose_apply::PoseSink;

/// Quadratic ease-in-out: slow start, fast middle, slow end
pub fn ease_quadratic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: PoseState,
    to: PoseState,
    elapsed: f32,
}

#[derive(Debug, Clone, Copy)]
enum DriverState {
    Idle,
    Transitioning(Transition),
}

/// What a call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing in flight; the sink was not touched
    Idle,
    /// An intermediate state was applied
    Stepped,
    /// The target was reached and applied; the driver is idle again
    Completed,
}

pub struct TransitionDriver {
    table: PoseTable,
    current: PoseState,
    state: DriverState,
    active_id: PoseId,
    /// Transition length in seconds
    duration: f32,
}

impl TransitionDriver {
    /// Start idle at `initial_id`, or at the first pose if that id is unknown
    pub fn new(table: PoseTable, initial_id: PoseId, duration: f32) -> Self {
        let initial = table.get(initial_id).unwrap_or_else(|| table.first());
        let current = initial.target_state();
        let active_id = initial.id;
        Self {
            table,
            current,
            state: DriverState::Idle,
            active_id,
            duration,
        }
    }

    pub fn table(&self) -> &PoseTable {
        &self.table
    }

    pub fn current(&self) -> &PoseState {
        &self.current
    }

    pub fn active_id(&self) -> PoseId {
        self.active_id
    }

    /// The pose most recently selected (the one being approached, if moving)
    pub fn active_pose(&self) -> &Pose {
        self.table
            .get(self.active_id)
            .unwrap_or_else(|| self.table.first())
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, DriverState::Transitioning(_))
    }

    /// Push the current state to the sink without advancing anything
    pub fn apply_current(&self, sink: &mut impl PoseSink) {
        sink.apply(&self.current);
    }

    /// Start easing toward pose `id`.
    ///
    /// Unknown ids are ignored and return `None`. Otherwise any in-flight
    /// transition is dropped, the new one starts from the current state and
    /// the selected pose is returned so the caller can update its labels.
    pub fn go_to_pose(&mut self, id: PoseId) -> Option<&Pose> {
        let target = self.table.get(id)?;

        if let DriverState::Transitioning(old) = self.state {
            tracing::debug!(
                "Pose {} preempted at {:.0}%",
                self.active_id,
                self.progress_of(&old) * 100.0
            );
        }

        self.state = DriverState::Transitioning(Transition {
            from: self.current,
            to: target.target_state(),
            elapsed: 0.0,
        });
        self.active_id = id;
        tracing::debug!("Transition to pose {} ({}) started", id, target.name);

        Some(target)
    }

    /// Advance the in-flight transition by `dt` seconds and apply the result
    pub fn tick(&mut self, dt: f32, sink: &mut impl PoseSink) -> TickOutcome {
        puffin::profile_function!();

        let DriverState::Transitioning(mut transition) = self.state else {
            return TickOutcome::Idle;
        };

        transition.elapsed += dt;
        let t = self.progress_of(&transition);

        if t >= 1.0 {
            self.current = transition.to;
            self.state = DriverState::Idle;
            sink.apply(&self.current);
            tracing::debug!("Transition to pose {} complete", self.active_id);
            TickOutcome::Completed
        } else {
            self.current = transition.from.lerp(&transition.to, ease_quadratic_in_out(t));
            self.state = DriverState::Transitioning(transition);
            sink.apply(&self.current);
            TickOutcome::Stepped
        }
    }

    /// Linear time fraction in [0, 1]
    fn progress_of(&self, transition: &Transition) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (transition.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Figure;
    use crate::pose_apply::PoseTransforms;
    use glam::Vec3;

    const DURATION: f32 = 0.9;
    const FRAME: f32 = 1.0 / 60.0;

    /// Records every state it is asked to apply
    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<PoseState>,
    }

    impl PoseSink for RecordingSink {
        fn apply(&mut self, state: &PoseState) {
            self.applied.push(*state);
        }
    }

    fn driver() -> TransitionDriver {
        TransitionDriver::new(PoseTable::builtin().unwrap(), 1, DURATION)
    }

    fn run_to_completion(driver: &mut TransitionDriver, sink: &mut impl PoseSink) {
        let mut frames = 0;
        while driver.tick(FRAME, sink) != TickOutcome::Completed {
            frames += 1;
            assert!(frames < 10_000, "transition never completed");
        }
    }

    #[test]
    fn test_duration_counts_capped_frame_time() {
        use crate::constants::MAX_ANIMATION_DT;

        let mut d = driver();
        let mut sink = RecordingSink::default();
        d.go_to_pose(2);

        // A 10 FPS run counts only the capped 0.05 s per frame
        for _ in 0..17 {
            let dt = 0.1_f32.min(MAX_ANIMATION_DT);
            assert_eq!(d.tick(dt, &mut sink), TickOutcome::Stepped);
        }
        assert!(d.is_transitioning());
        assert_eq!(d.tick(0.1, &mut sink), TickOutcome::Completed);
    }

    #[test]
    fn test_easing_endpoints_and_symmetry() {
        assert_eq!(ease_quadratic_in_out(0.0), 0.0);
        assert_eq!(ease_quadratic_in_out(1.0), 1.0);
        assert!((ease_quadratic_in_out(0.5) - 0.5).abs() < 1e-6);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let mirrored = 1.0 - ease_quadratic_in_out(1.0 - t);
            assert!((ease_quadratic_in_out(t) - mirrored).abs() < 1e-5);
        }
        assert!(ease_quadratic_in_out(0.25) < 0.25);
        assert!(ease_quadratic_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_starts_idle_at_initial_pose() {
        let d = driver();
        assert!(!d.is_transitioning());
        assert_eq!(d.active_id(), 1);
        assert_eq!(d.current().params, d.table().get(1).unwrap().params);
    }

    #[test]
    fn test_unknown_initial_pose_falls_back_to_first() {
        let d = TransitionDriver::new(PoseTable::builtin().unwrap(), 42, DURATION);
        assert_eq!(d.active_id(), 1);
    }

    #[test]
    fn test_idle_tick_does_not_apply() {
        let mut d = driver();
        let mut sink = RecordingSink::default();
        assert_eq!(d.tick(FRAME, &mut sink), TickOutcome::Idle);
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn test_every_pose_converges_exactly() {
        let table = PoseTable::builtin().unwrap();
        for pose in table.iter() {
            let mut d = driver();
            let mut sink = RecordingSink::default();
            assert!(d.go_to_pose(pose.id).is_some());
            run_to_completion(&mut d, &mut sink);

            assert!(!d.is_transitioning());
            assert_eq!(d.current().params, pose.params);
            assert_eq!(*sink.applied.last().unwrap(), pose.target_state());
        }
    }

    #[test]
    fn test_completes_after_duration() {
        let mut d = driver();
        let mut sink = RecordingSink::default();
        d.go_to_pose(2);
        assert_eq!(d.tick(0.5, &mut sink), TickOutcome::Stepped);
        assert_eq!(d.tick(0.5, &mut sink), TickOutcome::Completed);
        assert_eq!(sink.applied.len(), 2);
    }

    #[test]
    fn test_midpoint_is_eased() {
        let mut d = driver();
        let mut sink = RecordingSink::default();
        d.go_to_pose(2);
        // A quarter of the way in time is an eighth of the way in distance
        d.tick(DURATION * 0.25, &mut sink);
        assert!((d.current().params.dist - 0.125).abs() < 1e-5);
    }

    #[test]
    fn test_double_call_equals_single_call() {
        let mut once = driver();
        let mut twice = driver();
        let mut sink_a = RecordingSink::default();
        let mut sink_b = RecordingSink::default();

        once.go_to_pose(3);
        twice.go_to_pose(3);
        twice.go_to_pose(3);

        for _ in 0..20 {
            once.tick(FRAME, &mut sink_a);
            twice.tick(FRAME, &mut sink_b);
        }
        assert_eq!(sink_a.applied, sink_b.applied);
    }

    #[test]
    fn test_reselect_mid_flight_restarts_clock() {
        let mut d = driver();
        let mut sink = RecordingSink::default();
        d.go_to_pose(2);
        d.tick(DURATION * 0.5, &mut sink);
        d.go_to_pose(2);
        // Half the duration again is not enough to finish a restarted clock
        assert_eq!(d.tick(DURATION * 0.5, &mut sink), TickOutcome::Stepped);
        run_to_completion(&mut d, &mut sink);
        assert_eq!(d.current().params, d.table().get(2).unwrap().params);
    }

    #[test]
    fn test_preemption_converges_to_second_target() {
        let mut d = driver();
        let mut sink = RecordingSink::default();
        d.go_to_pose(2);
        d.tick(DURATION * 0.3, &mut sink);
        let mid = *d.current();
        d.go_to_pose(6);

        // Next step starts from the mid-flight values, not from pose 1 or 2
        d.tick(FRAME, &mut sink);
        let dist = d.current().params.dist;
        assert!((dist - mid.params.dist).abs() < 0.01);

        run_to_completion(&mut d, &mut sink);
        assert_eq!(d.active_id(), 6);
        assert_eq!(d.current().params, d.table().get(6).unwrap().params);
        assert_ne!(d.current().params, d.table().get(2).unwrap().params);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut d = driver();
        let mut sink = RecordingSink::default();
        d.go_to_pose(4);
        d.tick(FRAME, &mut sink);
        let before = *d.current();

        assert!(d.go_to_pose(999).is_none());
        assert_eq!(*d.current(), before);
        assert_eq!(d.active_id(), 4);
        assert!(d.is_transitioning());
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut d = TransitionDriver::new(PoseTable::builtin().unwrap(), 1, 0.0);
        let mut sink = RecordingSink::default();
        d.go_to_pose(4);
        assert_eq!(d.tick(FRAME, &mut sink), TickOutcome::Completed);
    }

    #[test]
    fn test_crossed_pose_lands_on_fixed_anchors() {
        let mut d = driver();
        let mut figure = Figure::new().unwrap();
        d.apply_current(&mut figure);
        d.go_to_pose(5);
        run_to_completion(&mut d, &mut figure);

        assert_eq!(figure.scene.center(figure.rig.left_leg), Some(Vec3::new(-0.1, 0.9, 0.42)));
        assert_eq!(figure.scene.center(figure.rig.right_leg), Some(Vec3::new(0.1, 0.9, -0.42)));
    }

    #[test]
    fn test_leaving_crossed_pose_has_no_snap() {
        let mut d = TransitionDriver::new(PoseTable::builtin().unwrap(), 5, DURATION);
        let mut sink = RecordingSink::default();
        d.go_to_pose(2);
        run_to_completion(&mut d, &mut sink);

        // Consecutive frames never jump further than a smooth step allows
        let anchors: Vec<Vec3> = sink
            .applied
            .iter()
            .map(|s| PoseTransforms::compute(s).left_leg_center)
            .collect();
        for pair in anchors.windows(2) {
            assert!((pair[1] - pair[0]).length() < 0.05, "jump {:?} -> {:?}", pair[0], pair[1]);
        }
        assert!((anchors.last().unwrap().x + 0.75).abs() < 1e-5);
    }
}
