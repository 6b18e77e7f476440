//! Wheel layout engine.
//!
//! The wheel is an explicit [`WheelState`] value; every selection change runs exactly one
//! layout pass over it and produces a new value. A pass does two separate things:
//!
//! * rotates the global `offset` to the target orientation along the shorter way round,
//! * re-homes each slot's raw angle to the equivalent angle (mod 360) nearest to where
//!   that slot was last drawn, so no slot ever animates more than half a turn even when
//!   `offset` itself wraps past 0/360.
//!
//! Nothing here touches the DOM; the renderer turns [`SlotPose`]s into CSS.

use std::rc::Rc;
use yew::Reducible;

use super::input::WheelInput;
use crate::config::WheelConfig;

pub const FULL_TURN: f64 = 360.0;
const HALF_TURN: f64 = 180.0;

/// Normalizes any finite angle into `[0, 360)`.
pub fn normalize(deg: f64) -> f64 {
    let r = deg.rem_euclid(FULL_TURN);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if r >= FULL_TURN { 0.0 } else { r }
}

/// Signed rotation in `[-180, 180)` taking `from` to an angle congruent to `to`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    (to - from + FULL_TURN + HALF_TURN).rem_euclid(FULL_TURN) - HALF_TURN
}

/// Shifts `raw` by whole turns until `raw - prev` lies in `(-180, 180]`.
pub fn nearest_equivalent(raw: f64, prev: f64) -> f64 {
    let mut angle = raw;
    while angle - prev > HALF_TURN {
        angle -= FULL_TURN;
    }
    while angle - prev <= -HALF_TURN {
        angle += FULL_TURN;
    }
    angle
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotPose {
    /// Continuity-corrected rotation in degrees; may lie outside `[0, 360)`.
    pub angle: f64,
    pub scale: f64,
    pub selected: bool,
}

/// Everything needed to place one slot: rotate out, push along the radius,
/// rotate back so the sprite stays upright, then scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransform {
    pub angle: f64,
    pub radius_px: f64,
    pub scale: f64,
}

impl SlotTransform {
    pub fn from_pose(pose: &SlotPose, radius_px: f64) -> Self {
        Self {
            angle: pose.angle,
            radius_px,
            scale: pose.scale,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rotate({}deg) translate({}px) rotate({}deg) scale({})",
            self.angle, self.radius_px, -self.angle, self.scale
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelState {
    pub count: usize,
    pub selected: usize,
    /// Global rotation baseline in `[0, 360)`.
    pub offset: f64,
    /// Last emitted angle per slot; empty until the first pass.
    pub prev_angles: Vec<f64>,
    pub poses: Vec<SlotPose>,
    /// Signed rotation applied to `offset` by the latest pass.
    pub last_step: f64,
    /// Number of layout passes run so far.
    pub passes: u64,
    pub config: WheelConfig,
}

impl WheelState {
    pub fn new(count: usize, config: WheelConfig) -> Self {
        assert!(count > 0, "wheel needs at least one slot");
        Self {
            count,
            selected: 0,
            offset: 0.0,
            prev_angles: Vec::new(),
            poses: Vec::new(),
            last_step: 0.0,
            passes: 0,
            config,
        }
    }

    pub fn angle_step(&self) -> f64 {
        FULL_TURN / self.count as f64
    }

    /// One layout pass at the current selection.
    pub fn layout(mut self) -> Self {
        assert!(
            self.selected < self.count,
            "selection {} outside wheel of {}",
            self.selected,
            self.count
        );
        let step = self.angle_step();
        let target = self.selected as f64 * step;
        let delta = shortest_delta(self.offset, target);
        // offset + delta is congruent to target, so store the exact target
        self.offset = normalize(target);
        self.last_step = delta;

        let start = self.config.start_angle_deg;
        let mut angles = Vec::with_capacity(self.count);
        let mut poses = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let raw = start + i as f64 * step - self.offset;
            let prev = self.prev_angles.get(i).copied().unwrap_or(raw);
            let angle = nearest_equivalent(raw, prev);
            let selected = i == self.selected;
            angles.push(angle);
            poses.push(SlotPose {
                angle,
                scale: if selected { self.config.selected_scale } else { 1.0 },
                selected,
            });
        }
        self.prev_angles = angles;
        self.poses = poses;
        self.passes += 1;
        self
    }

    /// Applies one input and runs exactly one layout pass.
    pub fn apply(self, input: WheelInput) -> Self {
        let selected = input.next_index(self.selected, self.count);
        Self { selected, ..self }.layout()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    Input(WheelInput),
    /// Re-run the layout at the current selection.
    Relayout,
}

impl Reducible for WheelState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = (*self).clone();
        let new = match action {
            WheelAction::Input(input) => current.apply(input),
            WheelAction::Relayout => current.layout(),
        };
        log::debug!(
            "layout pass {}: {:?} -> selected={} offset={:.2} step={:+.2}",
            new.passes,
            action,
            new.selected,
            new.offset,
            new.last_step
        );
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(count: usize) -> WheelState {
        WheelState::new(count, WheelConfig::default()).layout()
    }

    // Deterministic input sequence mixing arrows and clicks.
    fn inputs(count: usize, len: usize) -> Vec<WheelInput> {
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        (0..len)
            .map(|_| {
                seed = seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let r = (seed >> 33) as usize;
                match r % 3 {
                    0 => WheelInput::Left,
                    1 => WheelInput::Right,
                    _ => WheelInput::Select((r / 3) % count),
                }
            })
            .collect()
    }

    #[test]
    fn delta_stays_within_half_turn() {
        assert_eq!(shortest_delta(0.0, 90.0), 90.0);
        assert_eq!(shortest_delta(0.0, 270.0), -90.0);
        assert_eq!(shortest_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_delta(10.0, 350.0), -20.0);
        assert_eq!(shortest_delta(0.0, 180.0), -180.0);
        assert_eq!(shortest_delta(45.0, 45.0), 0.0);
    }

    #[test]
    fn nearest_equivalent_rehomes_by_whole_turns() {
        assert_eq!(nearest_equivalent(-90.0, -90.0), -90.0);
        assert_eq!(nearest_equivalent(260.0, -90.0), -100.0);
        assert_eq!(nearest_equivalent(-460.0, -90.0), -100.0);
        assert_eq!(nearest_equivalent(90.0, -90.0), 90.0);
        assert_eq!(nearest_equivalent(-270.0, -90.0), 90.0);
    }

    #[test]
    fn normalize_lands_in_range() {
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(-30.0), 330.0);
        assert_eq!(normalize(725.0), 5.0);
        let tiny = normalize(-1e-300);
        assert!((0.0..FULL_TURN).contains(&tiny));
    }

    #[test]
    fn first_pass_places_index_zero_at_start_angle() {
        let w = wheel(4);
        assert_eq!(w.prev_angles, vec![-90.0, 0.0, 90.0, 180.0]);
        assert_eq!(w.offset, 0.0);
        assert_eq!(w.passes, 1);
    }

    #[test]
    fn exactly_one_slot_is_enlarged() {
        for count in 1..=12 {
            for idx in 0..count {
                let w = wheel(count).apply(WheelInput::Select(idx));
                assert_eq!(w.poses.len(), count);
                let big: Vec<_> = w
                    .poses
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.scale == 1.5)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(big, vec![idx], "count={count}");
                assert!(w.poses.iter().filter(|p| !p.selected).all(|p| p.scale == 1.0));
                assert!(w.poses[idx].selected);
            }
        }
    }

    #[test]
    fn offset_never_steps_more_than_half_turn() {
        for count in [2, 3, 7, 11] {
            let mut w = wheel(count);
            for input in inputs(count, 400) {
                w = w.apply(input);
                assert!(w.last_step.abs() <= HALF_TURN, "step {}", w.last_step);
                assert!((0.0..FULL_TURN).contains(&w.offset));
                assert!(w.offset.is_finite());
            }
        }
    }

    #[test]
    fn slots_never_jump_more_than_half_turn() {
        for count in [2, 3, 5, 11] {
            let mut w = wheel(count);
            for input in inputs(count, 400) {
                let before = w.prev_angles.clone();
                w = w.apply(input);
                assert_eq!(w.prev_angles.len(), count);
                for (new, old) in w.prev_angles.iter().zip(&before) {
                    assert!((new - old).abs() <= HALF_TURN, "{old} -> {new}");
                }
            }
        }
    }

    #[test]
    fn wrapping_from_last_to_first_takes_short_way() {
        let w = wheel(11).apply(WheelInput::Select(10));
        let before = w.prev_angles.clone();
        let w = w.apply(WheelInput::Right);
        assert_eq!(w.selected, 0);
        assert!((w.last_step - 360.0 / 11.0).abs() < 1e-9);
        for (new, old) in w.prev_angles.iter().zip(&before) {
            assert!((old - new - 360.0 / 11.0).abs() < 1e-9);
        }
    }

    #[test]
    fn repeated_relayout_is_idempotent() {
        let mut w = wheel(11);
        for input in inputs(11, 50) {
            w = w.apply(input);
            let again = w.clone().layout();
            assert_eq!(again.poses, w.poses);
            assert_eq!(again.offset, w.offset);
            assert_eq!(again.last_step, 0.0);
        }
    }

    #[test]
    fn click_runs_one_pass_and_selects() {
        let w = wheel(11).apply(WheelInput::Select(4));
        for k in 0..11 {
            let next = w.clone().apply(WheelInput::Select(k));
            assert_eq!(next.selected, k);
            assert_eq!(next.passes, w.passes + 1);
        }
    }

    #[test]
    fn single_body_wheel_is_stable() {
        let mut w = wheel(1);
        for input in [WheelInput::Left, WheelInput::Right, WheelInput::Select(0)] {
            w = w.apply(input);
            assert_eq!(w.selected, 0);
            assert_eq!(w.last_step, 0.0);
            assert_eq!(w.offset, 0.0);
            assert_eq!(w.prev_angles, vec![-90.0]);
            assert_eq!(w.poses[0].scale, 1.5);
        }
    }

    #[test]
    fn reducer_dispatch_runs_a_pass() {
        let w = Rc::new(wheel(3));
        let w = w.reduce(WheelAction::Input(WheelInput::Left));
        assert_eq!(w.selected, 2);
        let w = w.reduce(WheelAction::Relayout);
        assert_eq!(w.selected, 2);
        assert_eq!(w.passes, 3);
    }

    #[test]
    fn transform_css_counter_rotates() {
        let t = SlotTransform::from_pose(
            &SlotPose {
                angle: 30.0,
                scale: 1.5,
                selected: true,
            },
            200.0,
        );
        assert_eq!(
            t.css(),
            "rotate(30deg) translate(200px) rotate(-30deg) scale(1.5)"
        );
    }

    #[test]
    #[should_panic]
    fn out_of_range_selection_fails_fast() {
        let mut w = wheel(3);
        w.selected = 3;
        let _ = w.layout();
    }
}
