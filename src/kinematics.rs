// kinematics.rs — per-sport joint-angle curves for the two figures.
//
// Each sport maps phase progress to a JointAngles snapshot per variant. The
// curves are deterministic and continuous apart from the designed event
// thresholds (arm raise past 0.3, release past 0.7). The ideal variant always
// differs from the flawed one in the parameter that carries the sport's
// signature flaw, so a highlighted region corresponds to a real deficiency.

use std::f32::consts::TAU;

use crate::sport::Sport;

/// Which of the two side-by-side figures a parameter set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Flawed,
    Ideal,
}

/// Per-figure snapshot of angles and event flags, a pure function of
/// (progress, variant, sport). Angles are in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointAngles {
    pub arm_angle: f32,
    pub knee_angle: f32,
    pub elbow_out: f32,
    pub leg_angle: f32,
    pub leg_kick: bool,
    pub hip_rotation: f32,
    pub swing: bool,
    pub bat_angle: f32,
    pub arm_raised: bool,
    pub follow_through: f32,
    pub plant_foot: bool,
}

/// Linear remap of `v` from [a,b] to [c,d], unclamped.
pub fn remap(v: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    c + (d - c) * (v - a) / (b - a)
}

/// Joint angles for one figure at one phase position.
pub fn angles(sport: Sport, progress: f32, variant: Variant) -> JointAngles {
    match sport {
        Sport::Basketball => basketball(progress, variant),
        Sport::Soccer => soccer(progress, variant),
        Sport::Baseball => baseball(progress, variant),
        Sport::Generic => generic(progress, variant),
    }
}

/// Jump shot. Flawed: flat arc, elbow flared out, no knee drive. Ideal: full
/// −30→160° sweep, knee flexion peaking mid-cycle, long follow-through.
fn basketball(p: f32, variant: Variant) -> JointAngles {
    match variant {
        Variant::Flawed => JointAngles {
            arm_angle: remap(p, 0.0, 1.0, 20.0, 100.0),
            elbow_out: 60.0,
            arm_raised: p > 0.3,
            follow_through: if p > 0.7 { 20.0 } else { 0.0 },
            ..JointAngles::default()
        },
        Variant::Ideal => JointAngles {
            arm_angle: remap(p, 0.0, 1.0, -30.0, 160.0),
            knee_angle: if p < 0.5 {
                remap(p, 0.0, 0.5, 0.0, 35.0)
            } else {
                remap(p, 0.5, 1.0, 35.0, 10.0)
            },
            arm_raised: p > 0.3,
            follow_through: if p > 0.7 { 50.0 } else { 0.0 },
            ..JointAngles::default()
        },
    }
}

/// Instep kick. The kicking leg winds up over the first half of the cycle and
/// holds; only the ideal figure rotates the hips and plants the support foot.
fn soccer(p: f32, variant: Variant) -> JointAngles {
    let windup = p.min(0.5);
    match variant {
        Variant::Flawed => JointAngles {
            leg_kick: p < 0.5,
            leg_angle: remap(windup, 0.0, 0.5, 0.0, 60.0),
            ..JointAngles::default()
        },
        Variant::Ideal => JointAngles {
            leg_kick: p < 0.5,
            leg_angle: remap(windup, 0.0, 0.5, 0.0, 110.0),
            hip_rotation: remap(windup, 0.0, 0.5, 0.0, 25.0),
            plant_foot: true,
            ..JointAngles::default()
        },
    }
}

/// Bat swing across the whole cycle; the ideal swing drives the hips open to
/// 50° for visible power transfer, the flawed one is arms-only.
fn baseball(p: f32, variant: Variant) -> JointAngles {
    match variant {
        Variant::Flawed => JointAngles {
            swing: true,
            bat_angle: remap(p, 0.0, 1.0, -100.0, 30.0),
            ..JointAngles::default()
        },
        Variant::Ideal => JointAngles {
            swing: true,
            bat_angle: remap(p, 0.0, 1.0, -120.0, 60.0),
            hip_rotation: remap(p, 0.0, 1.0, 0.0, 50.0),
            ..JointAngles::default()
        },
    }
}

/// Fallback sway for unrecognized sports: low-amplitude sinusoid, smaller on
/// the flawed side, with a leg component only on the ideal side.
fn generic(p: f32, variant: Variant) -> JointAngles {
    let t = p * TAU;
    match variant {
        Variant::Flawed => JointAngles {
            arm_angle: t.sin() * 20.0,
            ..JointAngles::default()
        },
        Variant::Ideal => JointAngles {
            arm_angle: t.sin() * 40.0,
            knee_angle: t.cos() * 25.0,
            ..JointAngles::default()
        },
    }
}
