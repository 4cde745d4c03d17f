// figure.rs — one humanoid stick figure: a pure joint solver plus a painter.
//
// Geometry lives in the 800×500 logical space; `Transform` maps it onto the
// allocated canvas rect at paint time. Angles follow the screen convention
// (y down, positive rotation clockwise).

use egui::{Color32, Painter, Pos2, Stroke, Vec2};
use egui::epaint::EllipseShape;

use crate::focus::{FocusArea, FocusSet};
use crate::kinematics::{JointAngles, Variant};

pub const FLAWED_BODY: Color32 = Color32::from_rgb(255, 100, 100);
pub const IDEAL_BODY: Color32 = Color32::from_rgb(80, 180, 255);
pub const HIGHLIGHT: Color32 = Color32::from_rgb(255, 220, 50);
pub const PLANT_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

/// Uniform scale-to-fit mapping from logical scene space onto a canvas rect.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    origin: Pos2,
    scale: f32,
}

impl Transform {
    pub fn fit(logical: Vec2, target: egui::Rect) -> Self {
        let scale = (target.width() / logical.x).min(target.height() / logical.y);
        let size = logical * scale;
        let origin = Pos2::new(
            target.center().x - size.x / 2.0,
            target.center().y - size.y / 2.0,
        );
        Self { origin, scale }
    }

    pub fn pt(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.scale
    }

    pub fn len(&self, v: f32) -> f32 {
        v * self.scale
    }
}

/// Rotate `p` around `pivot` by `deg` degrees, clockwise on screen.
pub fn rotate_about(p: Pos2, pivot: Pos2, deg: f32) -> Pos2 {
    pivot + rotate_vec(p - pivot, deg)
}

fn rotate_vec(v: Vec2, deg: f32) -> Vec2 {
    let (s, c) = deg.to_radians().sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Which regions of one figure get emphasis styling. Only the flawed figure
/// is ever highlighted; it models what to fix. Follow-through feedback lands
/// on the arm region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    pub arm: bool,
    pub legs: bool,
    pub feet: bool,
    pub posture: bool,
    pub hips: bool,
}

impl Highlight {
    pub fn for_variant(focus: &FocusSet, variant: Variant) -> Self {
        if variant == Variant::Ideal {
            return Self::default();
        }
        Self {
            arm: focus.contains(FocusArea::Arm) || focus.contains(FocusArea::FollowThrough),
            legs: focus.contains(FocusArea::Legs),
            feet: focus.contains(FocusArea::Feet),
            posture: focus.contains(FocusArea::Posture),
            hips: focus.contains(FocusArea::Hips),
        }
    }

    pub fn any(&self) -> bool {
        self.arm || self.legs || self.feet || self.posture || self.hips
    }
}

/// Every segment endpoint of one figure, solved from a joint-angle snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FigurePose {
    pub shadow: Pos2,
    pub head: Pos2,
    pub eye_left: Pos2,
    pub eye_right: Pos2,
    pub torso_top: Pos2,
    pub torso_bottom: Pos2,
    pub hip_left: Pos2,
    pub hip_right: Pos2,
    pub shoulder: Pos2,
    pub left_elbow: Pos2,
    pub left_hand: Pos2,
    pub right_elbow: Pos2,
    pub right_hand: Pos2,
    pub leg_pivot: Pos2,
    pub left_leg_end: Pos2,
    pub right_leg_end: Pos2,
    pub foot_left: Pos2,
    pub foot_right: Pos2,
    pub plant_foot: bool,
}

const UPPER_ARM: f32 = 55.0;
const FOREARM: f32 = 45.0;

impl FigurePose {
    /// Pure solver: anchor is the foot line; `y` decreases upward.
    pub fn solve(x: f32, y: f32, a: &JointAngles) -> Self {
        let hip_pivot = Pos2::new(x, y - 80.0);
        let rot = |p: Pos2| rotate_about(p, hip_pivot, a.hip_rotation);

        let shoulder = Pos2::new(x, y - 140.0);
        // Left arm mirrors right; elbow flare pushes the two apart.
        let left_angle = a.arm_angle + a.elbow_out;
        let right_angle = if a.arm_raised {
            -150.0 + a.follow_through
        } else {
            a.arm_angle - a.elbow_out
        };
        let left_elbow = shoulder + rotate_vec(Vec2::new(-UPPER_ARM, 0.0), left_angle);
        let left_hand = left_elbow + rotate_vec(Vec2::new(-FOREARM, 0.0), left_angle - 30.0);
        let right_elbow = shoulder + rotate_vec(Vec2::new(UPPER_ARM, 0.0), right_angle);
        let right_hand = right_elbow
            + rotate_vec(
                Vec2::new(FOREARM, 0.0),
                right_angle + 30.0 + a.follow_through / 2.0,
            );

        let left_leg_angle = if a.leg_kick { -a.leg_angle } else { 0.0 };
        let right_leg_angle = if a.leg_kick { a.leg_angle } else { a.knee_angle };
        let left_leg_end = hip_pivot + rotate_vec(Vec2::new(-25.0, 85.0), left_leg_angle);
        let right_leg_end = hip_pivot + rotate_vec(Vec2::new(25.0, 85.0), right_leg_angle);

        Self {
            shadow: Pos2::new(x, y + 5.0),
            head: rot(Pos2::new(x, y - 180.0)),
            eye_left: rot(Pos2::new(x - 8.0, y - 185.0)),
            eye_right: rot(Pos2::new(x + 8.0, y - 185.0)),
            torso_top: rot(Pos2::new(x, y - 160.0)),
            torso_bottom: rot(hip_pivot),
            hip_left: rot(Pos2::new(x - 20.0, y - 80.0)),
            hip_right: rot(Pos2::new(x + 20.0, y - 80.0)),
            shoulder,
            left_elbow,
            left_hand,
            right_elbow,
            right_hand,
            leg_pivot: hip_pivot,
            left_leg_end,
            right_leg_end,
            foot_left: Pos2::new(x - 25.0, y),
            foot_right: Pos2::new(x + 25.0, y),
            plant_foot: a.plant_foot,
        }
    }
}

/// Stateless draw of one figure. Never mutates the pose, highlight flags, or
/// any shared entity; called twice per frame, once per variant.
pub fn paint(painter: &Painter, t: &Transform, pose: &FigurePose, hl: Highlight, variant: Variant) {
    let body = match variant {
        Variant::Flawed => FLAWED_BODY,
        Variant::Ideal => IDEAL_BODY,
    };
    let body_fill = Color32::from_rgba_unmultiplied(body.r(), body.g(), body.b(), 200);
    let base_w = if variant == Variant::Ideal { 5.0 } else { 4.0 };

    let seg = |a: Pos2, b: Pos2, w: f32, col: Color32| {
        painter.line_segment([t.pt(a), t.pt(b)], Stroke::new(t.len(w), col));
    };
    let ellipse = |center: Pos2, radius: Vec2, fill: Color32, stroke: Stroke| {
        painter.add(EllipseShape {
            center: t.pt(center),
            radius: radius * t.len(1.0),
            fill,
            stroke,
        });
    };

    // Ground shadow
    ellipse(
        pose.shadow,
        Vec2::new(40.0, 7.5),
        Color32::from_rgba_unmultiplied(0, 0, 0, 30),
        Stroke::NONE,
    );

    // Head and eyes
    painter.circle(
        t.pt(pose.head),
        t.len(22.5),
        body_fill,
        Stroke::new(t.len(3.0), Color32::BLACK),
    );
    painter.circle_filled(t.pt(pose.eye_left), t.len(2.5), Color32::BLACK);
    painter.circle_filled(t.pt(pose.eye_right), t.len(2.5), Color32::BLACK);

    // Torso; the spine stroke is black unless posture is flagged.
    let (torso_col, torso_w) = if hl.posture {
        (HIGHLIGHT, 8.0)
    } else {
        (Color32::BLACK, base_w)
    };
    seg(pose.torso_top, pose.torso_bottom, torso_w, torso_col);

    // Hip bar, rotated with the torso group.
    let (hip_col, hip_w) = if hl.hips { (HIGHLIGHT, 8.0) } else { (body, 6.0) };
    seg(pose.hip_left, pose.hip_right, hip_w, hip_col);

    // Arms
    let (arm_col, arm_w) = if hl.arm { (HIGHLIGHT, 8.0) } else { (body, base_w) };
    seg(pose.shoulder, pose.left_elbow, arm_w, arm_col);
    seg(pose.left_elbow, pose.left_hand, arm_w, arm_col);
    seg(pose.shoulder, pose.right_elbow, arm_w, arm_col);
    seg(pose.right_elbow, pose.right_hand, arm_w, arm_col);
    for joint in [pose.left_elbow, pose.right_elbow] {
        painter.circle_filled(t.pt(joint), t.len(7.5), body_fill);
    }
    for hand in [pose.left_hand, pose.right_hand] {
        painter.circle_filled(t.pt(hand), t.len(6.0), body_fill);
    }

    // Legs
    let (leg_col, leg_w) = if hl.legs { (HIGHLIGHT, 8.0) } else { (body, base_w) };
    seg(pose.leg_pivot, pose.left_leg_end, leg_w, leg_col);
    seg(pose.leg_pivot, pose.right_leg_end, leg_w, leg_col);

    // Feet; the left foot doubles as the plant foot on the ideal figure.
    let (foot_fill, foot_stroke) = if hl.feet {
        (HIGHLIGHT, Stroke::new(t.len(5.0), HIGHLIGHT))
    } else {
        (body, Stroke::new(t.len(3.0), Color32::BLACK))
    };
    let left_fill = if pose.plant_foot && variant == Variant::Ideal {
        PLANT_GREEN
    } else {
        foot_fill
    };
    let left_stroke = if pose.plant_foot && variant == Variant::Ideal {
        Stroke::new(t.len(3.0), PLANT_GREEN)
    } else {
        foot_stroke
    };
    ellipse(pose.foot_left, Vec2::new(10.0, 5.0), left_fill, left_stroke);
    ellipse(pose.foot_right, Vec2::new(10.0, 5.0), foot_fill, foot_stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{angles, Variant};
    use crate::sport::Sport;

    #[test]
    fn solver_is_deterministic() {
        let a = angles(Sport::Basketball, 0.4, Variant::Ideal);
        assert_eq!(FigurePose::solve(200.0, 420.0, &a), FigurePose::solve(200.0, 420.0, &a));
    }

    #[test]
    fn hip_rotation_moves_the_torso_group() {
        let neutral = FigurePose::solve(200.0, 420.0, &JointAngles::default());
        let rotated = FigurePose::solve(
            200.0,
            420.0,
            &JointAngles {
                hip_rotation: 30.0,
                ..JointAngles::default()
            },
        );
        assert_ne!(neutral.head, rotated.head);
        assert_ne!(neutral.hip_left, rotated.hip_left);
        // The legs hang from the unrotated pivot.
        assert_eq!(neutral.left_leg_end, rotated.left_leg_end);
    }

    #[test]
    fn knee_angle_moves_only_the_right_leg() {
        let neutral = FigurePose::solve(200.0, 420.0, &JointAngles::default());
        let bent = FigurePose::solve(
            200.0,
            420.0,
            &JointAngles {
                knee_angle: 35.0,
                ..JointAngles::default()
            },
        );
        assert_eq!(neutral.left_leg_end, bent.left_leg_end);
        assert_ne!(neutral.right_leg_end, bent.right_leg_end);
    }

    #[test]
    fn kick_swings_both_legs_apart() {
        let kick = FigurePose::solve(
            600.0,
            420.0,
            &JointAngles {
                leg_kick: true,
                leg_angle: 110.0,
                ..JointAngles::default()
            },
        );
        let neutral = FigurePose::solve(600.0, 420.0, &JointAngles::default());
        assert_ne!(kick.left_leg_end, neutral.left_leg_end);
        assert_ne!(kick.right_leg_end, neutral.right_leg_end);
    }

    #[test]
    fn highlight_never_applies_to_ideal() {
        let focus = FocusSet::classify(&["bend the knee, straighten your back".to_string()]);
        assert!(Highlight::for_variant(&focus, Variant::Flawed).any());
        assert!(!Highlight::for_variant(&focus, Variant::Ideal).any());
    }

    #[test]
    fn follow_through_maps_onto_arm_region() {
        let focus = FocusSet::classify(&["finish with full extension".to_string()]);
        let hl = Highlight::for_variant(&focus, Variant::Flawed);
        assert!(hl.arm);
        assert!(!hl.legs);
    }

    #[test]
    fn rotation_is_clockwise_in_screen_space() {
        let p = rotate_about(Pos2::new(1.0, 0.0), Pos2::ZERO, 90.0);
        assert!((p.x - 0.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }
}
