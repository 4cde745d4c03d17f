// scene.rs — composes the full comparison frame: environment, two figures,
// and transient effects.
//
// Building a scene is pure: for a given (frame, sport, focus set) the result
// is bit-identical, which is what makes the animation loop-safe and the
// renderer testable without a window. Painting walks the built scene.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2};
use std::f32::consts::TAU;

use crate::clock::phase_of;
use crate::figure::{self, FigurePose, Highlight, Transform};
use crate::focus::{FocusArea, FocusSet};
use crate::kinematics::{angles, JointAngles, Variant};
use crate::sport::Sport;

/// Logical canvas resolution; everything below is laid out in this space.
pub const LOGICAL_SIZE: Vec2 = Vec2::new(800.0, 500.0);
/// Anchor of the flawed figure.
pub const LEFT_X: f32 = 200.0;
/// Anchor of the ideal figure.
pub const RIGHT_X: f32 = 600.0;
/// Foot line shared by both figures.
pub const BASE_Y: f32 = 420.0;
const GROUND_Y: f32 = 430.0;

const LABEL_RED: Color32 = Color32::from_rgb(220, 38, 38);
const LABEL_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

fn ball_orange() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 140, 0, 200)
}

fn prop_stroke() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 200, 220, 150)
}

/// One figure half of the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureDrawing {
    pub angles: JointAngles,
    pub pose: FigurePose,
    pub highlight: Highlight,
}

/// Sport-specific transient drawables, all positioned in logical space.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Basketball in flight; `ghost` adds the motion-blur echo.
    Ball { center: Pos2, ghost: bool },
    /// Red X over a shot that will miss.
    MissMark { center: Pos2 },
    /// Green arc over a shot that will drop.
    MadeMark { center: Pos2 },
    /// Soccer ball with its spinning pentagon pattern.
    SoccerBall { center: Pos2, spin: f32 },
    /// Horizontal power lines trailing the ideal kick.
    SpeedLines { x: f32, y: f32 },
    /// Ambient motion lines in the second half of the cycle.
    MotionTrail { y: f32 },
    /// Baseball bat hinged at the lead hand.
    Bat { pivot: Pos2, angle: f32, variant: Variant },
    /// Arm-angle arc shown on the ideal side when the arm is in focus.
    AngleGuide { center: Pos2, sweep: f32 },
}

/// Complete drawable description of one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub sport: Sport,
    pub frame: u64,
    pub progress: f32,
    pub caption: Option<String>,
    pub flawed: FigureDrawing,
    pub ideal: FigureDrawing,
    pub effects: Vec<Effect>,
}

impl Scene {
    /// Pure scene layout. A focus-set change shows up on the next build,
    /// never mid-frame.
    pub fn build(frame: u64, sport: Sport, focus: &FocusSet) -> Self {
        let progress = phase_of(frame, sport.cycle_len());

        let make = |variant| {
            let a = angles(sport, progress, variant);
            let x = match variant {
                Variant::Flawed => LEFT_X,
                Variant::Ideal => RIGHT_X,
            };
            FigureDrawing {
                angles: a,
                pose: FigurePose::solve(x, BASE_Y, &a),
                highlight: Highlight::for_variant(focus, variant),
            }
        };
        let flawed = make(Variant::Flawed);
        let ideal = make(Variant::Ideal);

        let mut effects = Vec::new();
        match sport {
            Sport::Basketball => {
                if progress > 0.7 {
                    let wrong = Pos2::new(
                        LEFT_X + 30.0 + (progress - 0.7) * 80.0,
                        BASE_Y - 150.0 - (progress - 0.7) * 200.0,
                    );
                    effects.push(Effect::Ball { center: wrong, ghost: false });
                    if progress > 0.85 {
                        effects.push(Effect::MissMark { center: wrong });
                    }
                    let right = Pos2::new(
                        RIGHT_X + 20.0 + (progress - 0.7) * 100.0,
                        BASE_Y - 180.0 - (progress - 0.7) * 250.0,
                    );
                    effects.push(Effect::Ball { center: right, ghost: true });
                    if progress > 0.85 {
                        effects.push(Effect::MadeMark { center: right });
                    }
                }
                if focus.contains(FocusArea::Arm) {
                    effects.push(Effect::AngleGuide {
                        center: Pos2::new(RIGHT_X, BASE_Y - 140.0),
                        sweep: ideal.angles.arm_angle,
                    });
                }
            }
            Sport::Soccer => {
                let travel = (progress - 0.5).max(0.0);
                effects.push(Effect::SoccerBall {
                    center: Pos2::new(LEFT_X + 50.0 + travel * 150.0, BASE_Y - 30.0),
                    spin: progress,
                });
                let ideal_x = RIGHT_X + 50.0 + travel * 300.0;
                effects.push(Effect::SoccerBall {
                    center: Pos2::new(ideal_x, BASE_Y - 30.0),
                    spin: progress * 2.0,
                });
                if progress > 0.5 {
                    effects.push(Effect::SpeedLines { x: ideal_x, y: BASE_Y - 30.0 });
                }
            }
            Sport::Baseball => {
                effects.push(Effect::Bat {
                    pivot: Pos2::new(LEFT_X + 25.0, BASE_Y - 120.0),
                    angle: flawed.angles.bat_angle,
                    variant: Variant::Flawed,
                });
                effects.push(Effect::Bat {
                    pivot: Pos2::new(RIGHT_X + 25.0, BASE_Y - 120.0),
                    angle: ideal.angles.bat_angle,
                    variant: Variant::Ideal,
                });
            }
            Sport::Generic => {}
        }
        // Ambient trails run on a fixed 90-frame rhythm on every sport.
        if frame % 90 > 45 {
            effects.push(Effect::MotionTrail {
                y: 200.0 + (frame as f32 * 0.1).sin() * 50.0,
            });
        }

        Scene {
            sport,
            frame,
            progress,
            caption: focus.caption(),
            flawed,
            ideal,
            effects,
        }
    }

    /// Draw the scene onto `rect`, logical space scaled to fit.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let t = Transform::fit(LOGICAL_SIZE, rect);
        background(painter, rect);
        self.paint_chrome(painter, &t);
        self.paint_environment(painter, &t);
        figure::paint(painter, &t, &self.flawed.pose, self.flawed.highlight, Variant::Flawed);
        figure::paint(painter, &t, &self.ideal.pose, self.ideal.highlight, Variant::Ideal);
        for effect in &self.effects {
            paint_effect(painter, &t, effect);
        }
    }

    fn paint_chrome(&self, painter: &Painter, t: &Transform) {
        painter.text(
            t.pt(Pos2::new(LEFT_X, 30.0)),
            Align2::CENTER_CENTER,
            "✗ Common Mistakes",
            FontId::proportional(t.len(18.0)),
            LABEL_RED,
        );
        painter.text(
            t.pt(Pos2::new(RIGHT_X, 30.0)),
            Align2::CENTER_CENTER,
            "✓ Correct Form",
            FontId::proportional(t.len(18.0)),
            LABEL_GREEN,
        );
        if let Some(caption) = &self.caption {
            painter.text(
                t.pt(Pos2::new(LOGICAL_SIZE.x / 2.0, 55.0)),
                Align2::CENTER_CENTER,
                caption,
                FontId::proportional(t.len(14.0)),
                Color32::from_gray(100),
            );
        }
    }

    fn paint_environment(&self, painter: &Painter, t: &Transform) {
        match self.sport {
            Sport::Basketball => {
                // Hoop next to the ideal figure, rim as a lower half-circle.
                stroke_arc(
                    painter,
                    t,
                    Pos2::new(720.0, 150.0),
                    35.0,
                    0.0,
                    180.0,
                    Stroke::new(t.len(2.0), Color32::from_rgba_unmultiplied(200, 200, 220, 100)),
                );
                painter.rect_filled(
                    Rect::from_min_size(t.pt(Pos2::new(685.0, 148.0)), Vec2::new(t.len(70.0), t.len(3.0))),
                    0.0,
                    Color32::from_rgba_unmultiplied(255, 100, 50, 150),
                );
            }
            Sport::Soccer => {
                painter.rect_stroke(
                    Rect::from_min_size(t.pt(Pos2::new(680.0, 200.0)), Vec2::new(t.len(100.0), t.len(60.0))),
                    0.0,
                    Stroke::new(t.len(2.0), prop_stroke()),
                    StrokeKind::Middle,
                );
            }
            Sport::Baseball | Sport::Generic => {}
        }
        painter.line_segment(
            [t.pt(Pos2::new(0.0, GROUND_Y)), t.pt(Pos2::new(LOGICAL_SIZE.x, GROUND_Y))],
            Stroke::new(t.len(2.0), Color32::from_rgba_unmultiplied(180, 180, 200, 100)),
        );
    }
}

fn background(painter: &Painter, rect: Rect) {
    let top = Color32::from_rgb(240, 248, 255);
    let bottom = Color32::from_rgb(230, 240, 255);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(mesh);
}

fn stroke_arc(
    painter: &Painter,
    t: &Transform,
    center: Pos2,
    radius: f32,
    start_deg: f32,
    end_deg: f32,
    stroke: Stroke,
) {
    const STEPS: usize = 24;
    let points = (0..=STEPS)
        .map(|i| {
            let a = (start_deg + (end_deg - start_deg) * i as f32 / STEPS as f32).to_radians();
            t.pt(center + Vec2::new(a.cos(), a.sin()) * radius)
        })
        .collect();
    painter.add(Shape::line(points, stroke));
}

fn paint_effect(painter: &Painter, t: &Transform, effect: &Effect) {
    match effect {
        Effect::Ball { center, ghost } => {
            if *ghost {
                painter.circle_filled(
                    t.pt(*center + Vec2::new(-5.0, 5.0)),
                    t.len(12.0),
                    Color32::from_rgba_unmultiplied(255, 140, 0, 50),
                );
            }
            painter.circle_filled(t.pt(*center), t.len(14.0), ball_orange());
        }
        Effect::MissMark { center } => {
            let stroke = Stroke::new(t.len(3.0), Color32::from_rgb(255, 0, 0));
            let c = *center;
            painter.line_segment(
                [t.pt(c + Vec2::new(-8.0, -8.0)), t.pt(c + Vec2::new(8.0, 8.0))],
                stroke,
            );
            painter.line_segment(
                [t.pt(c + Vec2::new(8.0, -8.0)), t.pt(c + Vec2::new(-8.0, 8.0))],
                stroke,
            );
        }
        Effect::MadeMark { center } => {
            stroke_arc(painter, t, *center, 10.0, 0.0, 270.0, Stroke::new(t.len(3.0), LABEL_GREEN));
        }
        Effect::SoccerBall { center, spin } => {
            painter.circle(
                t.pt(*center),
                t.len(16.0),
                Color32::WHITE,
                Stroke::new(t.len(2.0), Color32::BLACK),
            );
            for i in 0..5 {
                let a = spin * TAU + i as f32 / 5.0 * TAU;
                let wedge = vec![
                    t.pt(*center + Vec2::new(a.cos(), a.sin()) * 10.0),
                    t.pt(*center + Vec2::new((a + 0.4).cos(), (a + 0.4).sin()) * 10.0),
                    t.pt(*center),
                ];
                painter.add(Shape::convex_polygon(wedge, Color32::BLACK, Stroke::NONE));
            }
        }
        Effect::SpeedLines { x, y } => {
            let stroke = Stroke::new(t.len(3.0), Color32::from_rgba_unmultiplied(100, 150, 255, 100));
            for i in 0..4 {
                let off = i as f32 * 10.0;
                painter.line_segment(
                    [
                        t.pt(Pos2::new(x - 20.0 - off, *y)),
                        t.pt(Pos2::new(x - 35.0 - off, *y)),
                    ],
                    stroke,
                );
            }
        }
        Effect::MotionTrail { y } => {
            let stroke = Stroke::new(t.len(2.0), Color32::from_rgba_unmultiplied(100, 150, 255, 50));
            for i in 0..3 {
                let x = RIGHT_X + i as f32 * 15.0;
                painter.line_segment(
                    [t.pt(Pos2::new(x, *y)), t.pt(Pos2::new(x + 10.0, *y - 5.0))],
                    stroke,
                );
            }
        }
        Effect::Bat { pivot, angle, variant } => {
            let wood = match variant {
                Variant::Ideal => Color32::from_rgb(139, 69, 19),
                Variant::Flawed => Color32::from_rgb(100, 69, 19),
            };
            let tip = figure::rotate_about(*pivot + Vec2::new(0.0, -90.0), *pivot, *angle);
            let knob = figure::rotate_about(*pivot + Vec2::new(0.0, 5.0), *pivot, *angle);
            painter.line_segment([t.pt(*pivot), t.pt(tip)], Stroke::new(t.len(10.0), wood));
            painter.circle_filled(t.pt(knob), t.len(6.0), wood);
        }
        Effect::AngleGuide { center, sweep } => {
            stroke_arc(
                painter,
                t,
                *center,
                30.0,
                -90.0,
                sweep - 90.0,
                Stroke::new(t.len(2.0), LABEL_GREEN),
            );
            painter.text(
                t.pt(*center + Vec2::new(35.0, 10.0)),
                Align2::CENTER_CENTER,
                "90°",
                FontId::proportional(t.len(12.0)),
                LABEL_GREEN,
            );
        }
    }
}
