//! FormViz turns free-text coaching commentary about a recorded skill attempt
//! into a quality score, a short list of corrections, and a continuously
//! animated side-by-side comparison of flawed versus ideal body mechanics.

pub mod analysis;
pub mod app;
pub mod clock;
pub mod figure;
pub mod focus;
pub mod kinematics;
pub mod logging;
pub mod scene;
pub mod sport;
pub mod viz;
