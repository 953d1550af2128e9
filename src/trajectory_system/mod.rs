pub mod apogee;
pub mod ascent;
pub mod kinematics;
