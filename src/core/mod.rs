pub mod chart;
pub mod export;
pub mod kinematics;
pub mod trajectory;
pub mod window;
