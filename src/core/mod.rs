pub mod advisor;
pub mod energy;
pub mod kinematics;
pub mod params;
pub mod trajectory;
pub mod window;
