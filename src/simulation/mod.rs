pub mod states;
pub mod params;
pub mod forces;
pub mod spawn;
pub mod integrator;
pub mod scenario;
pub mod surface;
