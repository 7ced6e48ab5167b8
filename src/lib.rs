pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Particle, Field, Trail, Rgb, NVec2};
pub use simulation::params::{Parameters, Bounds, FieldInputs};
pub use simulation::forces::GravityWell;
pub use simulation::spawn::Spawner;
pub use simulation::integrator::advance;
pub use simulation::scenario::Scenario;
pub use simulation::surface::Surface;

pub use configuration::config::{WindowConfig, FieldConfig, ParametersConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;
