pub mod environment;
pub mod guidance;
pub mod mission;
pub mod propulsion;
pub mod rocket;
