mod attribution;
mod printability;

pub use attribution::ClassAttributor;
pub use printability::PrintabilityIndex;
