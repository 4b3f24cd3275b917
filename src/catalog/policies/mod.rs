mod variable_resolution;

pub use variable_resolution::VariableResolution;
