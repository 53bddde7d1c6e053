//! Runtime data for binalg programs: values and the variable environment

mod environment;
mod value;

pub use environment::Environment;
pub use value::Value;
