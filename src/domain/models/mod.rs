pub mod location;
pub mod object;

pub use location::BackendLocation;
pub use object::*;
