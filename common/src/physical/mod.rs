mod temperature;

pub use temperature::*;
