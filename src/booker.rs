mod booker;

pub use booker::{Booker, first_fit, first_fits};
