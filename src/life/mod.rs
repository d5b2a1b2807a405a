mod rule;
mod step;

pub use rule::Rule;
pub use step::{apply, step_once, step_with};
#[cfg(feature = "parallel")]
pub use step::par_step_with;
