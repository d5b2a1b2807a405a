pub mod run;
pub mod topology;
