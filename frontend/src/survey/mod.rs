pub mod prediction;
pub mod results;
pub mod view;
pub mod wizard;
