pub mod model;

pub use model::PickModel;
