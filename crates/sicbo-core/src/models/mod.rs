//! Request, response, and intermediate records.

pub mod features;
pub mod outcome;
pub mod pick;
pub mod request;
pub mod response;

pub use features::FeatureMatrix;
pub use outcome::Outcome;
pub use pick::Pick;
pub use request::HistoryRequest;
pub use response::PickResponse;
