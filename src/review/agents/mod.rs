pub mod retrieval;
pub mod synthesis;
