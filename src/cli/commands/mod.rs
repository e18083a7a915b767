pub mod serve;
pub mod todo;
