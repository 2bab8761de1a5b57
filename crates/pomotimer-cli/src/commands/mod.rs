pub mod resolve;
pub mod run;
