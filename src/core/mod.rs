pub mod absence;
pub mod del;
pub mod edit;
pub mod filter;
pub mod punch;
pub mod sequencer;
