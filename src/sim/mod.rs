pub mod event;
pub mod layout;
pub mod mutate;
pub mod stats;
pub mod turn;
pub mod world;
