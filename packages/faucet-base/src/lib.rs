pub mod converters;
pub mod error;
pub mod utils;

pub mod faucet {
    pub mod msg;
    pub mod state;
    pub mod types;
}
