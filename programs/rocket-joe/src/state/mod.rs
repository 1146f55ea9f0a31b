pub mod factory;
pub mod launch_event;
pub mod staker_info;
pub mod staking;
pub mod user_allocation;

pub use factory::*;
pub use launch_event::*;
pub use staker_info::*;
pub use staking::*;
pub use user_allocation::*;
