pub mod create_launch_event;
pub mod create_pair;
pub mod deposit;
pub mod deposit_joe;
pub mod emergency;
pub mod initialize_factory;
pub mod initialize_staking;
pub mod launch_event_info;
pub mod skim;
pub mod staking_info;
pub mod update_factory;
pub mod withdraw;
pub mod withdraw_incentives;
pub mod withdraw_joe;
pub mod withdraw_liquidity;

pub use create_launch_event::*;
pub use create_pair::*;
pub use deposit::*;
pub use deposit_joe::*;
pub use emergency::*;
pub use initialize_factory::*;
pub use initialize_staking::*;
pub use launch_event_info::*;
pub use skim::*;
pub use staking_info::*;
pub use update_factory::*;
pub use withdraw::*;
pub use withdraw_incentives::*;
pub use withdraw_joe::*;
pub use withdraw_liquidity::*;
