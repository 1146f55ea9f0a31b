use anchor_lang::prelude::*;

use crate::constants::{LAUNCH_EVENT_SEED, USER_ALLOCATION_SEED};
use crate::state::{LaunchEvent, LaunchEventInfo, UserAllocation, UserAllocationInfo};

#[derive(Accounts)]
pub struct GetLaunchEventInfo<'info> {
    #[account(
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,
}

/// Read-only snapshot of a launch event, returned through return data
pub fn get_launch_event_info(ctx: Context<GetLaunchEventInfo>) -> Result<LaunchEventInfo> {
    let clock = Clock::get()?;
    let launch_event = &ctx.accounts.launch_event;

    Ok(launch_event.info(launch_event.key(), clock.unix_timestamp))
}

#[derive(Accounts)]
pub struct GetUserAllocation<'info> {
    #[account(
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

    #[account(
        seeds = [USER_ALLOCATION_SEED, launch_event.key().as_ref(), user_allocation.user.as_ref()],
        bump = user_allocation.bump,
    )]
    pub user_allocation: Box<Account<'info, UserAllocation>>,
}

/// A participant's deposit and what it can still claim
pub fn get_user_allocation(ctx: Context<GetUserAllocation>) -> Result<UserAllocationInfo> {
    let launch_event = &ctx.accounts.launch_event;

    launch_event.user_allocation_info(launch_event.key(), &ctx.accounts.user_allocation)
}
