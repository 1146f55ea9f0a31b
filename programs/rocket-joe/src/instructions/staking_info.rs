use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::UpdateEmissionRate;
use crate::state::{RocketJoeStaking, StakerInfo};

#[derive(Accounts)]
pub struct PendingRJoe<'info> {
    #[account(
        seeds = [STAKING_SEED],
        bump = staking.bump,
    )]
    pub staking: Box<Account<'info, RocketJoeStaking>>,

    #[account(
        seeds = [STAKER_INFO_SEED, staker_info.user.as_ref()],
        bump = staker_info.bump,
    )]
    pub staker_info: Box<Account<'info, StakerInfo>>,
}

/// rJOE the staker would collect right now
pub fn pending_rjoe(ctx: Context<PendingRJoe>) -> Result<u64> {
    let current_time = Clock::get()?.unix_timestamp;
    ctx.accounts
        .staking
        .pending_rjoe(&ctx.accounts.staker_info, current_time)
}

#[derive(Accounts)]
pub struct UpdateEmission<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_SEED],
        bump = staking.bump,
        constraint = staking.owner == owner.key() @ RocketJoeError::Unauthorized,
    )]
    pub staking: Box<Account<'info, RocketJoeStaking>>,
}

/// Change the rJOE emission rate, accrued rewards keep the old rate
pub fn update_emission_rate(ctx: Context<UpdateEmission>, rjoe_per_sec: u64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    ctx.accounts
        .staking
        .update_emission_rate(rjoe_per_sec, current_time)?;

    emit!(UpdateEmissionRate {
        user: ctx.accounts.owner.key(),
        rjoe_per_sec,
    });

    msg!("rJOE per second set to {}", rjoe_per_sec);

    Ok(())
}
