#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{LaunchEventConfig, LaunchEventInfo, UserAllocationInfo};

declare_id!("7E22dUYERWbyaqGDTKeU7NfYPRnBuAaVULXJgafxsBHq");

#[program]
pub mod rocket_joe {
    use super::*;

    // ===== Factory =====

    /// Initialize the factory singleton
    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        params: InitializeFactoryParams,
    ) -> Result<()> {
        instructions::initialize_factory(ctx, params)
    }

    /// Create and fund a launch event for a token
    pub fn create_rj_launch_event(
        ctx: Context<CreateLaunchEvent>,
        params: LaunchEventConfig,
    ) -> Result<()> {
        instructions::create_launch_event(ctx, params)
    }

    /// Update factory configuration (owner only)
    pub fn update_factory(ctx: Context<UpdateFactory>, params: UpdateFactoryParams) -> Result<()> {
        instructions::update_factory(ctx, params)
    }

    /// Set the default duration of phase one or two (owner only)
    pub fn set_phase_duration(ctx: Context<UpdateFactory>, phase: u8, duration: i64) -> Result<()> {
        instructions::set_phase_duration(ctx, phase, duration)
    }

    /// Set the default no-fee window of phase one (owner only)
    pub fn set_phase_one_no_fee_duration(ctx: Context<UpdateFactory>, duration: i64) -> Result<()> {
        instructions::set_phase_one_no_fee_duration(ctx, duration)
    }

    // ===== Launch event =====

    pub fn deposit_sol(ctx: Context<Participate>, amount: u64) -> Result<()> {
        instructions::deposit_sol(ctx, amount)
    }

    pub fn deposit_wsol(ctx: Context<Participate>, amount: u64) -> Result<()> {
        instructions::deposit_wsol(ctx, amount)
    }

    /// Withdraw during phase one or two, minus the penalty
    pub fn withdraw(ctx: Context<WithdrawWsol>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Stop a launch event (factory owner only)
    pub fn allow_emergency_withdraw(ctx: Context<AllowEmergencyWithdraw>) -> Result<()> {
        instructions::allow_emergency_withdraw(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawal>) -> Result<()> {
        instructions::emergency_withdraw(ctx)
    }

    /// Create the DAMM v2 pool in phase three
    pub fn create_pair(ctx: Context<CreatePair>, rent_lamports: u64) -> Result<()> {
        ctx.accounts.create_pair(rent_lamports)
    }

    /// Withdraw the caller's liquidity share after its timelock
    pub fn withdraw_liquidity(ctx: Context<WithdrawLiquidity>) -> Result<()> {
        ctx.accounts.withdraw_liquidity()
    }

    pub fn withdraw_incentives(ctx: Context<WithdrawIncentives>) -> Result<()> {
        instructions::withdraw_incentives(ctx)
    }

    pub fn skim(ctx: Context<Skim>) -> Result<()> {
        instructions::skim(ctx)
    }

    pub fn get_launch_event_info(ctx: Context<GetLaunchEventInfo>) -> Result<LaunchEventInfo> {
        instructions::get_launch_event_info(ctx)
    }

    pub fn get_user_allocation(ctx: Context<GetUserAllocation>) -> Result<UserAllocationInfo> {
        instructions::get_user_allocation(ctx)
    }

    // ===== Staking =====

    /// Initialize staking and create the rJOE mint
    pub fn initialize_staking(
        ctx: Context<InitializeStaking>,
        params: InitializeStakingParams,
    ) -> Result<()> {
        instructions::initialize_staking(ctx, params)
    }

    pub fn deposit_joe(ctx: Context<DepositJoe>, amount: u64) -> Result<()> {
        instructions::deposit_joe(ctx, amount)
    }

    pub fn withdraw_joe(ctx: Context<WithdrawJoe>, amount: u64) -> Result<()> {
        instructions::withdraw_joe(ctx, amount)
    }

    /// Withdraw all staked JOE without rewards
    pub fn emergency_withdraw_joe(ctx: Context<WithdrawJoe>) -> Result<()> {
        instructions::emergency_withdraw_joe(ctx)
    }

    pub fn pending_rjoe(ctx: Context<PendingRJoe>) -> Result<u64> {
        instructions::pending_rjoe(ctx)
    }

    /// Change the rJOE emission rate (owner only)
    pub fn update_emission_rate(ctx: Context<UpdateEmission>, rjoe_per_sec: u64) -> Result<()> {
        instructions::update_emission_rate(ctx, rjoe_per_sec)
    }
}
