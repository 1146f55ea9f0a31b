use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::{EmergencyWithdraw, Withdraw};
use crate::state::{RocketJoeStaking, StakerInfo};
use crate::utils::{mint_rjoe, transfer_from_vault};

#[derive(Accounts)]
pub struct WithdrawJoe<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_SEED],
        bump = staking.bump,
    )]
    pub staking: Box<Account<'info, RocketJoeStaking>>,

    #[account(
        mut,
        seeds = [STAKER_INFO_SEED, user.key().as_ref()],
        bump = staker_info.bump,
    )]
    pub staker_info: Box<Account<'info, StakerInfo>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        mut,
        address = staking.joe_vault @ RocketJoeError::InvalidTokenVault,
    )]
    pub joe_vault: Box<Account<'info, TokenAccount>>,

    /// Receives the unstaked JOE
    #[account(
        mut,
        token::mint = staking.joe_mint,
        token::authority = user,
    )]
    pub user_joe_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = staking.rjoe_mint @ RocketJoeError::InvalidRJoeMint,
    )]
    pub rjoe_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = rjoe_mint,
        token::authority = user,
    )]
    pub user_rjoe_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Unstake JOE and collect pending rJOE
pub fn withdraw_joe(ctx: Context<WithdrawJoe>, amount: u64) -> Result<()> {
    let staking = &mut ctx.accounts.staking;
    let staker_info = &mut ctx.accounts.staker_info;
    let current_time = Clock::get()?.unix_timestamp;

    let reward = staking.withdraw(staker_info, amount, current_time)?;

    mint_rjoe(
        &ctx.accounts.token_program,
        &ctx.accounts.rjoe_mint,
        &ctx.accounts.user_rjoe_account,
        &staking.to_account_info(),
        staking.bump,
        reward,
    )?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.joe_vault,
        &ctx.accounts.user_joe_account,
        &ctx.accounts.vault_authority.to_account_info(),
        amount,
    )?;

    emit!(Withdraw {
        user: ctx.accounts.user.key(),
        amount,
        reward,
    });

    msg!(
        "User {} unstaked {} JOE, {} left",
        ctx.accounts.user.key(),
        amount,
        staker_info.amount
    );
    msg!("rJOE paid: {}", reward);

    Ok(())
}

/// Unstake everything and forfeit pending rJOE
pub fn emergency_withdraw_joe(ctx: Context<WithdrawJoe>) -> Result<()> {
    let staking = &mut ctx.accounts.staking;
    let amount = staking.emergency_withdraw(&mut ctx.accounts.staker_info)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.joe_vault,
        &ctx.accounts.user_joe_account,
        &ctx.accounts.vault_authority.to_account_info(),
        amount,
    )?;

    emit!(EmergencyWithdraw {
        user: ctx.accounts.user.key(),
        amount,
    });

    msg!("User {} emergency unstaked {} JOE", ctx.accounts.user.key(), amount);

    Ok(())
}
