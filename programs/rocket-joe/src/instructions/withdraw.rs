use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::UserWithdrawn;
use crate::state::{LaunchEvent, UserAllocation};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct WithdrawWsol<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

    #[account(
        mut,
        seeds = [USER_ALLOCATION_SEED, launch_event.key().as_ref(), user.key().as_ref()],
        bump = user_allocation.bump,
    )]
    pub user_allocation: Box<Account<'info, UserAllocation>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        mut,
        address = launch_event.quote_vault @ RocketJoeError::InvalidQuoteVault,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    /// User's WSOL account receiving the withdrawal
    #[account(
        mut,
        token::mint = launch_event.quote_mint,
        token::authority = user,
    )]
    pub user_wsol_account: Box<Account<'info, TokenAccount>>,

    /// Penalty collector's WSOL account
    #[account(
        mut,
        token::mint = launch_event.quote_mint,
        constraint = penalty_collector_wsol_account.owner == launch_event.penalty_collector
            @ RocketJoeError::InvalidPenaltyCollector,
    )]
    pub penalty_collector_wsol_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<WithdrawWsol>, amount: u64) -> Result<()> {
    let launch_event = &mut ctx.accounts.launch_event;
    let clock = Clock::get()?;

    let fee = launch_event.record_withdraw(
        &mut ctx.accounts.user_allocation,
        amount,
        clock.unix_timestamp,
    )?;

    let vault_authority = ctx.accounts.vault_authority.to_account_info();
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.quote_vault,
        &ctx.accounts.user_wsol_account,
        &vault_authority,
        amount - fee,
    )?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.quote_vault,
        &ctx.accounts.penalty_collector_wsol_account,
        &vault_authority,
        fee,
    )?;

    emit!(UserWithdrawn {
        launch_event: launch_event.key(),
        user: ctx.accounts.user.key(),
        wsol_amount: amount,
        penalty_amount: fee,
        timestamp: clock.unix_timestamp,
    });

    msg!("User {} withdrew {} lamports", ctx.accounts.user.key(), amount);
    msg!("Penalty: {}", fee);

    Ok(())
}
