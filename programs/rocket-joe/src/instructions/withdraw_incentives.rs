use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::IncentiveTokenWithdraw;
use crate::state::{LaunchEvent, UserAllocation};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct WithdrawIncentives<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

    /// Required for participants
    #[account(
        mut,
        seeds = [USER_ALLOCATION_SEED, launch_event.key().as_ref(), user.key().as_ref()],
        bump = user_allocation.bump,
    )]
    pub user_allocation: Option<Box<Account<'info, UserAllocation>>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        mut,
        address = launch_event.token_vault @ RocketJoeError::InvalidTokenVault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = launch_event.token_mint,
        token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Claim incentive tokens, pro rata for participants and the refund for the issuer
pub fn withdraw_incentives(ctx: Context<WithdrawIncentives>) -> Result<()> {
    let launch_event = &mut ctx.accounts.launch_event;
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    let amount = if user == launch_event.issuer {
        launch_event.record_issuer_incentives_withdrawal(clock.unix_timestamp)?
    } else {
        let user_allocation = ctx
            .accounts
            .user_allocation
            .as_mut()
            .ok_or(RocketJoeError::NoIncentives)?;
        launch_event.record_user_incentives_withdrawal(user_allocation, clock.unix_timestamp)?
    };

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.vault_authority.to_account_info(),
        amount,
    )?;

    emit!(IncentiveTokenWithdraw {
        launch_event: launch_event.key(),
        user,
        token_mint: launch_event.token_mint,
        amount,
    });

    msg!("{} claimed {} incentive tokens", user, amount);

    Ok(())
}
