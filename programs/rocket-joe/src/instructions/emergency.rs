use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::{IssuerEmergencyWithdraw, Stopped, UserEmergencyWithdraw};
use crate::state::{LaunchEvent, RocketJoeFactory, UserAllocation};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct AllowEmergencyWithdraw<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [FACTORY_SEED],
        bump = factory.bump,
        constraint = factory.owner == owner.key() @ RocketJoeError::Unauthorized,
    )]
    pub factory: Box<Account<'info, RocketJoeFactory>>,

    #[account(
        mut,
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,
}

/// Stop the launch event, owner only
pub fn allow_emergency_withdraw(ctx: Context<AllowEmergencyWithdraw>) -> Result<()> {
    let launch_event = &mut ctx.accounts.launch_event;
    launch_event.stop()?;

    let clock = Clock::get()?;
    emit!(Stopped {
        launch_event: launch_event.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Launch event {} stopped", launch_event.key());

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdrawal<'info> {
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
        address = launch_event.quote_vault @ RocketJoeError::InvalidQuoteVault,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    /// Receives the refund: WSOL for participants, the auctioned token for the issuer
    #[account(
        mut,
        token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Refund a participant's deposit or the issuer's tokens once stopped
pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawal>) -> Result<()> {
    let launch_event = &mut ctx.accounts.launch_event;
    let user = ctx.accounts.user.key();
    let vault_authority = ctx.accounts.vault_authority.to_account_info();

    if user == launch_event.issuer {
        require_keys_eq!(
            ctx.accounts.user_token_account.mint,
            launch_event.token_mint,
            RocketJoeError::InvalidTokenMint
        );

        let amount = launch_event.record_issuer_emergency_withdraw()?;
        transfer_from_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.token_vault,
            &ctx.accounts.user_token_account,
            &vault_authority,
            amount,
        )?;

        emit!(IssuerEmergencyWithdraw {
            launch_event: launch_event.key(),
            issuer: user,
            token_amount: amount,
        });
        msg!("Issuer {} recovered {} tokens", user, amount);
    } else {
        require_keys_eq!(
            ctx.accounts.user_token_account.mint,
            launch_event.quote_mint,
            RocketJoeError::InvalidQuoteMint
        );
        let user_allocation = ctx
            .accounts
            .user_allocation
            .as_mut()
            .ok_or(RocketJoeError::NothingToWithdraw)?;

        let amount = launch_event.record_user_emergency_withdraw(user_allocation)?;
        transfer_from_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.quote_vault,
            &ctx.accounts.user_token_account,
            &vault_authority,
            amount,
        )?;

        emit!(UserEmergencyWithdraw {
            launch_event: launch_event.key(),
            user,
            wsol_amount: amount,
        });
        msg!("User {} recovered {} lamports", user, amount);
    }

    Ok(())
}
