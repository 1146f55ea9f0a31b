use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::Skimmed;
use crate::state::LaunchEvent;
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct Skim<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [LAUNCH_EVENT_SEED, launch_event.token_mint.as_ref()],
        bump = launch_event.bump,
    )]
    pub launch_event: Box<Account<'info, LaunchEvent>>,

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

    #[account(
        mut,
        token::mint = launch_event.token_mint,
        constraint = penalty_collector_token_account.owner == launch_event.penalty_collector
            @ RocketJoeError::InvalidPenaltyCollector,
    )]
    pub penalty_collector_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = launch_event.quote_mint,
        constraint = penalty_collector_wsol_account.owner == launch_event.penalty_collector
            @ RocketJoeError::InvalidPenaltyCollector,
    )]
    pub penalty_collector_wsol_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Send anything the vaults hold beyond the tracked reserves to the penalty collector
pub fn skim(ctx: Context<Skim>) -> Result<()> {
    // Lamports sent straight to the WSOL vault only show up once synced
    token::sync_native(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        token::SyncNative {
            account: ctx.accounts.quote_vault.to_account_info(),
        },
    ))?;
    ctx.accounts.quote_vault.reload()?;

    let launch_event = &ctx.accounts.launch_event;
    let (token_excess, wsol_excess) = launch_event.excess_balances(
        ctx.accounts.token_vault.amount,
        ctx.accounts.quote_vault.amount,
    );

    let vault_authority = ctx.accounts.vault_authority.to_account_info();
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.penalty_collector_token_account,
        &vault_authority,
        token_excess,
    )?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.quote_vault,
        &ctx.accounts.penalty_collector_wsol_account,
        &vault_authority,
        wsol_excess,
    )?;

    emit!(Skimmed {
        launch_event: launch_event.key(),
        penalty_collector: launch_event.penalty_collector,
        token_amount: token_excess,
        wsol_amount: wsol_excess,
    });

    msg!("Skimmed {} tokens and {} lamports", token_excess, wsol_excess);

    Ok(())
}
