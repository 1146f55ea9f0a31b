use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use anchor_spl::token_interface::{self, TokenInterface};

use crate::const_pda::const_authority::{POOL_ID, VAULT_BUMP};
use crate::constants::*;
use crate::errors::RocketJoeError;
use crate::events::{IssuerLiquidityWithdrawn, UserLiquidityWithdrawn};
use crate::state::{LaunchEvent, UserAllocation};
use crate::utils::transfer_from_vault;

/// Pays a principal's share of the pool position out of DAMM v2
#[derive(Accounts)]
pub struct WithdrawLiquidity<'info> {
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

    /// CHECK: Vault authority PDA, owner of the position
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Holds the issuer's unsold tokens
    #[account(
        mut,
        address = launch_event.token_vault @ RocketJoeError::InvalidTokenVault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Holds the WSOL the pool didn't take
    #[account(
        mut,
        address = launch_event.quote_vault @ RocketJoeError::InvalidQuoteVault,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    /// Receives the auctioned token side
    #[account(
        mut,
        token::mint = launch_event.token_mint,
        token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    /// Receives the WSOL side
    #[account(
        mut,
        token::mint = launch_event.quote_mint,
        token::authority = user,
    )]
    pub user_wsol_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: pool authority
    #[account(address = POOL_ID)]
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: Meteora pool account (verified by cp_amm)
    #[account(
        mut,
        constraint = launch_event.pool == Some(pool.key()) @ RocketJoeError::InvalidPool
    )]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Meteora position account (verified by cp_amm)
    #[account(
        mut,
        constraint = launch_event.position == Some(position.key()) @ RocketJoeError::InvalidPosition
    )]
    pub position: UncheckedAccount<'info>,

    /// Position NFT token account
    #[account(
        constraint = launch_event.position_nft_account == Some(position_nft_account.key())
            @ RocketJoeError::InvalidPositionNftAccount,
        constraint = position_nft_account.amount == 1 @ RocketJoeError::InvalidPositionNftAccount,
        token::authority = vault_authority
    )]
    pub position_nft_account: Box<InterfaceAccount<'info, token_interface::TokenAccount>>,

    /// CHECK:
    #[account(mut)]
    pub token_a_vault: UncheckedAccount<'info>,
    /// CHECK:
    #[account(mut)]
    pub token_b_vault: UncheckedAccount<'info>,
    /// CHECK: base token mint
    #[account(address = launch_event.token_mint @ RocketJoeError::InvalidTokenMint)]
    pub base_mint: UncheckedAccount<'info>,
    /// CHECK: quote token mint
    #[account(address = launch_event.quote_mint @ RocketJoeError::InvalidQuoteMint)]
    pub quote_mint: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub token_base_program: Interface<'info, TokenInterface>,
    pub token_quote_program: Interface<'info, TokenInterface>,

    /// CHECK: cp_amm program
    #[account(address = cp_amm::ID)]
    pub amm_program: UncheckedAccount<'info>,

    /// CHECK: Meteora event authority
    pub damm_event_authority: UncheckedAccount<'info>,
}

impl<'info> WithdrawLiquidity<'info> {
    fn remove_liquidity(&self, liquidity: u128) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];

        cp_amm::cpi::remove_liquidity(
            CpiContext::new_with_signer(
                self.amm_program.to_account_info(),
                cp_amm::cpi::accounts::RemoveLiquidityCtx {
                    pool_authority: self.pool_authority.to_account_info(),
                    pool: self.pool.to_account_info(),
                    position: self.position.to_account_info(),
                    token_a_account: self.user_token_account.to_account_info(),
                    token_b_account: self.user_wsol_account.to_account_info(),
                    token_a_vault: self.token_a_vault.to_account_info(),
                    token_b_vault: self.token_b_vault.to_account_info(),
                    token_a_mint: self.base_mint.to_account_info(),
                    token_b_mint: self.quote_mint.to_account_info(),
                    position_nft_account: self.position_nft_account.to_account_info(),
                    owner: self.vault_authority.to_account_info(),
                    token_a_program: self.token_base_program.to_account_info(),
                    token_b_program: self.token_quote_program.to_account_info(),
                    event_authority: self.damm_event_authority.to_account_info(),
                    program: self.amm_program.to_account_info(),
                },
                signer_seeds,
            ),
            cp_amm::RemoveLiquidityParameters {
                liquidity_delta: liquidity,
                token_a_amount_threshold: 0,
                token_b_amount_threshold: 0,
            },
        )
    }

    pub fn withdraw_liquidity(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        let user = self.user.key();

        if user == self.launch_event.issuer {
            let (liquidity, unsold_tokens) = self
                .launch_event
                .record_issuer_liquidity_withdrawal(clock.unix_timestamp)?;

            self.remove_liquidity(liquidity)?;
            transfer_from_vault(
                &self.token_program,
                &self.token_vault,
                &self.user_token_account,
                &self.vault_authority.to_account_info(),
                unsold_tokens,
            )?;

            emit!(IssuerLiquidityWithdrawn {
                launch_event: self.launch_event.key(),
                issuer: user,
                pool: self.pool.key(),
                liquidity,
                token_amount: unsold_tokens,
            });
            msg!("Issuer withdrew {} liquidity and {} unsold tokens", liquidity, unsold_tokens);
        } else {
            let user_allocation = self
                .user_allocation
                .as_mut()
                .ok_or(RocketJoeError::NothingToWithdraw)?;
            let (liquidity, wsol_refund) = self
                .launch_event
                .record_user_liquidity_withdrawal(user_allocation, clock.unix_timestamp)?;

            self.remove_liquidity(liquidity)?;
            transfer_from_vault(
                &self.token_program,
                &self.quote_vault,
                &self.user_wsol_account,
                &self.vault_authority.to_account_info(),
                wsol_refund,
            )?;

            emit!(UserLiquidityWithdrawn {
                launch_event: self.launch_event.key(),
                user,
                pool: self.pool.key(),
                liquidity,
                wsol_amount: wsol_refund,
            });
            msg!("User {} withdrew {} liquidity and {} WSOL", user, liquidity, wsol_refund);
        }

        Ok(())
    }
}
