use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::const_pda::const_authority::VAULT_BUMP;
use crate::constants::{STAKING_SEED, VAULT_AUTHORITY};

/// Move tokens out of a program vault, signed by the vault authority
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    vault_authority: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: vault_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Mint rJOE rewards, signed by the staking account
pub fn mint_rjoe<'info>(
    token_program: &Program<'info, Token>,
    rjoe_mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    staking: &AccountInfo<'info>,
    staking_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[STAKING_SEED, &[staking_bump]]];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: rjoe_mint.to_account_info(),
                to: to.to_account_info(),
                authority: staking.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
