use anchor_lang::prelude::*;

#[account]
pub struct StakerInfo {
    /// Staker address
    pub user: Pubkey,

    /// JOE staked
    pub amount: u64,

    /// `amount * acc_rjoe_per_share / ACC_RJOE_PRECISION` at the last interaction
    pub reward_debt: u128,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl StakerInfo {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        8 + // amount
        16 + // reward_debt
        1 + // bump
        8 * 4; // reserved

    pub fn initialize_if_needed(&mut self, user: Pubkey, bump: u8) {
        if self.user == Pubkey::default() {
            self.user = user;
            self.bump = bump;
        }
    }
}
