use anchor_lang::prelude::*;

#[account]
pub struct UserAllocation {
    /// Participant address
    pub user: Pubkey,

    /// Associated launch event
    pub launch_event: Pubkey,

    /// WSOL deposited and not withdrawn
    pub amount: u64,

    // ===== Claim Status =====
    /// Whether the liquidity share has been withdrawn
    pub has_withdrawn_pair: bool,

    /// Whether the incentive tokens have been claimed
    pub has_withdrawn_incentives: bool,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl UserAllocation {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        32 + // launch_event
        8 + // amount
        1 + // has_withdrawn_pair
        1 + // has_withdrawn_incentives
        1 + // bump
        8 * 4; // reserved

    /// Bind a freshly created allocation to its owner
    pub fn initialize_if_needed(&mut self, user: Pubkey, launch_event: Pubkey, bump: u8) {
        if self.user == Pubkey::default() {
            self.user = user;
            self.launch_event = launch_event;
            self.bump = bump;
        }
    }
}
