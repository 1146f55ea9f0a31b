use anchor_lang::prelude::*;

use crate::constants::ACC_RJOE_PRECISION;
use crate::errors::RocketJoeError;
use crate::state::StakerInfo;

/// Stakes JOE and mints rJOE to stakers pro rata over time.
///
/// Rewards are tracked with the usual accumulator: `acc_rjoe_per_share` grows by
/// `elapsed * rjoe_per_sec / total_deposited` and each staker keeps a
/// `reward_debt` snapshot so that `pending = amount * acc - reward_debt`.
/// rJOE is minted lazily when a staker settles, never for periods when
/// nothing was staked.
#[account]
pub struct RocketJoeStaking {
    /// Can change the emission rate
    pub owner: Pubkey,

    /// Staked token
    pub joe_mint: Pubkey,

    /// Reward token, minted by this account
    pub rjoe_mint: Pubkey,

    /// Holds staked JOE
    pub joe_vault: Pubkey,

    pub total_deposited: u64,

    /// Scaled by `ACC_RJOE_PRECISION`
    pub acc_rjoe_per_share: u128,

    pub last_reward_timestamp: i64,

    /// rJOE base units emitted per second
    pub rjoe_per_sec: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

impl RocketJoeStaking {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // joe_mint
        32 + // rjoe_mint
        32 + // joe_vault
        8 + // total_deposited
        16 + // acc_rjoe_per_share
        8 + // last_reward_timestamp
        8 + // rjoe_per_sec
        1 + // bump
        8 * 8; // reserved

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        joe_mint: Pubkey,
        rjoe_mint: Pubkey,
        joe_vault: Pubkey,
        rjoe_per_sec: u64,
        current_time: i64,
        bump: u8,
    ) {
        self.owner = owner;
        self.joe_mint = joe_mint;
        self.rjoe_mint = rjoe_mint;
        self.joe_vault = joe_vault;
        self.total_deposited = 0;
        self.acc_rjoe_per_share = 0;
        self.last_reward_timestamp = current_time;
        self.rjoe_per_sec = rjoe_per_sec;
        self.bump = bump;
    }

    /// Accumulator value as it would be at `current_time`
    fn projected_acc(&self, current_time: i64) -> Result<u128> {
        if current_time <= self.last_reward_timestamp || self.total_deposited == 0 {
            return Ok(self.acc_rjoe_per_share);
        }

        let elapsed = (current_time - self.last_reward_timestamp) as u128;
        let reward = elapsed
            .checked_mul(self.rjoe_per_sec as u128)
            .ok_or(RocketJoeError::MathOverflow)?;
        let increment = reward
            .checked_mul(ACC_RJOE_PRECISION)
            .ok_or(RocketJoeError::MathOverflow)?
            / self.total_deposited as u128;

        self.acc_rjoe_per_share
            .checked_add(increment)
            .ok_or(error!(RocketJoeError::MathOverflow))
    }

    /// Bring the accumulator up to date
    pub fn update_pool(&mut self, current_time: i64) -> Result<()> {
        if current_time <= self.last_reward_timestamp {
            return Ok(());
        }

        self.acc_rjoe_per_share = self.projected_acc(current_time)?;
        self.last_reward_timestamp = current_time;

        Ok(())
    }

    fn accrued(amount: u64, acc: u128) -> Result<u128> {
        Ok((amount as u128)
            .checked_mul(acc)
            .ok_or(RocketJoeError::MathOverflow)?
            / ACC_RJOE_PRECISION)
    }

    fn pending_at(staker: &StakerInfo, acc: u128) -> Result<u64> {
        let pending = Self::accrued(staker.amount, acc)?.saturating_sub(staker.reward_debt);
        u64::try_from(pending).map_err(|_| error!(RocketJoeError::TypeCastFailed))
    }

    /// rJOE a staker would receive if they settled at `current_time`
    pub fn pending_rjoe(&self, staker: &StakerInfo, current_time: i64) -> Result<u64> {
        Self::pending_at(staker, self.projected_acc(current_time)?)
    }

    /// Settle and add stake, returns the rJOE to mint to the staker
    pub fn deposit(
        &mut self,
        staker: &mut StakerInfo,
        amount: u64,
        current_time: i64,
    ) -> Result<u64> {
        self.update_pool(current_time)?;
        let pending = Self::pending_at(staker, self.acc_rjoe_per_share)?;

        staker.amount = staker
            .amount
            .checked_add(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        staker.reward_debt = Self::accrued(staker.amount, self.acc_rjoe_per_share)?;

        Ok(pending)
    }

    /// Settle and remove stake, returns the rJOE to mint to the staker
    pub fn withdraw(
        &mut self,
        staker: &mut StakerInfo,
        amount: u64,
        current_time: i64,
    ) -> Result<u64> {
        require!(amount <= staker.amount, RocketJoeError::InsufficientStake);

        self.update_pool(current_time)?;
        let pending = Self::pending_at(staker, self.acc_rjoe_per_share)?;

        staker.amount -= amount;
        self.total_deposited = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        staker.reward_debt = Self::accrued(staker.amount, self.acc_rjoe_per_share)?;

        Ok(pending)
    }

    /// Drop the whole stake without rewards, returns the JOE to send back
    pub fn emergency_withdraw(&mut self, staker: &mut StakerInfo) -> Result<u64> {
        let amount = staker.amount;

        self.total_deposited = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(RocketJoeError::MathOverflow)?;
        staker.amount = 0;
        staker.reward_debt = 0;

        Ok(amount)
    }

    pub fn update_emission_rate(&mut self, rjoe_per_sec: u64, current_time: i64) -> Result<()> {
        self.update_pool(current_time)?;
        self.rjoe_per_sec = rjoe_per_sec;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;
    const JOE: u64 = 1_000_000_000;
    const RATE: u64 = 1_000_000_000;

    fn staking() -> RocketJoeStaking {
        let mut staking = RocketJoeStaking {
            owner: Pubkey::default(),
            joe_mint: Pubkey::default(),
            rjoe_mint: Pubkey::default(),
            joe_vault: Pubkey::default(),
            total_deposited: 0,
            acc_rjoe_per_share: 0,
            last_reward_timestamp: 0,
            rjoe_per_sec: 0,
            bump: 0,
            reserved: [0; 8],
        };
        staking.initialize(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            RATE,
            T0,
            255,
        );
        staking
    }

    fn staker() -> StakerInfo {
        StakerInfo {
            user: Pubkey::new_unique(),
            amount: 0,
            reward_debt: 0,
            bump: 0,
            reserved: [0; 4],
        }
    }

    #[test]
    fn test_no_accrual_without_stake() {
        let mut staking = staking();
        staking.update_pool(T0 + 100).unwrap();
        assert_eq!(staking.acc_rjoe_per_share, 0);
        assert_eq!(staking.last_reward_timestamp, T0 + 100);

        let mut alice = staker();
        staking.deposit(&mut alice, 100 * JOE, T0 + 100).unwrap();
        // The empty period is never paid out
        assert_eq!(staking.pending_rjoe(&alice, T0 + 110).unwrap(), 10 * RATE);
    }

    #[test]
    fn test_three_stakers() {
        let mut staking = staking();
        let mut alice = staker();
        let mut bob = staker();
        let mut carol = staker();

        assert_eq!(staking.deposit(&mut alice, 100 * JOE, T0).unwrap(), 0);
        assert_eq!(staking.deposit(&mut bob, 200 * JOE, T0 + 10).unwrap(), 0);
        assert_eq!(staking.deposit(&mut carol, 300 * JOE, T0 + 20).unwrap(), 0);
        assert_eq!(staking.total_deposited, 600 * JOE);

        let now = T0 + 30;
        let alice_reward = staking.withdraw(&mut alice, 100 * JOE, now).unwrap();
        assert_eq!(staking.total_deposited, 500 * JOE);
        let bob_reward = staking.withdraw(&mut bob, 100 * JOE, now).unwrap();
        assert_eq!(staking.total_deposited, 400 * JOE);
        let carol_reward = staking.withdraw(&mut carol, 1, now).unwrap();
        assert_eq!(staking.total_deposited, 399_999_999_999);

        assert_eq!(alice.amount, 0);
        assert_eq!(bob.amount, 100 * JOE);
        assert_eq!(carol.amount, 300 * JOE - 1);

        // 10s alone, then 1/3 for 10s, then 1/6 for 10s
        assert_eq!(alice_reward, 14_999_999_999);
        // 2/3 for 10s then 1/3 for 10s
        assert_eq!(bob_reward, 9_999_999_999);
        // 1/2 for 10s
        assert_eq!(carol_reward, 5_000_000_000);
        assert!(alice_reward + bob_reward + carol_reward <= 30 * RATE);
    }

    #[test]
    fn test_pending_matches_withdraw() {
        let mut staking = staking();
        let mut alice = staker();
        let mut bob = staker();
        staking.deposit(&mut alice, 7 * JOE, T0).unwrap();
        staking.deposit(&mut bob, 13 * JOE, T0 + 3).unwrap();

        let now = T0 + 1_000;
        let pending = staking.pending_rjoe(&alice, now).unwrap();
        let paid = staking.withdraw(&mut alice, 0, now).unwrap();
        assert_eq!(pending, paid);
        assert_eq!(staking.pending_rjoe(&alice, now).unwrap(), 0);
        assert_eq!(alice.amount, 7 * JOE);
    }

    #[test]
    fn test_withdraw_more_than_staked() {
        let mut staking = staking();
        let mut alice = staker();
        staking.deposit(&mut alice, JOE, T0).unwrap();
        let err = staking.withdraw(&mut alice, JOE + 1, T0 + 1).unwrap_err();
        assert_eq!(err, RocketJoeError::InsufficientStake.into());
    }

    #[test]
    fn test_emergency_withdraw_forfeits_rewards() {
        let mut staking = staking();
        let mut alice = staker();
        staking.deposit(&mut alice, 50 * JOE, T0).unwrap();
        assert!(staking.pending_rjoe(&alice, T0 + 100).unwrap() > 0);

        assert_eq!(staking.emergency_withdraw(&mut alice).unwrap(), 50 * JOE);
        assert_eq!(alice.amount, 0);
        assert_eq!(alice.reward_debt, 0);
        assert_eq!(staking.total_deposited, 0);
        assert_eq!(staking.pending_rjoe(&alice, T0 + 200).unwrap(), 0);
    }

    #[test]
    fn test_update_emission_rate_is_not_retroactive() {
        let mut staking = staking();
        let mut alice = staker();
        staking.deposit(&mut alice, 100 * JOE, T0).unwrap();

        staking.update_emission_rate(2 * RATE, T0 + 10).unwrap();
        assert_eq!(staking.last_reward_timestamp, T0 + 10);
        assert_eq!(staking.pending_rjoe(&alice, T0 + 20).unwrap(), 30 * RATE);
    }
}
