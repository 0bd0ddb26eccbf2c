use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(referrer: Pubkey)]
pub struct InitializeReferral<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        init_if_needed,
        payer = user,
        seeds = [REFERRAL_SEED, user.key().as_ref()],
        bump,
        space = 8 + ReferralState::SPACE
    )]
    pub referral_state: Account<'info, ReferralState>,

    /// Реферальные данные указанного реферрера; обязательны,
    /// если реферрер не является админом и не сентинелом
    #[account(
        seeds = [REFERRAL_SEED, referrer.as_ref()],
        bump
    )]
    pub referrer_state: Option<Account<'info, ReferralState>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(code: String)]
pub struct RegisterPartner<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    /// CHECK: Адрес сверяется с config.admin
    #[account(mut, address = config.admin)]
    pub treasury: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = user,
        seeds = [REFERRAL_SEED, user.key().as_ref()],
        bump,
        space = 8 + ReferralState::SPACE
    )]
    pub referral_state: Account<'info, ReferralState>,

    /// Реферальные данные указанного реферрера; соответствие
    /// проверяется в инструкции по полю owner
    pub referrer_state: Option<Account<'info, ReferralState>>,

    #[account(
        init_if_needed,
        payer = user,
        seeds = [CODE_SEED, code.as_bytes()],
        bump,
        space = 8 + ReferralCodeMapping::SPACE
    )]
    pub code_mapping: Account<'info, ReferralCodeMapping>,

    pub system_program: Program<'info, System>,
}
