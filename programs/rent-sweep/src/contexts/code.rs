use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(code: String)]
pub struct RegisterReferralCode<'info> {
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

    /// Реферальные данные вызывающего; отсутствие означает,
    /// что пользователь не зарегистрирован
    #[account(
        seeds = [REFERRAL_SEED, user.key().as_ref()],
        bump
    )]
    pub referral_state: Option<Account<'info, ReferralState>>,

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
