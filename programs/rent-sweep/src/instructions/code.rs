use anchor_lang::prelude::*;
use crate::constants::CODE_REGISTRATION_FEE;
use crate::contexts::RegisterReferralCode;
use crate::errors::CleanupError;
use crate::instructions::utils::{transfer_lamports, validate_code};
use crate::state::ReferralCodeMapping;

/// Закрепляет код за владельцем. Уникальность кода гарантирует PDA:
/// повторная регистрация чужого кода обнаруживает уже заполненную
/// привязку. За создание новой привязки взимается фиксированная плата.
pub(crate) fn bind_code<'info>(
    mapping: &mut Account<'info, ReferralCodeMapping>,
    code: &str,
    user: &Signer<'info>,
    treasury: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    bump: u8,
) -> Result<()> {
    if mapping.owner == Pubkey::default() {
        transfer_lamports(user, treasury, CODE_REGISTRATION_FEE, system_program)?;

        mapping.code = code.to_string();
        mapping.owner = user.key();
        mapping.bump = bump;

        msg!("Код '{}' закреплен за {}", code, user.key());
    } else {
        // Повторная регистрация собственного кода не считается ошибкой
        require!(mapping.owner == user.key(), CleanupError::CodeTaken);
    }

    Ok(())
}

/// Регистрация реферального кода уже зарегистрированным пользователем
pub fn register_referral_code(ctx: Context<RegisterReferralCode>, code: String) -> Result<()> {
    validate_code(&code)?;

    // Код может зарегистрировать только участник реферальной системы
    let referral_state = ctx
        .accounts
        .referral_state
        .as_ref()
        .ok_or(CleanupError::NotEnrolled)?;
    require!(
        referral_state.owner == ctx.accounts.user.key(),
        CleanupError::NotEnrolled
    );

    bind_code(
        &mut ctx.accounts.code_mapping,
        &code,
        &ctx.accounts.user,
        &ctx.accounts.treasury,
        &ctx.accounts.system_program,
        ctx.bumps.code_mapping,
    )
}
