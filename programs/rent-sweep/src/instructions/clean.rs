use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount};

use crate::contexts::CleanAndDistribute;
use crate::errors::CleanupError;
use crate::instructions::utils::{split_reclaimed, transfer_lamports, verify_holding_account};

/// Закрытие пустых токен-аккаунтов вызывающего и распределение
/// возвращенного рента между казной и реферрерами двух уровней
pub fn clean_and_distribute<'info>(
    ctx: Context<'_, '_, '_, 'info, CleanAndDistribute<'info>>,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let admin = config.admin;
    let platform_fee_bps = config.platform_fee_bps;
    let tier1_share_bps = config.tier1_share_bps;
    let tier2_share_bps = config.tier2_share_bps;

    let user = &ctx.accounts.user;
    let user_key = user.key();

    // Очистка доступна только зарегистрированным пользователям
    let referrer = match ctx.accounts.referral_state.as_ref() {
        Some(state) => state.referrer,
        None => return Err(CleanupError::NotEnrolled.into()),
    };

    // Если реферрером выступает сам админ, обе реферальные доли
    // сворачиваются в казну
    let referrer_is_admin = referrer == admin;

    // Заявленный кошелек первого уровня обязан совпадать с данными регистрации
    if let Some(wallet) = &ctx.accounts.referrer_wallet {
        require!(wallet.key() == referrer, CleanupError::ReferrerMismatch);
    }

    // Кошелек второго уровня проверяется по реферальным данным
    // реферрера первого уровня
    if let Some(tier2_wallet) = &ctx.accounts.tier2_referrer_wallet {
        let referrer_state = ctx
            .accounts
            .referrer_state
            .as_ref()
            .ok_or(CleanupError::Tier2Mismatch)?;
        require!(referrer_state.owner == referrer, CleanupError::Tier2Mismatch);
        require!(
            referrer_state.referrer == tier2_wallet.key(),
            CleanupError::Tier2Mismatch
        );
        // Пользователь не может быть собственным реферрером второго уровня
        require!(tier2_wallet.key() != user_key, CleanupError::Tier2Mismatch);
    }

    let token_program_key = ctx.accounts.token_program.key();
    let mut total_reclaimed: u64 = 0;
    let mut closed: u64 = 0;
    let mut skipped: u64 = 0;

    // Закрываем подходящие аккаунты; непригодные пропускаем без ошибки
    for account_info in ctx.remaining_accounts.iter() {
        if verify_holding_account(account_info, &user_key, &token_program_key).is_err() {
            msg!("Аккаунт {} пропущен: не подходит для закрытия", account_info.key);
            skipped += 1;
            continue;
        }

        total_reclaimed = total_reclaimed
            .checked_add(account_info.lamports())
            .ok_or(CleanupError::ArithmeticError)?;

        let cpi_accounts = CloseAccount {
            account: account_info.clone(),
            destination: user.to_account_info(),
            authority: user.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
        token::close_account(cpi_ctx)?;
        closed += 1;
    }

    if total_reclaimed == 0 {
        msg!("Очистка завершена: подходящих аккаунтов нет, средства не перемещались");
        return Ok(());
    }

    let split = split_reclaimed(
        total_reclaimed,
        platform_fee_bps,
        tier1_share_bps,
        tier2_share_bps,
    )?;

    // Казна всегда получает комиссию платформы и остаток от округления
    let mut treasury_amount = split
        .platform_cut
        .checked_add(split.remainder)
        .ok_or(CleanupError::ArithmeticError)?;
    let mut tier1_paid: u64 = 0;
    let mut tier2_paid: u64 = 0;

    match &ctx.accounts.referrer_wallet {
        Some(wallet) if !referrer_is_admin => {
            if split.tier1_cut > 0 {
                transfer_lamports(user, wallet, split.tier1_cut, &ctx.accounts.system_program)?;
                tier1_paid = split.tier1_cut;
            }
        }
        _ => {
            treasury_amount = treasury_amount
                .checked_add(split.tier1_cut)
                .ok_or(CleanupError::ArithmeticError)?;
        }
    }

    match &ctx.accounts.tier2_referrer_wallet {
        Some(wallet) if !referrer_is_admin => {
            if split.tier2_cut > 0 {
                transfer_lamports(user, wallet, split.tier2_cut, &ctx.accounts.system_program)?;
                tier2_paid = split.tier2_cut;
            }
        }
        _ => {
            treasury_amount = treasury_amount
                .checked_add(split.tier2_cut)
                .ok_or(CleanupError::ArithmeticError)?;
        }
    }

    if treasury_amount > 0 {
        transfer_lamports(
            user,
            &ctx.accounts.treasury,
            treasury_amount,
            &ctx.accounts.system_program,
        )?;
    }

    if let Some(referral_state) = ctx.accounts.referral_state.as_mut() {
        referral_state.total_reclaimed = referral_state
            .total_reclaimed
            .checked_add(total_reclaimed)
            .ok_or(CleanupError::ArithmeticError)?;
    }

    msg!(
        "Очистка завершена: закрыто {}, пропущено {}, возвращено {} лампортов",
        closed,
        skipped,
        total_reclaimed
    );
    msg!(
        "Распределение: казна {}, уровень 1 {}, уровень 2 {}",
        treasury_amount,
        tier1_paid,
        tier2_paid
    );
    Ok(())
}
