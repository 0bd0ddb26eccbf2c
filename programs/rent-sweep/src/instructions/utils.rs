use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;
use anchor_spl::token::TokenAccount;

use crate::constants::{MAX_BPS, MAX_CODE_LENGTH, MIN_CODE_LENGTH};
use crate::errors::CleanupError;

/// Результат разбиения возвращенной суммы на доли
pub struct DistributionSplit {
    pub platform_cut: u64,
    pub tier1_cut: u64,
    pub tier2_cut: u64,
    pub remainder: u64,
}

/// Проверяет допустимость ставок: каждая не больше 10000 bps,
/// а их сумма не превышает 100%, иначе при распределении
/// образовался бы дефицит казны
pub fn validate_rates(
    platform_fee_bps: u16,
    tier1_share_bps: u16,
    tier2_share_bps: u16,
) -> Result<()> {
    require!(platform_fee_bps <= MAX_BPS, CleanupError::InvalidParameter);
    require!(tier1_share_bps <= MAX_BPS, CleanupError::InvalidParameter);
    require!(tier2_share_bps <= MAX_BPS, CleanupError::InvalidParameter);

    let total = platform_fee_bps as u32 + tier1_share_bps as u32 + tier2_share_bps as u32;
    require!(total <= MAX_BPS as u32, CleanupError::InvalidParameter);

    Ok(())
}

/// Проверяет длину реферального кода в байтах: код входит
/// в семя PDA и в слот хранения фиксированного размера
pub fn validate_code(code: &str) -> Result<()> {
    require!(
        code.len() >= MIN_CODE_LENGTH && code.len() <= MAX_CODE_LENGTH,
        CleanupError::InvalidCodeLength
    );

    Ok(())
}

/// Проверяет, что ключ админа не равен нулевому ключу:
/// на этом сентинеле основана проверка повторной инициализации
pub fn validate_admin(admin: &Pubkey) -> Result<()> {
    require!(*admin != Pubkey::default(), CleanupError::InvalidParameter);

    Ok(())
}

/// Вычисляет долю от суммы по ставке в базисных пунктах
pub fn calculate_cut(total: u64, rate_bps: u16) -> Result<u64> {
    let cut = (total as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(CleanupError::ArithmeticError)?
        .checked_div(10_000)
        .ok_or(CleanupError::ArithmeticError)?;

    // Проверяем переполнение при обратном преобразовании в u64
    if cut > u64::MAX as u128 {
        return Err(CleanupError::ArithmeticError.into());
    }

    Ok(cut as u64)
}

/// Разбивает возвращенную сумму на доли казны и реферреров.
/// Остаток от целочисленного деления всегда достается казне,
/// поэтому сумма четырех частей в точности равна исходной.
pub fn split_reclaimed(
    total: u64,
    platform_fee_bps: u16,
    tier1_share_bps: u16,
    tier2_share_bps: u16,
) -> Result<DistributionSplit> {
    let platform_cut = calculate_cut(total, platform_fee_bps)?;
    let tier1_cut = calculate_cut(total, tier1_share_bps)?;
    let tier2_cut = calculate_cut(total, tier2_share_bps)?;

    let remainder = total
        .checked_sub(platform_cut)
        .ok_or(CleanupError::ArithmeticError)?
        .checked_sub(tier1_cut)
        .ok_or(CleanupError::ArithmeticError)?
        .checked_sub(tier2_cut)
        .ok_or(CleanupError::ArithmeticError)?;

    Ok(DistributionSplit {
        platform_cut,
        tier1_cut,
        tier2_cut,
        remainder,
    })
}

/// Проверяет, что аккаунт действительно является пустым токен-аккаунтом
/// вызывающего. Ошибка означает, что аккаунт будет пропущен при очистке,
/// а не прерывание всей инструкции.
pub fn verify_holding_account(
    account_info: &AccountInfo,
    expected_owner: &Pubkey,
    token_program_id: &Pubkey,
) -> Result<()> {
    require!(
        account_info.owner == token_program_id,
        CleanupError::AccountIneligible
    );

    let data = account_info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    let token_account = TokenAccount::try_deserialize(&mut slice)
        .map_err(|_| error!(CleanupError::AccountIneligible))?;

    require!(
        token_account.owner == *expected_owner,
        CleanupError::AccountIneligible
    );
    require!(token_account.amount == 0, CleanupError::AccountIneligible);

    Ok(())
}

/// Перевод лампортов от подписанта к получателю
pub fn transfer_lamports<'info>(
    from: &Signer<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    system_program: &Program<'info, System>,
) -> Result<()> {
    let transfer_ix = system_instruction::transfer(from.key, to.key, amount);
    invoke(
        &transfer_ix,
        &[
            from.to_account_info(),
            to.clone(),
            system_program.to_account_info(),
        ],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_matches_expected_scenario() {
        // Ставки 20% / 50% / 20%, возвращено 1_000_000 лампортов
        let split = split_reclaimed(1_000_000, 2000, 5000, 2000).unwrap();

        assert_eq!(split.platform_cut, 200_000);
        assert_eq!(split.tier1_cut, 500_000);
        assert_eq!(split.tier2_cut, 200_000);
        assert_eq!(split.remainder, 100_000);
    }

    #[test]
    fn split_conserves_total() {
        for total in [0u64, 1, 3, 999, 10_001, 1_000_000, u64::MAX / 2] {
            let split = split_reclaimed(total, 2000, 5000, 2000).unwrap();
            let sum = split.platform_cut + split.tier1_cut + split.tier2_cut + split.remainder;
            assert_eq!(sum, total);
        }
    }

    #[test]
    fn split_handles_truncation() {
        // 7 лампортов при ставке 33.33% дают 2 лампорта, остаток в казну
        let split = split_reclaimed(7, 3333, 3333, 3333).unwrap();

        assert_eq!(split.platform_cut, 2);
        assert_eq!(split.tier1_cut, 2);
        assert_eq!(split.tier2_cut, 2);
        assert_eq!(split.remainder, 1);
    }

    #[test]
    fn split_of_zero_is_zero() {
        let split = split_reclaimed(0, 2000, 5000, 2000).unwrap();

        assert_eq!(split.platform_cut, 0);
        assert_eq!(split.tier1_cut, 0);
        assert_eq!(split.tier2_cut, 0);
        assert_eq!(split.remainder, 0);
    }

    #[test]
    fn treasury_receives_folded_tier2() {
        // Второй уровень не указан: его доля и остаток идут в казну
        let split = split_reclaimed(1_000_000, 2000, 5000, 2000).unwrap();
        let treasury = split.platform_cut + split.remainder + split.tier2_cut;

        assert_eq!(treasury, 500_000);
        assert_eq!(split.tier1_cut, 500_000);
    }

    #[test]
    fn rates_above_limit_are_rejected() {
        assert!(validate_rates(10_001, 0, 0).is_err());
        assert!(validate_rates(0, 10_001, 0).is_err());
        assert!(validate_rates(0, 0, 10_001).is_err());
    }

    #[test]
    fn rate_sum_above_limit_is_rejected() {
        // По отдельности ставки допустимы, но в сумме превышают 100%
        assert!(validate_rates(6000, 6000, 6000).is_err());
        assert!(validate_rates(4000, 4000, 2001).is_err());
    }

    #[test]
    fn valid_rates_are_accepted() {
        assert!(validate_rates(2000, 5000, 2000).is_ok());
        assert!(validate_rates(0, 0, 0).is_ok());
        assert!(validate_rates(10_000, 0, 0).is_ok());
        assert!(validate_rates(4000, 4000, 2000).is_ok());
    }

    #[test]
    fn code_length_bounds_are_in_bytes() {
        assert!(validate_code("").is_err());
        assert!(validate_code("a").is_ok());
        assert!(validate_code("abcde12345").is_ok());
        assert!(validate_code("abcde123456").is_err());
        // Кириллический код занимает два байта на символ
        assert!(validate_code("кусто").is_ok());
        assert!(validate_code("кустод").is_err());
    }

    #[test]
    fn default_admin_key_is_rejected() {
        assert!(validate_admin(&Pubkey::default()).is_err());
        assert!(validate_admin(&Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn cut_uses_full_rate_range() {
        assert_eq!(calculate_cut(1_000_000, 0).unwrap(), 0);
        assert_eq!(calculate_cut(1_000_000, 10_000).unwrap(), 1_000_000);
        // Промежуточные вычисления в u128 не переполняются
        assert_eq!(calculate_cut(u64::MAX, 10_000).unwrap(), u64::MAX);
    }
}
