use anchor_lang::prelude::*;
use crate::contexts::{InitializeReferral, RegisterPartner};
use crate::errors::CleanupError;
use crate::instructions::code::bind_code;
use crate::instructions::utils::validate_code;
use crate::state::ReferralState;

/// Определяет итогового реферрера нового пользователя.
/// Pubkey::default() служит сентинелом "без реферрера": в этом случае,
/// как и при указании самого админа, пользователь становится корнем,
/// ссылающимся на админа. Любой другой реферрер обязан быть уже
/// зарегистрирован, поэтому циклы в графе структурно невозможны.
fn resolve_referrer(
    user: &Pubkey,
    referrer: Pubkey,
    admin: Pubkey,
    referrer_state: Option<&ReferralState>,
) -> Result<Pubkey> {
    if referrer == Pubkey::default() || referrer == admin {
        return Ok(admin);
    }

    require!(*user != referrer, CleanupError::SelfReferral);

    let state = referrer_state.ok_or(CleanupError::ReferrerNotEnrolled)?;
    require!(state.owner == referrer, CleanupError::ReferrerNotEnrolled);

    Ok(referrer)
}

/// Регистрация пользователя с привязкой к реферреру
pub fn initialize_referral(ctx: Context<InitializeReferral>, referrer: Pubkey) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let admin = ctx.accounts.config.admin;

    require!(
        ctx.accounts.referral_state.owner == Pubkey::default(),
        CleanupError::AlreadyEnrolled
    );

    let resolved = resolve_referrer(
        &user_key,
        referrer,
        admin,
        ctx.accounts.referrer_state.as_deref(),
    )?;

    let referral_state = &mut ctx.accounts.referral_state;
    referral_state.owner = user_key;
    referral_state.referrer = resolved;
    referral_state.registration_time = Clock::get()?.unix_timestamp;
    referral_state.total_reclaimed = 0;
    referral_state.bump = ctx.bumps.referral_state;

    msg!("Пользователь {} зарегистрирован, реферрер: {}", user_key, resolved);
    Ok(())
}

/// Составная операция: регистрация пользователя (если нужна)
/// и закрепление за ним реферального кода
pub fn register_partner(
    ctx: Context<RegisterPartner>,
    code: String,
    referrer: Option<Pubkey>,
) -> Result<()> {
    validate_code(&code)?;

    let user_key = ctx.accounts.user.key();
    let admin = ctx.accounts.config.admin;

    // Регистрируем пользователя, если реферальные данные еще не созданы.
    // Для уже зарегистрированного пользователя переданный реферрер
    // игнорируется: смена реферрера не допускается.
    if ctx.accounts.referral_state.owner == Pubkey::default() {
        let resolved = resolve_referrer(
            &user_key,
            referrer.unwrap_or_default(),
            admin,
            ctx.accounts.referrer_state.as_deref(),
        )?;

        let referral_state = &mut ctx.accounts.referral_state;
        referral_state.owner = user_key;
        referral_state.referrer = resolved;
        referral_state.registration_time = Clock::get()?.unix_timestamp;
        referral_state.total_reclaimed = 0;
        referral_state.bump = ctx.bumps.referral_state;

        msg!("Пользователь {} зарегистрирован, реферрер: {}", user_key, resolved);
    }

    bind_code(
        &mut ctx.accounts.code_mapping,
        &code,
        &ctx.accounts.user,
        &ctx.accounts.treasury,
        &ctx.accounts.system_program,
        ctx.bumps.code_mapping,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrolled(owner: Pubkey, referrer: Pubkey) -> ReferralState {
        ReferralState {
            owner,
            referrer,
            registration_time: 0,
            total_reclaimed: 0,
            bump: 255,
        }
    }

    #[test]
    fn sentinel_resolves_to_admin() {
        let admin = Pubkey::new_unique();
        let user = Pubkey::new_unique();

        let resolved = resolve_referrer(&user, Pubkey::default(), admin, None).unwrap();
        assert_eq!(resolved, admin);
    }

    #[test]
    fn admin_referrer_needs_no_state() {
        let admin = Pubkey::new_unique();
        let user = Pubkey::new_unique();

        let resolved = resolve_referrer(&user, admin, admin, None).unwrap();
        assert_eq!(resolved, admin);
    }

    #[test]
    fn enrolled_referrer_is_accepted() {
        let admin = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let referrer = Pubkey::new_unique();
        let referrer_state = enrolled(referrer, admin);

        let resolved = resolve_referrer(&user, referrer, admin, Some(&referrer_state)).unwrap();
        assert_eq!(resolved, referrer);
    }

    #[test]
    fn self_referral_is_rejected() {
        let admin = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let own_state = enrolled(user, admin);

        assert!(resolve_referrer(&user, user, admin, Some(&own_state)).is_err());
    }

    #[test]
    fn unenrolled_referrer_is_rejected() {
        let admin = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let referrer = Pubkey::new_unique();

        assert!(resolve_referrer(&user, referrer, admin, None).is_err());

        // Чужие реферальные данные регистрацию не подтверждают
        let foreign_state = enrolled(Pubkey::new_unique(), admin);
        assert!(resolve_referrer(&user, referrer, admin, Some(&foreign_state)).is_err());
    }
}
