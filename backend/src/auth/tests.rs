use super::*;
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_SECRET", "accesssecretforunittesting1234567890");
        env::set_var("JWT_REFRESH_SECRET", "refreshsecretforunittesting1234567890");
        env::set_var("JWT_EXPIRES_IN_SECONDS", "900");
        env::set_var("JWT_REFRESH_EXPIRES_IN_SECONDS", "604800");
    }
}

#[test]
fn test_issued_access_token_validates() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let pair = issue_token_pair(user_id, ROLE_USER).expect("pair should be issued");

    let claims = validate_access_token(&pair.access_token).expect("valid token should pass");
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, ROLE_USER);
}

#[test]
fn test_refresh_token_is_not_a_valid_access_token() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let pair = issue_token_pair(user_id, ROLE_ADMIN).expect("pair should be issued");

    assert!(validate_access_token(&pair.refresh_token).is_err());
    assert!(validate_refresh_token(&pair.refresh_token).is_ok());
}

#[test]
fn test_expired_token_is_rejected() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let token = sign_token(
        user_id,
        ROLE_USER,
        "accesssecretforunittesting1234567890",
        -60,
    )
    .expect("token should sign");

    assert!(validate_access_token(&token).is_err());
}

#[test]
fn test_token_from_wrong_secret_is_rejected() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let token = sign_token(user_id, ROLE_USER, "wrongsecret", 900).expect("token should sign");

    assert!(validate_access_token(&token).is_err());
}

#[test]
fn test_garbage_token_is_rejected() {
    set_env_vars();
    assert!(validate_access_token("not.a.jwt").is_err());
}
