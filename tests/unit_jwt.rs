use courseloop::config::jwt::JwtConfig;
use courseloop::modules::users::model::UserRole;
use courseloop::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

#[test]
fn test_create_and_verify_token() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "test@example.com";

    let token = create_access_token(user_id, email, UserRole::Student, &jwt_config).unwrap();
    assert!(!token.is_empty());

    let claims = verify_token(&token, &jwt_config).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, UserRole::Student);
}

#[test]
fn test_token_round_trips_all_roles() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    for role in [UserRole::Student, UserRole::Instructor, UserRole::Admin] {
        let token = create_access_token(user_id, "test@example.com", role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token =
        create_access_token(user_id, "test@example.com", UserRole::Student, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        token_expiry: 3600,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_verify_expired_token() {
    // Negative lifetime puts exp far enough in the past to clear the
    // validator's default leeway.
    let expired_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: -120,
    };

    let token = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        &expired_config,
    )
    .unwrap();

    assert!(verify_token(&token, &expired_config).is_err());
}

#[test]
fn test_expired_and_tampered_fail_the_same_way() {
    let jwt_config = get_test_jwt_config();
    let expired_config = JwtConfig {
        token_expiry: -120,
        ..get_test_jwt_config()
    };

    let expired = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        &expired_config,
    )
    .unwrap();
    let tampered = {
        let mut token =
            create_access_token(Uuid::new_v4(), "test@example.com", UserRole::Student, &jwt_config)
                .unwrap();
        token.push('x');
        token
    };

    let expired_err = verify_token(&expired, &jwt_config).unwrap_err();
    let tampered_err = verify_token(&tampered, &jwt_config).unwrap_err();

    // Uniform result: callers cannot tell the failure modes apart.
    assert_eq!(expired_err.status, tampered_err.status);
    assert_eq!(
        expired_err.error.to_string(),
        tampered_err.error.to_string()
    );
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "invalid.token.here",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, &jwt_config).is_err(), "token: {token:?}");
    }
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        &jwt_config,
    )
    .unwrap();

    let claims = verify_token(&token, &jwt_config).unwrap();
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.token_expiry as usize);
}

#[test]
fn test_different_users_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 =
        create_access_token(user_id1, "user1@example.com", UserRole::Student, &jwt_config).unwrap();
    let token2 =
        create_access_token(user_id2, "user2@example.com", UserRole::Student, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();
    assert_eq!(claims1.sub, user_id1.to_string());
    assert_eq!(claims2.sub, user_id2.to_string());
}
