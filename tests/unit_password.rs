use courseloop::utils::password::{hash_password, verify_password};

// Low bcrypt cost keeps the suite fast; the cost factor does not change the
// verification semantics under test.
const TEST_COST: u32 = 4;

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password(password, TEST_COST).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
    // Modular crypt format: algorithm, cost, salt, and digest in one string.
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_password_correct() {
    let password = "correctpassword";
    let hash = hash_password(password, TEST_COST).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let password = "correctpassword";
    let hash = hash_password(password, TEST_COST).unwrap();

    let result = verify_password("wrongpassword", &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_salts() {
    let password = "samepassword";
    let hash1 = hash_password(password, TEST_COST).unwrap();
    let hash2 = hash_password(password, TEST_COST).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_hash_special_characters() {
    let password = "p@ssw0rd!#$%^&*()";
    let hash = hash_password(password, TEST_COST).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let password = "Password123";
    let hash = hash_password(password, TEST_COST).unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}
