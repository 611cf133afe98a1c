use chatter_core::{AuthError, hash_password, spawn_hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpass";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    let result = verify_password(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect_fails_closed() {
    let hash = hash_password("correctpassword").unwrap();

    let result = verify_password("wrongpassword", &hash);

    assert!(matches!(result, Ok(false)));
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");

    assert!(matches!(result, Err(AuthError::HashVerificationFailure(_))));
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_hash_special_characters() {
    let password = "p@ssw0rd!#$%^&*()";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_hash_unicode_characters() {
    let password = "пароль密码🔒";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_hash_max_length_password() {
    let password = "a".repeat(72);
    let hash = hash_password(&password).unwrap();

    assert!(verify_password(&password, &hash).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let hash = hash_password("Password123").unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}

#[tokio::test]
async fn test_spawned_hash_matches_sync_verify() {
    let hash = spawn_hash_password("offloaded".to_string()).await.unwrap();

    assert!(verify_password("offloaded", &hash).unwrap());
}

#[test]
fn test_hash_rejects_password_over_72_bytes() {
    let password = "a".repeat(73);

    let result = hash_password(&password);

    assert!(matches!(result, Err(AuthError::HashingFailure(_))));
}

#[test]
fn test_verify_rejects_password_sharing_first_72_bytes() {
    let prefix = "a".repeat(72);
    let hash = hash_password(&prefix).unwrap();

    let result = verify_password(&format!("{prefix}totally-different"), &hash);

    assert!(matches!(result, Ok(false)));
}

#[test]
fn test_hash_multibyte_password_counts_bytes() {
    // 25 three-byte characters: 75 bytes.
    let password = "密".repeat(25);

    assert!(matches!(
        hash_password(&password),
        Err(AuthError::HashingFailure(_))
    ));
}
