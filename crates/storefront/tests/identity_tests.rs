use shared::{
    abstract_trait::JwtServiceTrait,
    config::JwtConfig,
    errors::ServiceError,
};

#[test]
fn access_token_round_trips_the_subject() {
    let jwt = JwtConfig::new("test-secret");

    let token = jwt.generate_token("uid-1234", "access").unwrap();
    let subject = jwt.verify_token(&token, "access").unwrap();

    assert_eq!(subject, "uid-1234");
}

#[test]
fn token_type_mismatch_is_rejected() {
    let jwt = JwtConfig::new("test-secret");

    let token = jwt.generate_token("uid-1234", "refresh").unwrap();
    let err = jwt.verify_token(&token, "access").unwrap_err();

    assert!(matches!(err, ServiceError::InvalidTokenType));
}

#[test]
fn garbage_tokens_are_rejected() {
    let jwt = JwtConfig::new("test-secret");

    let err = jwt.verify_token("not.a.token", "access").unwrap_err();
    assert!(matches!(err, ServiceError::Jwt(_)));
}

#[test]
fn unknown_token_types_cannot_be_issued() {
    let jwt = JwtConfig::new("test-secret");

    let err = jwt.generate_token("uid-1234", "session").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidTokenType));
}

#[test]
fn tokens_signed_with_another_secret_are_rejected() {
    let issuer = JwtConfig::new("secret-a");
    let verifier = JwtConfig::new("secret-b");

    let token = issuer.generate_token("uid-1234", "access").unwrap();
    let err = verifier.verify_token(&token, "access").unwrap_err();

    assert!(matches!(err, ServiceError::Jwt(_)));
}
