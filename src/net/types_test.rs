use super::*;

// =============================================================
// AuthProvider
// =============================================================

#[test]
fn provider_parses_known_values_case_insensitively() {
    assert_eq!(AuthProvider::from_wire("LOCAL"), AuthProvider::Local);
    assert_eq!(AuthProvider::from_wire("google"), AuthProvider::Google);
    assert_eq!(AuthProvider::from_wire(" Kakao "), AuthProvider::Kakao);
    assert_eq!(AuthProvider::from_wire("NAVER"), AuthProvider::Naver);
    assert_eq!(AuthProvider::from_wire("apple"), AuthProvider::Apple);
}

#[test]
fn provider_unrecognized_is_unknown() {
    assert_eq!(AuthProvider::from_wire("github"), AuthProvider::Unknown);
    assert_eq!(AuthProvider::from_wire(""), AuthProvider::Unknown);
}

#[test]
fn provider_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&AuthProvider::Local).unwrap(), "\"LOCAL\"");
    assert_eq!(serde_json::to_string(&AuthProvider::Unknown).unwrap(), "\"UNKNOWN\"");
}

// =============================================================
// UserIdentity
// =============================================================

#[test]
fn identity_decodes_canonical_shape() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "a@b.com",
        "displayName": "A",
        "provider": "LOCAL"
    }))
    .unwrap();
    assert_eq!(
        user,
        UserIdentity {
            id: 1,
            email: "a@b.com".to_owned(),
            display_name: "A".to_owned(),
            provider: AuthProvider::Local,
            avatar_url: None,
        }
    );
}

#[test]
fn identity_decodes_alias_field_names() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "kim@example.com",
        "name": "Kim",
        "socialType": "KAKAO",
        "profileImageUrl": "https://img.example.com/k.png"
    }))
    .unwrap();
    assert_eq!(user.display_name, "Kim");
    assert_eq!(user.provider, AuthProvider::Kakao);
    assert_eq!(user.avatar_url.as_deref(), Some("https://img.example.com/k.png"));
}

#[test]
fn identity_missing_provider_defaults_to_unknown() {
    let user: UserIdentity =
        serde_json::from_value(serde_json::json!({"id": 3, "email": "x@y.z", "displayName": "X"})).unwrap();
    assert_eq!(user.provider, AuthProvider::Unknown);
}

#[test]
fn identity_accepts_numeric_string_and_integral_float_ids() {
    let from_string: UserIdentity =
        serde_json::from_value(serde_json::json!({"id": "42", "email": "e", "displayName": "d"})).unwrap();
    assert_eq!(from_string.id, 42);
    let from_float: UserIdentity =
        serde_json::from_value(serde_json::json!({"id": 5.0, "email": "e", "displayName": "d"})).unwrap();
    assert_eq!(from_float.id, 5);
}

#[test]
fn identity_rejects_non_numeric_id() {
    let result: Result<UserIdentity, _> =
        serde_json::from_value(serde_json::json!({"id": "abc", "email": "e", "displayName": "d"}));
    assert!(result.is_err());
}

#[test]
fn identity_serializes_canonical_names() {
    let user = UserIdentity {
        id: 1,
        email: "a@b.com".to_owned(),
        display_name: "A".to_owned(),
        provider: AuthProvider::Google,
        avatar_url: None,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["displayName"], "A");
    assert_eq!(json["provider"], "GOOGLE");
    assert!(json.get("name").is_none());
}

// =============================================================
// Requests / responses
// =============================================================

#[test]
fn register_request_uses_camel_case_display_name() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "secret123".to_owned(),
        display_name: "A".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["displayName"], "A");
    assert!(json.get("display_name").is_none());
}

#[test]
fn auth_response_user_and_message_are_optional() {
    let empty: AuthResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(empty, AuthResponse::default());

    let with_message: AuthResponse = serde_json::from_value(serde_json::json!({"message": "welcome"})).unwrap();
    assert_eq!(with_message.message.as_deref(), Some("welcome"));
    assert!(with_message.user.is_none());
}

#[test]
fn provider_label_is_human_readable() {
    assert_eq!(AuthProvider::Kakao.label(), "Kakao");
    assert_eq!(AuthProvider::Local.label(), "Email");
}
