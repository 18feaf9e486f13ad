use super::*;

#[test]
fn provider_identities_are_fixed() {
    let google = AuthProvider::Google.identity(42);
    assert_eq!(google.id, "google_42");
    assert_eq!(google.email, "user@gmail.com");
    assert_eq!(google.name, "Google User");
    assert_eq!(google.avatar, "/placeholder.svg?height=40&width=40&text=GU");
    assert_eq!(AuthProvider::Apple.identity(0).email, "user@icloud.com");
    assert_eq!(AuthProvider::Github.identity(0).email, "user@github.com");
    assert_eq!(AuthProvider::Twitter.identity(0).email, "user@twitter.com");
}

#[test]
fn social_account_starts_free_and_verified() {
    let user = User::from_identity(AuthProvider::Github, AuthProvider::Github.identity(7), 7);
    assert_eq!(user.plan, PlanTier::Free);
    assert!(user.verified);
    assert_eq!(user.provider, Some(AuthProvider::Github));
    assert_eq!(user.usage, UsageCounters::default());
    assert!(!user.preferences.biometric_enabled);
}

#[test]
fn mock_login_uses_entered_email() {
    let user = User::mock_login("a@b.co", 1);
    assert_eq!(user.id, "user-123");
    assert_eq!(user.name, "Creative User");
    assert_eq!(user.email, "a@b.co");
}

#[test]
fn registered_user_takes_initial_and_style() {
    let user = User::registered("maya", "maya@x.io", StylePreset::Noir, 99);
    assert_eq!(user.id, "user-99");
    assert!(user.avatar.ends_with("text=M"));
    assert_eq!(user.preferences.default_style, StylePreset::Noir);
}

#[test]
fn initials_take_first_two_words() {
    let user = User::registered("sarah jane miller", "s@x.io", StylePreset::Cinematic, 0);
    assert_eq!(user.initials(), "SJ");
}

#[test]
fn apply_profile_replaces_editable_fields() {
    let mut user = User::mock_login("a@b.co", 1);
    let mut update = ProfileUpdate::from_user(&user);
    update.name = " New Name ".to_owned();
    update.preferences.theme = Theme::Dark;
    user.apply_profile(&update);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.preferences.theme, Theme::Dark);
    assert_eq!(user.id, "user-123");
}

#[test]
fn persisted_blob_is_camel_case() {
    let user = User::from_identity(AuthProvider::Google, AuthProvider::Google.identity(5), 5);
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["createdAtMs"], 5);
    assert_eq!(json["preferences"]["defaultStyle"], "cinematic");
    assert_eq!(json["usage"]["aiGenerations"], 0);
    assert_eq!(json["provider"], "google");
    let back: User = serde_json::from_value(json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn theme_slug_roundtrip() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_slug(theme.slug()), Some(theme));
    }
}
