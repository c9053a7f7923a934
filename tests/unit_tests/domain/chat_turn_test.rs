use lexiscan::domain::TurnRole;

#[test]
fn given_user_role_string_when_mapping_then_maps_to_user() {
    assert_eq!(TurnRole::from_wire("user"), TurnRole::User);
}

#[test]
fn given_any_other_role_string_when_mapping_then_maps_to_assistant() {
    // The mapping is total and case-sensitive: only a lowercase "user" is a
    // user turn, everything else lands on the assistant side.
    for role in ["model", "assistant", "system", "USER", "User", "", "🤖"] {
        assert_eq!(TurnRole::from_wire(role), TurnRole::Assistant, "role: {role:?}");
    }
}

#[test]
fn role_display_matches_wire_names() {
    assert_eq!(TurnRole::User.to_string(), "user");
    assert_eq!(TurnRole::Assistant.to_string(), "assistant");
}
