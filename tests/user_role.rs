use pretty_assertions::assert_eq;
use roomflags::{Role, User};

fn check(user: &User, name: &str, expected: &[(Role, bool)]) {
    for &(role, want) in expected {
        assert_eq!(user.has_role(role), want, "{name}: has_role({role})");
    }
}

#[test]
fn user_roles() {
    let cases: [(&str, Role, &[Role], &[(Role, bool)]); 3] = [
        (
            "assign and check single role",
            Role::NONE,
            &[Role::READ],
            &[(Role::READ, true), (Role::WRITE, false)],
        ),
        (
            "assign and check multiple roles",
            Role::READ,
            &[Role::WRITE, Role::TRIAGE],
            &[
                (Role::READ, true),
                (Role::WRITE, true),
                (Role::TRIAGE, true),
                (Role::ADMIN, false),
            ],
        ),
        (
            "check roles without assignment",
            Role::MAINTAIN,
            &[],
            &[(Role::MAINTAIN, true), (Role::ADMIN, false)],
        ),
    ];

    for (name, initial, assign, expected) in cases {
        let mut user = User::new("TestUser".to_string(), initial);
        for &role in assign {
            user.assign_role(role);
        }
        check(&user, name, expected);
    }
}

#[test]
fn user_role_revocation() {
    let all = Role::READ | Role::WRITE | Role::TRIAGE | Role::MAINTAIN | Role::ADMIN;
    let cases: [(&str, Role, &[Role], &[(Role, bool)]); 4] = [
        (
            "revoke single role",
            Role::READ | Role::WRITE,
            &[Role::READ],
            &[(Role::READ, false), (Role::WRITE, true)],
        ),
        (
            "revoke multiple roles",
            Role::READ | Role::WRITE | Role::TRIAGE | Role::ADMIN,
            &[Role::WRITE, Role::ADMIN],
            &[
                (Role::READ, true),
                (Role::WRITE, false),
                (Role::TRIAGE, true),
                (Role::ADMIN, false),
            ],
        ),
        (
            "revoke role not held",
            Role::READ | Role::TRIAGE,
            &[Role::WRITE],
            &[(Role::READ, true), (Role::WRITE, false), (Role::TRIAGE, true)],
        ),
        (
            "revoke all roles",
            all,
            &[Role::READ, Role::WRITE, Role::TRIAGE, Role::MAINTAIN, Role::ADMIN],
            &[
                (Role::READ, false),
                (Role::WRITE, false),
                (Role::TRIAGE, false),
                (Role::MAINTAIN, false),
                (Role::ADMIN, false),
            ],
        ),
    ];

    for (name, initial, revoke, expected) in cases {
        let mut user = User::new("TestUser".to_string(), initial);
        for &role in revoke {
            user.revoke_role(role);
        }
        check(&user, name, expected);
    }

    let mut user = User::new("TestUser".to_string(), all);
    for role in [Role::READ, Role::WRITE, Role::TRIAGE, Role::MAINTAIN, Role::ADMIN] {
        user.revoke_role(role);
    }
    assert_eq!(user.roles, Role::NONE);
}

#[test]
fn role_string() {
    let cases = [
        (Role::NONE, "None"),
        (Role::READ, "Read"),
        (Role::TRIAGE, "Triage"),
        (Role::WRITE, "Write"),
        (Role::MAINTAIN, "Maintain"),
        (Role::ADMIN, "Admin"),
        (Role::from_bits_retain(64), "Unknown"),
        (Role::READ | Role::WRITE, "Unknown"),
    ];

    for (role, want) in cases {
        assert_eq!(role.to_string(), want);
    }
}

#[test]
fn user_deserializes_unnamed_bits() {
    let user: User = serde_json::from_str(r#"{"name":"octocat","roles":66}"#).unwrap();
    assert_eq!(user.roles.bits(), 66);
    assert!(user.has_role(Role::READ));
    assert_eq!(user.roles.to_string(), "Unknown");
}
