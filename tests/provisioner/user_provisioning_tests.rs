use postgres_operator::provisioner::domain::{
    model::{
        commands::{
            apply_postgres_user_command::ApplyPostgresUserCommand,
            delete_postgres_user_command::DeletePostgresUserCommand,
        },
        entities::{
            postgres_database::PostgresRoles,
            postgres_user::{PostgresUserSpec, PostgresUserStatus},
        },
        enums::provisioner_domain_error::ProvisionerDomainError,
    },
    services::database_provisioning_command_service::DatabaseProvisioningCommandService,
};

use crate::support::{
    appdb_roles, apply_user_command, converged_user_status, create_harness,
    create_harness_without_roles, user_spec,
};

#[tokio::test]
async fn handle_apply_user_creates_login_and_returns_credentials() {
    let harness = create_harness(&[]);

    let provisioned = harness
        .service
        .handle_apply_user(apply_user_command("READ", PostgresUserStatus::default()))
        .await
        .expect("apply");

    let credentials = provisioned.credentials.expect("new users get credentials");
    assert_eq!(credentials.role, "svc-abcde");
    assert_eq!(credentials.login, "svc-abcde");
    assert_eq!(credentials.password, "Secretpassword1");
    assert_eq!(credentials.database, "appdb");
    assert_eq!(provisioned.status, converged_user_status("appdb-reader"));
    assert_eq!(
        harness.administration.calls(),
        vec![
            "create_user_role svc-abcde Secretpassword1",
            "grant_role appdb-reader svc-abcde",
            "alter_default_login_role svc-abcde appdb-reader",
        ]
    );
}

#[tokio::test]
async fn handle_apply_user_keeps_converged_login() {
    let harness = create_harness(&[]);

    let provisioned = harness
        .service
        .handle_apply_user(apply_user_command(
            "WRITE",
            converged_user_status("appdb-writer"),
        ))
        .await
        .expect("apply");

    assert_eq!(provisioned.credentials, None);
    assert_eq!(
        harness.administration.calls(),
        vec![
            "grant_role appdb-writer svc-abcde",
            "alter_default_login_role svc-abcde appdb-writer",
        ]
    );
}

#[tokio::test]
async fn handle_apply_user_moves_login_between_groups() {
    let harness = create_harness(&[]);

    let provisioned = harness
        .service
        .handle_apply_user(apply_user_command(
            "OWNER",
            converged_user_status("appdb-reader"),
        ))
        .await
        .expect("apply");

    assert_eq!(provisioned.status.postgres_group, "appdb-group");
    assert_eq!(
        harness.administration.calls(),
        vec![
            "revoke_role appdb-reader svc-abcde",
            "grant_role appdb-group svc-abcde",
            "alter_default_login_role svc-abcde appdb-group",
        ]
    );
}

#[tokio::test]
async fn handle_apply_user_reissues_password_after_failed_attempt() {
    let harness = create_harness(&[]);
    let status = PostgresUserStatus {
        succeeded: false,
        ..converged_user_status("appdb-reader")
    };

    let provisioned = harness
        .service
        .handle_apply_user(apply_user_command("READ", status))
        .await
        .expect("apply");

    assert!(provisioned.credentials.is_some());
    assert_eq!(
        harness.administration.calls_starting_with("create_user_role"),
        vec!["create_user_role svc-abcde Secretpassword1"]
    );
}

#[tokio::test]
async fn handle_apply_user_propagates_grant_failures() {
    let harness = create_harness(&["grant_role"]);

    let result = harness
        .service
        .handle_apply_user(apply_user_command("READ", PostgresUserStatus::default()))
        .await;

    assert!(matches!(result, Err(ProvisionerDomainError::Administration(_))));
    assert!(
        harness
            .administration
            .calls_starting_with("alter_default_login_role")
            .is_empty()
    );
    assert_eq!(
        harness.administration.calls_starting_with("drop_role"),
        vec!["drop_role svc-abcde appdb-group appdb"]
    );
}

#[tokio::test]
async fn failed_cleanup_still_reports_the_grant_failure() {
    let harness = create_harness(&["alter_default_login_role", "drop_role"]);

    let result = harness
        .service
        .handle_apply_user(apply_user_command("READ", PostgresUserStatus::default()))
        .await;

    match result {
        Err(ProvisionerDomainError::Administration(error)) => {
            assert!(error.to_string().contains("alter_default_login_role"));
        }
        other => panic!("expected administration error, got {other:?}"),
    }
    assert_eq!(
        harness.administration.calls_starting_with("drop_role"),
        vec!["drop_role svc-abcde appdb-group appdb"]
    );
}

#[tokio::test]
async fn recorded_login_survives_grant_failures() {
    let harness = create_harness(&["grant_role"]);

    let result = harness
        .service
        .handle_apply_user(apply_user_command(
            "WRITE",
            converged_user_status("appdb-reader"),
        ))
        .await;

    assert!(result.is_err());
    assert!(harness.administration.calls_starting_with("drop_role").is_empty());
}

#[tokio::test]
async fn handle_apply_user_recreates_login_dropped_out_of_band() {
    let harness = create_harness_without_roles(&["svc-abcde"]);

    let provisioned = harness
        .service
        .handle_apply_user(apply_user_command(
            "READ",
            converged_user_status("appdb-reader"),
        ))
        .await
        .expect("apply");

    let credentials = provisioned.credentials.expect("recreated logins get credentials");
    assert_eq!(credentials.role, "svc-abcde");
    assert_eq!(provisioned.status, converged_user_status("appdb-reader"));
    assert_eq!(
        harness.administration.calls(),
        vec![
            "create_user_role svc-abcde Secretpassword1",
            "grant_role appdb-reader svc-abcde",
            "alter_default_login_role svc-abcde appdb-reader",
        ]
    );
}

#[test]
fn apply_user_command_requires_provisioned_database() {
    let result = ApplyPostgresUserCommand::new(
        user_spec("READ"),
        PostgresUserStatus::default(),
        PostgresRoles::default(),
    );

    assert!(matches!(
        result,
        Err(ProvisionerDomainError::DatabaseNotProvisioned(database)) if database == "appdb"
    ));
}

#[test]
fn apply_user_command_rejects_invalid_specs() {
    for spec in [
        PostgresUserSpec {
            role: "svc user".to_string(),
            ..user_spec("READ")
        },
        PostgresUserSpec {
            role: "s".repeat(58),
            ..user_spec("READ")
        },
        PostgresUserSpec {
            secret_name: String::new(),
            ..user_spec("READ")
        },
    ] {
        let result = ApplyPostgresUserCommand::new(spec, PostgresUserStatus::default(), appdb_roles());

        assert!(matches!(result, Err(ProvisionerDomainError::InvalidUserSpec(_))));
    }
}

#[tokio::test]
async fn handle_delete_user_hands_objects_to_database_owner() {
    let harness = create_harness(&[]);
    let command = DeletePostgresUserCommand::new(converged_user_status("appdb-reader"), "appdb-group");

    harness
        .service
        .handle_delete_user(command)
        .await
        .expect("delete");

    assert_eq!(
        harness.administration.calls(),
        vec!["drop_role svc-abcde appdb-group appdb"]
    );
}

#[tokio::test]
async fn handle_delete_user_without_role_changes_nothing() {
    let harness = create_harness(&[]);
    let command = DeletePostgresUserCommand::new(PostgresUserStatus::default(), "appdb-group");

    harness
        .service
        .handle_delete_user(command)
        .await
        .expect("delete");

    assert!(harness.administration.calls().is_empty());
}
