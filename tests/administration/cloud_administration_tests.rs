use std::sync::Arc;

use postgres_operator::administration::infrastructure::persistence::repositories::{
    cloud::azure_postgres_database_administration_repository_impl::AzurePostgresDatabaseAdministrationRepositoryImpl,
    postgres::default_postgres_database_administration_repository_impl::DefaultPostgresDatabaseAdministrationRepositoryImpl,
    postgres_database_administration_repository::PostgresDatabaseAdministrationRepository,
};

use crate::support::{
    ADMIN_USER, RecordingServerConnection, SimulatedPostgresServer, recording_harness,
    simulated_harness, test_span,
};

#[tokio::test]
async fn only_aws_grants_new_group_roles_to_the_admin() {
    let aws = simulated_harness(SimulatedPostgresServer::superuser(ADMIN_USER), "AWS");
    let default = simulated_harness(SimulatedPostgresServer::superuser(ADMIN_USER), "");

    aws.administration
        .create_group_role("reader_role")
        .await
        .expect("aws create");
    default
        .administration
        .create_group_role("reader_role")
        .await
        .expect("default create");

    assert!(aws.connection.has_role("reader_role"));
    assert!(default.connection.has_role("reader_role"));
    assert!(aws.connection.is_member("reader_role", ADMIN_USER));
    assert!(!default.connection.is_member("reader_role", ADMIN_USER));
}

#[tokio::test]
async fn cloud_type_is_matched_exactly() {
    let harness = recording_harness(RecordingServerConnection::new(ADMIN_USER), "aws");

    harness
        .administration
        .create_group_role("reader_role")
        .await
        .expect("create");

    assert_eq!(
        harness.connection.statements(),
        vec![r#"CREATE ROLE "reader_role""#.to_string()]
    );
}

#[tokio::test]
async fn aws_can_hand_databases_to_roles_on_a_restricted_server() {
    let aws = simulated_harness(SimulatedPostgresServer::restricted("rds_admin", "rds_admin"), "AWS");
    let default =
        simulated_harness(SimulatedPostgresServer::restricted("rds_admin", "rds_admin"), "");

    for harness in [&aws, &default] {
        harness
            .administration
            .create_group_role("appdb-group")
            .await
            .expect("group role");
    }

    aws.administration
        .create_database("appdb", "appdb-group")
        .await
        .expect("aws may change the owner");
    let error = default
        .administration
        .create_database("appdb", "appdb-group")
        .await
        .expect_err("a non-member may not change the owner");

    assert_eq!(
        aws.connection.database_owner("appdb").as_deref(),
        Some("appdb-group")
    );
    assert_eq!(error.code(), Some("42501"));
}

#[tokio::test]
async fn aws_grants_the_login_role_before_setting_it_as_default() {
    let harness = recording_harness(RecordingServerConnection::new("rds_admin"), "AWS");

    harness
        .administration
        .alter_default_login_role("svc_user", "appdb-writer")
        .await
        .expect("alter");

    assert_eq!(
        harness.connection.statements(),
        vec![
            r#"GRANT "svc_user" TO "rds_admin""#.to_string(),
            r#"ALTER USER "svc_user" SET ROLE "appdb-writer""#.to_string(),
        ]
    );
}

#[tokio::test]
async fn aws_drops_roles_it_was_granted() {
    let server = SimulatedPostgresServer::restricted("rds_admin", "rds_admin");
    let harness = simulated_harness(server, "AWS");
    let span = test_span();
    let administration = &harness.administration;

    administration.create_group_role("appdb-group").await.expect("owner");
    administration.create_group_role("appdb-reader").await.expect("reader");
    administration
        .create_database("appdb", "appdb-group")
        .await
        .expect("database");

    administration
        .drop_role("appdb-reader", "appdb-group", "appdb", &span)
        .await
        .expect("drop reader");
    administration
        .drop_role("appdb-group", "rds_admin", "appdb", &span)
        .await
        .expect("drop owner");
    administration
        .drop_role("appdb-group", "rds_admin", "appdb", &span)
        .await
        .expect("second drop is a no-op");

    assert!(!harness.connection.has_role("appdb-reader"));
    assert!(!harness.connection.has_role("appdb-group"));
    assert_eq!(
        harness.connection.database_owner("appdb").as_deref(),
        Some("rds_admin")
    );
}

#[tokio::test]
async fn default_variant_cannot_reassign_on_a_restricted_server() {
    let server = SimulatedPostgresServer::restricted("rds_admin", "rds_admin")
        .with_role("appdb-group")
        .with_role("appdb-old")
        .with_database("appdb", "appdb-old");
    let harness = simulated_harness(server, "");

    let error = harness
        .administration
        .drop_role("appdb-old", "appdb-group", "appdb", &test_span())
        .await
        .expect_err("reassign requires membership");

    assert_eq!(error.code(), Some("42501"));
    assert!(harness.connection.has_role("appdb-old"));
}

#[tokio::test]
async fn azure_logins_carry_the_server_name() {
    let harness = recording_harness(RecordingServerConnection::new("admin@myserver"), "Azure");

    let login = harness
        .administration
        .create_user_role("svc_user", "pw")
        .await
        .expect("create");
    harness
        .administration
        .create_group_role("appdb-reader")
        .await
        .expect("group role");

    assert_eq!(login, "svc_user@myserver");
    assert_eq!(harness.administration.user(), "admin@myserver");
    assert_eq!(
        harness.connection.statements()[2],
        r#"GRANT "appdb-reader" TO "admin""#
    );
}

#[tokio::test]
async fn azure_without_server_suffix_uses_plain_names() {
    let connection = Arc::new(RecordingServerConnection::new("azure_admin"));
    let azure = AzurePostgresDatabaseAdministrationRepositoryImpl::new(
        DefaultPostgresDatabaseAdministrationRepositoryImpl::new(connection),
    );

    let login = azure.create_user_role("svc_user", "pw").await.expect("create");

    assert_eq!(azure.bootstrap_role(), "azure_admin");
    assert_eq!(login, "svc_user");
}

#[tokio::test]
async fn azure_exposes_server_side_bootstrap_role() {
    let harness = recording_harness(RecordingServerConnection::new("admin@myserver"), "Azure");

    assert_eq!(harness.administration.user(), "admin@myserver");
    assert_eq!(harness.administration.bootstrap_role(), "admin");
}

#[tokio::test]
async fn cloud_variants_look_roles_up_through_the_base() {
    for cloud in ["AWS", "Azure", "GCP"] {
        let server = SimulatedPostgresServer::superuser(ADMIN_USER).with_role("svc-abcde");
        let harness = simulated_harness(server, cloud);

        assert!(harness.administration.role_exists("svc-abcde").await.expect("lookup"));
        assert!(!harness.administration.role_exists("svc-zzzzz").await.expect("lookup"));
    }
}

#[tokio::test]
async fn azure_drops_roles_through_the_bootstrap_role() {
    let server = SimulatedPostgresServer::restricted("admin@myserver", "admin")
        .with_role("appdb-group")
        .with_role("svc_user");
    let harness = simulated_harness(server, "Azure");

    harness
        .administration
        .drop_role("svc_user", "appdb-group", "appdb", &test_span())
        .await
        .expect("drop");

    assert!(!harness.connection.has_role("svc_user"));
    assert!(harness.connection.is_member("appdb-group", "admin"));
}

#[tokio::test]
async fn gcp_takes_over_database_owner_before_dropping() {
    let gcp_server = SimulatedPostgresServer::restricted("gcp_admin", "gcp_admin")
        .with_role("legacy_owner")
        .with_database("legacydb", "legacy_owner");
    let default_server = SimulatedPostgresServer::restricted("gcp_admin", "gcp_admin")
        .with_role("legacy_owner")
        .with_database("legacydb", "legacy_owner");
    let gcp = simulated_harness(gcp_server, "GCP");
    let default = simulated_harness(default_server, "");
    let span = test_span();

    for _ in 0..2 {
        gcp.administration
            .drop_database("legacydb", &span)
            .await
            .expect("gcp drop");
    }
    let error = default
        .administration
        .drop_database("legacydb", &span)
        .await
        .expect_err("only owners may drop");

    assert_eq!(gcp.connection.database_owner("legacydb"), None);
    assert_eq!(error.code(), Some("42501"));
}

#[tokio::test]
async fn gcp_never_drops_reserved_roles() {
    let harness = recording_harness(RecordingServerConnection::new("gcp_admin"), "GCP");
    let span = test_span();

    for role in ["cloudsqlsuperuser", "cloudsqladmin", "gcp_admin"] {
        harness
            .administration
            .drop_role(role, "appdb-group", "appdb", &span)
            .await
            .expect("reserved roles are skipped");
    }

    assert!(harness.connection.statements().is_empty());
}

#[tokio::test]
async fn every_variant_reports_the_connection_identity() {
    for cloud_type in ["AWS", "Azure", "GCP", ""] {
        let harness = recording_harness(RecordingServerConnection::new(ADMIN_USER), cloud_type);
        let administration: &dyn PostgresDatabaseAdministrationRepository =
            harness.administration.as_ref();

        assert_eq!(administration.user(), ADMIN_USER);
        assert_eq!(administration.default_database(), "postgres");
    }
}
