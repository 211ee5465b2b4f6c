//! Read-only functional tests for PortalOps
//!
//! These tests verify that read operations work correctly against a real
//! portal. They do not modify any data and are safe to run against any
//! environment.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Status Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_shows_session() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("PortalOps Session Status"));
}

// ============================================================================
// Instance Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_instance_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    // May return an empty table, but should succeed
    ctx.run(&["instance", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_instance_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["instance", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_instance_list_admin_scope() {
    let ctx = FunctionalTestContext::new();

    // Passes with a warning when the account is not staff
    ctx.run_admin_dependent(&["instance", "list", "--admin"]);
}

// ============================================================================
// Network Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_network_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["network", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_network_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["network", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

// ============================================================================
// Floating IP Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["floating-ip", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["floating-ip", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_inventory_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["floating-ip", "inventory"]).success();
}

// ============================================================================
// Project Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    // Should return at least the signed-in project
    ctx.run(&["project", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["project", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_project_packages_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["project", "packages"]).success();
}

// ============================================================================
// User Commands (admin)
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    // Passes with a warning when the account is not staff
    ctx.run_admin_dependent(&["user", "list"]);
}

// ============================================================================
// Overview Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_overview_limits_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["overview", "limits"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_overview_limits_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["overview", "limits", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_overview_resources_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["overview", "resources"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_overview_summary_admin_only() {
    let ctx = FunctionalTestContext::new();

    // Passes with a warning when the account is not staff
    ctx.run_admin_dependent(&["overview", "summary"]);
}

// ============================================================================
// Version Command (Local-only)
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_version_shows_version() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["version"])
        .success()
        .stdout(predicate::str::contains("portalops"));
}

// ============================================================================
// Help Command (Local-only)
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_help_shows_commands() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["--help"])
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("instance"))
        .stdout(predicate::str::contains("network"))
        .stdout(predicate::str::contains("floating-ip"));
}

// ============================================================================
// Completion Command (Local-only)
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_completion_bash() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["completion", "bash"])
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_completion_zsh() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["completion", "zsh"])
        .success()
        .stdout(predicate::str::contains("compdef"));
}
