//! Error scenario functional tests for PortalOps
//!
//! These tests verify that PortalOps returns appropriate, actionable error
//! messages when operations fail. Good error messages help users understand
//! what went wrong and how to fix it.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Invalid Instance ID Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_instance_action_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&[
        "instance",
        "action",
        "00000000-0000-0000-0000-000000000000",
        "reboot",
    ])
    .failure()
    .stderr(
        predicate::str::contains("not found")
            .or(predicate::str::contains("Not found"))
            .or(predicate::str::contains("error")),
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_instance_console_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["instance", "console", "00000000-0000-0000-0000-000000000000"])
        .failure();
}

// ============================================================================
// Invalid Floating IP Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_floating_ip_release_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&[
        "floating-ip",
        "release",
        "00000000-0000-0000-0000-000000000000",
        "--yes",
    ])
    .failure();
}

// ============================================================================
// Invalid Project Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_project_get_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["project", "get", "999999999"]).failure().stderr(
        predicate::str::contains("not found")
            .or(predicate::str::contains("Not found"))
            .or(predicate::str::contains("error")),
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_non_numeric_project_id_rejected() {
    let ctx = FunctionalTestContext::new();

    // Project IDs are numeric; clap rejects this before any API call
    ctx.run(&["project", "get", "not-a-number"])
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Missing Required Arguments
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_network_create_missing_args_shows_help() {
    let ctx = FunctionalTestContext::new();

    // Missing name and CIDR should show usage
    ctx.run(&["network", "create"]).failure().stderr(
        predicate::str::contains("Usage")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("argument")),
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_assign_missing_vm_shows_help() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["floating-ip", "assign", "ip-1"]).failure().stderr(
        predicate::str::contains("Usage")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("argument")),
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_instance_action_missing_verb_shows_help() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["instance", "action", "vm-1"]).failure().stderr(
        predicate::str::contains("Usage")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("argument")),
    );
}

// ============================================================================
// Invalid Command/Subcommand Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_unknown_command_shows_suggestions() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["unknowncommand"]).failure().stderr(
        predicate::str::contains("Invalid")
            .or(predicate::str::contains("error"))
            .or(predicate::str::contains("unrecognized")),
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_unknown_subcommand_shows_help() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["instance", "unknownsubcommand"]).failure().stderr(
        predicate::str::contains("Invalid")
            .or(predicate::str::contains("error"))
            .or(predicate::str::contains("unrecognized")),
    );
}

// ============================================================================
// Invalid Flag Values
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_invalid_format_value() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["instance", "list", "--format", "xml"])
        .failure()
        .stderr(
            predicate::str::contains("invalid").or(predicate::str::contains("possible values")),
        );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_invalid_instance_action_verb() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["instance", "action", "vm-1", "hibernate"])
        .failure()
        .stderr(
            predicate::str::contains("invalid").or(predicate::str::contains("possible values")),
        );
}

// ============================================================================
// Impersonation Errors (admin)
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_impersonate_non_numeric_user_rejected() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["impersonate", "start", "not-a-number"])
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_impersonate_stop_without_session_is_quiet() {
    let ctx = FunctionalTestContext::new();

    // Stopping when not impersonating is a no-op, not an error
    ctx.run(&["impersonate", "stop"])
        .success()
        .stdout(predicate::str::contains("Not impersonating"));
}

// ============================================================================
// Error Message Quality Tests
// ============================================================================

/// Verify error messages include the problematic identifier for debugging.
#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_error_includes_identifier() {
    let ctx = FunctionalTestContext::new();

    let stderr = ctx.run_failure(&["project", "get", "999999999"]);
    assert!(
        stderr.contains("999999999") || stderr.contains("not found"),
        "Expected identifier or not-found hint, got: {}",
        stderr
    );
}
