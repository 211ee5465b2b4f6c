//! Mutation functional tests for PortalOps
//!
//! These tests verify that mutation operations (allocate, assign, release)
//! work correctly against a real portal. Floating IPs allocated here are
//! released automatically; network creation is opt-in because the portal has
//! no delete endpoint for networks.
//!
//! **IMPORTANT**: These tests modify data. Use only against test environments
//! unless you explicitly confirm live usage.

use predicates::prelude::*;

use super::{FunctionalTestContext, TestFloatingIp, test_resource_name};

// ============================================================================
// Floating IP Allocate Tests
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_allocate_and_auto_release() {
    // TestFloatingIp RAII wrapper handles allocation and release
    let ip = TestFloatingIp::allocate();

    if let Some(id) = &ip.id {
        // Verify the address shows up in the project listing
        let ctx = FunctionalTestContext::new();
        let ids = ctx.floating_ip_ids();
        assert!(
            ids.contains(id),
            "Allocated floating IP {} missing from list",
            id
        );
    }
    // The address is released when `ip` goes out of scope
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_release_with_yes_flag() {
    let ctx = FunctionalTestContext::new();
    let before = ctx.floating_ip_ids();

    ctx.run(&["floating-ip", "allocate"]).success();

    let id = match ctx
        .floating_ip_ids()
        .into_iter()
        .find(|id| !before.contains(id))
    {
        Some(id) => id,
        None => {
            eprintln!("\n⚠️  SKIPPED: portal did not report the new floating IP");
            return;
        }
    };

    // Release with --yes to skip the confirmation prompt
    ctx.run(&["floating-ip", "release", &id, "--yes"])
        .success()
        .stdout(predicate::str::contains("✓"));

    // Verify it's gone
    assert!(
        !ctx.floating_ip_ids().contains(&id),
        "Floating IP {} still listed after release",
        id
    );
}

// ============================================================================
// Floating IP Assign Tests
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_floating_ip_assign_and_unassign() {
    let ctx = FunctionalTestContext::new();

    // Assignment needs a running instance to attach to
    let stdout = ctx.run_success(&["instance", "list", "--format", "json"]);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("instance list returned invalid JSON");
    let vm_id = value["data"]
        .as_array()
        .and_then(|rows| rows.first())
        .and_then(|row| row["id"].as_str())
        .map(String::from);

    let vm_id = match vm_id {
        Some(id) => id,
        None => {
            eprintln!("\n⚠️  SKIPPED: project has no instances to assign to");
            return;
        }
    };

    let ip = TestFloatingIp::allocate();
    let ip_id = match &ip.id {
        Some(id) => id.clone(),
        None => {
            eprintln!("\n⚠️  SKIPPED: could not allocate a floating IP");
            return;
        }
    };

    ctx.run(&["floating-ip", "assign", &ip_id, &vm_id])
        .success()
        .stdout(predicate::str::contains("✓"));

    ctx.run(&["floating-ip", "unassign", &ip_id])
        .success()
        .stdout(predicate::str::contains("✓"));
    // RAII releases the address afterwards
}

// ============================================================================
// Network Create Tests (opt-in, leaves residue)
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_network_create_visible_in_list() {
    if std::env::var("PORTALOPS_FUNCTIONAL_ALLOW_NETWORK").as_deref() != Ok("yes") {
        eprintln!(
            "\n⚠️  SKIPPED: network creation leaves residue; set \
             PORTALOPS_FUNCTIONAL_ALLOW_NETWORK=yes to enable"
        );
        return;
    }

    let ctx = FunctionalTestContext::new();
    let name = test_resource_name();

    ctx.run(&["network", "create", &name, "10.77.0.0/24"])
        .success()
        .stdout(predicate::str::contains("✓"));

    ctx.run(&["network", "list"])
        .success()
        .stdout(predicate::str::contains(&name));
}
