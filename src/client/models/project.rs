//! Project and package models

use serde::{Deserialize, Serialize};

/// A project (tenant) visible to the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: i64,

    /// Project name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Subscribed VPS package
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub package: Option<ProjectType>,
}

/// The package a project subscribes to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectType {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
}

/// Full project record from the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: i64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub package: Option<ProjectType>,
}

/// A VPS package available for subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPackage {
    /// Package ID, sent as `project_type_id` when changing packages
    pub id: i64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<u32>,

    /// RAM in MiB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,

    /// Disk in GiB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u32>,
}
