// ABOUTME: Identifiers of platform resources: deployments, projects, and teams.
// ABOUTME: The resource parameter keeps a team id from standing in for a project id.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// Kind of platform resource an [`Id`] points at.
pub trait Resource {
    const KIND: &'static str;
}

pub enum Deployment {}
pub enum Project {}
pub enum Team {}

impl Resource for Deployment {
    const KIND: &'static str = "deployment";
}

impl Resource for Project {
    const KIND: &'static str = "project";
}

impl Resource for Team {
    const KIND: &'static str = "team";
}

/// Opaque identifier issued by the platform. Ids travel as query values or
/// path segments and are never interpreted locally.
#[must_use = "IDs reference platform resources and should not be ignored"]
pub struct Id<R> {
    value: String,
    _resource: PhantomData<R>,
}

impl<R> Id<R> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _resource: PhantomData,
        }
    }

    /// Trimmed id, or `None` for blank input.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        (!value.is_empty()).then(|| Self::new(value))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// R is an uninhabited marker, so Clone and Eq must not be derived.

impl<R> Clone for Id<R> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<R> PartialEq for Id<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Id<R> {}

impl<R: Resource> fmt::Debug for Id<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", R::KIND, self.value)
    }
}

impl<R> fmt::Display for Id<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<'de, R: Resource> Deserialize<'de> for Id<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| D::Error::custom(format!("blank {} id", R::KIND)))
    }
}

pub type DeploymentId = Id<Deployment>;
pub type ProjectId = Id<Project>;
pub type TeamId = Id<Team>;
