// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod commit_sha;
mod id;
mod token;

pub use commit_sha::{CommitSha, CommitShaError};
pub use id::{Deployment, DeploymentId, Id, Project, ProjectId, Resource, Team, TeamId};
pub use token::AccessToken;
