// ABOUTME: Client-side view of the deployments REST API.
// ABOUTME: Wire types, lifecycle states, endpoint URLs, and the HTTP transport seam.

mod endpoints;
mod responses;
mod state;
mod transport;

pub use endpoints::{CURSOR_PARAM, DEFAULT_API_URL, EndpointError, Endpoints, PAGE_SIZE, with_cursor};
pub use responses::{
    ApiError, Cursor, DeploymentDetails, DeploymentList, DeploymentMeta, ListedDeployment,
    Pagination,
};
pub use state::DeploymentState;
pub use transport::{GetRequest, HttpGet, HttpResponse, ReqwestTransport, TransportError};
