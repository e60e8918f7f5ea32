//! Nimbus API client module
//!
//! Transport, pagination, credential resolution, and one facade module per
//! API resource.

pub mod account;
pub mod actions;
mod client;
pub mod credentials;
pub mod databases;
pub mod domains;
pub mod kubernetes;
pub mod load_balancers;
pub mod meta;
pub mod paginate;
pub mod servers;
mod transport;
pub mod volumes;

use serde::{Deserialize, Serialize};

pub use account::{Account, Balance};
pub use actions::{Action, ActionStatus};
pub use credentials::{resolve_api_url, resolve_token};
pub use databases::{CreateDatabaseRequest, Database};
pub use domains::{CreateRecordRequest, Domain, DomainRecord};
pub use kubernetes::KubernetesCluster;
pub use load_balancers::{CreateLoadBalancerRequest, ForwardingRule, HealthCheck, LoadBalancer};
pub use meta::{ListOpts, PageLinks, RateLimit};
pub use paginate::paginate_all;
pub use servers::{CreateServerRequest, Server};
pub use transport::{Envelope, Transport};
pub use volumes::{CreateVolumeRequest, Volume};

/// Region reference embedded in many resources
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Region {
    pub slug: String,
    pub name: Option<String>,
}

impl Region {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}
