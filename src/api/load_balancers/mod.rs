//! Load balancers

mod api;
pub mod commands;
mod models;

pub use models::{CreateLoadBalancerRequest, ForwardingRule, HealthCheck, LoadBalancer};
