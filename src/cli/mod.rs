//! CLI argument parsing

mod common;
pub mod run;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::api::ForwardingRule;
use crate::output::DisplayOpts;

pub use common::OutputFormat;

/// Nimbus Cloud CLI
#[derive(Parser, Debug)]
#[command(name = "nimbusctl")]
#[command(version)]
#[command(about = "Manage Nimbus Cloud resources from the command line", long_about = None)]
pub struct Cli {
    /// API access token (overrides NIMBUS_ACCESS_TOKEN and the config file)
    #[arg(short = 't', long, global = true)]
    pub access_token: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Comma-separated list of columns for text output
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Omit the header row from text output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(short = 'f', long, global = true, default_value_t = false)]
    pub force: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Account details and billing balance
    Account {
        #[command(subcommand)]
        cmd: AccountCmd,
    },
    /// Inspect and wait for asynchronous actions
    Actions {
        #[command(subcommand)]
        cmd: ActionsCmd,
    },
    /// Compute servers
    Servers {
        #[command(subcommand)]
        cmd: ServersCmd,
    },
    /// DNS domains and records
    Domains {
        #[command(subcommand)]
        cmd: DomainsCmd,
    },
    /// Block storage volumes
    Volumes {
        #[command(subcommand)]
        cmd: VolumesCmd,
    },
    /// Load balancers
    LoadBalancers {
        #[command(subcommand)]
        cmd: LoadBalancersCmd,
    },
    /// Managed Kubernetes clusters
    Kubernetes {
        #[command(subcommand)]
        cmd: KubernetesCmd,
    },
    /// Managed database clusters
    Databases {
        #[command(subcommand)]
        cmd: DatabasesCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCmd {
    /// Show the authenticated account
    Get,
    /// Show the billing balance
    Balance,
}

#[derive(Subcommand, Debug)]
pub enum ActionsCmd {
    /// List recent actions
    List,
    /// Show one action
    Get { id: u64 },
    /// Block until an action reaches a terminal state
    Wait {
        id: u64,
        /// Poll interval in seconds
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServersCmd {
    /// List servers
    List {
        /// Only servers carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one server
    Get { id: u64 },
    /// Create a server
    Create {
        name: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        size: String,
        #[arg(long)]
        image: String,
        /// SSH key fingerprints to install
        #[arg(long = "ssh-key")]
        ssh_keys: Vec<String>,
        /// Enable automated backups
        #[arg(long, default_value_t = false)]
        backups: bool,
        /// Tags to apply
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a server
    Delete { id: u64 },
    /// Reboot a server
    Reboot {
        id: u64,
        /// Block until the action completes
        #[arg(long, default_value_t = false)]
        wait: bool,
    },
    /// Power a server off
    PowerOff {
        id: u64,
        #[arg(long, default_value_t = false)]
        wait: bool,
    },
    /// Power a server on
    PowerOn {
        id: u64,
        #[arg(long, default_value_t = false)]
        wait: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DomainsCmd {
    /// List domains
    List,
    /// Show one domain
    Get { name: String },
    /// Create a domain
    Create {
        name: String,
        /// Create an apex A record pointing at this address
        #[arg(long)]
        ip_address: Option<String>,
    },
    /// Delete a domain and all of its records
    Delete { name: String },
    /// Manage DNS records of a domain
    Records {
        domain: String,
        #[command(subcommand)]
        cmd: RecordsCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordsCmd {
    /// List records
    List,
    /// Create a record
    Create(RecordArgs),
    /// Update a record in place
    Update {
        id: u64,
        #[command(flatten)]
        args: RecordArgs,
    },
    /// Delete a record
    Delete { id: u64 },
}

/// Record fields shared by create and update
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    /// Record type (A, AAAA, CNAME, MX, TXT, SRV, NS)
    #[arg(long = "type")]
    pub record_type: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub data: Option<String>,
    #[arg(long)]
    pub priority: Option<u16>,
    #[arg(long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub ttl: Option<u32>,
    #[arg(long)]
    pub weight: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum VolumesCmd {
    /// List volumes
    List,
    /// Show one volume
    Get { id: String },
    /// Create a volume
    Create {
        name: String,
        #[arg(long)]
        region: String,
        /// Size in gigabytes
        #[arg(long)]
        size: u64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "fs-type")]
        filesystem_type: Option<String>,
    },
    /// Delete a volume
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum LoadBalancersCmd {
    /// List load balancers
    List,
    /// Show one load balancer
    Get { id: String },
    /// Create a load balancer
    Create {
        name: String,
        #[arg(long)]
        region: String,
        /// Forwarding rule, e.g. entry_protocol:https,entry_port:443,target_protocol:http,target_port:8080
        #[arg(long = "forwarding-rule", required = true)]
        forwarding_rules: Vec<ForwardingRule>,
        #[arg(long)]
        algorithm: Option<String>,
        /// Servers to attach
        #[arg(long = "server-id")]
        server_ids: Vec<u64>,
    },
    /// Delete a load balancer
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum KubernetesCmd {
    /// List clusters
    List,
    /// Show one cluster
    Get { id: String },
    /// Delete a cluster
    Delete { id: String },
    /// Print a cluster's kubeconfig to stdout
    Kubeconfig { id: String },
}

#[derive(Subcommand, Debug)]
pub enum DatabasesCmd {
    /// List database clusters
    List,
    /// Show one database cluster
    Get { id: String },
    /// Create a database cluster
    Create {
        name: String,
        #[arg(long)]
        engine: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        size: String,
        #[arg(long, default_value_t = 1)]
        num_nodes: u32,
        #[arg(long)]
        version: Option<String>,
    },
    /// Delete a database cluster
    Delete { id: String },
}

impl Cli {
    /// Command path for config-file lookups, most general first
    pub fn command_path(&self) -> Vec<&'static str> {
        match &self.command {
            Command::Account { cmd } => match cmd {
                AccountCmd::Get => vec!["account", "get"],
                AccountCmd::Balance => vec!["account", "balance"],
            },
            Command::Actions { cmd } => match cmd {
                ActionsCmd::List => vec!["actions", "list"],
                ActionsCmd::Get { .. } => vec!["actions", "get"],
                ActionsCmd::Wait { .. } => vec!["actions", "wait"],
            },
            Command::Servers { cmd } => match cmd {
                ServersCmd::List { .. } => vec!["servers", "list"],
                ServersCmd::Get { .. } => vec!["servers", "get"],
                ServersCmd::Create { .. } => vec!["servers", "create"],
                ServersCmd::Delete { .. } => vec!["servers", "delete"],
                ServersCmd::Reboot { .. } => vec!["servers", "reboot"],
                ServersCmd::PowerOff { .. } => vec!["servers", "power-off"],
                ServersCmd::PowerOn { .. } => vec!["servers", "power-on"],
            },
            Command::Domains { cmd } => match cmd {
                DomainsCmd::List => vec!["domains", "list"],
                DomainsCmd::Get { .. } => vec!["domains", "get"],
                DomainsCmd::Create { .. } => vec!["domains", "create"],
                DomainsCmd::Delete { .. } => vec!["domains", "delete"],
                DomainsCmd::Records { cmd, .. } => match cmd {
                    RecordsCmd::List => vec!["domains", "records", "list"],
                    RecordsCmd::Create(_) => vec!["domains", "records", "create"],
                    RecordsCmd::Update { .. } => vec!["domains", "records", "update"],
                    RecordsCmd::Delete { .. } => vec!["domains", "records", "delete"],
                },
            },
            Command::Volumes { cmd } => match cmd {
                VolumesCmd::List => vec!["volumes", "list"],
                VolumesCmd::Get { .. } => vec!["volumes", "get"],
                VolumesCmd::Create { .. } => vec!["volumes", "create"],
                VolumesCmd::Delete { .. } => vec!["volumes", "delete"],
            },
            Command::LoadBalancers { cmd } => match cmd {
                LoadBalancersCmd::List => vec!["load-balancers", "list"],
                LoadBalancersCmd::Get { .. } => vec!["load-balancers", "get"],
                LoadBalancersCmd::Create { .. } => vec!["load-balancers", "create"],
                LoadBalancersCmd::Delete { .. } => vec!["load-balancers", "delete"],
            },
            Command::Kubernetes { cmd } => match cmd {
                KubernetesCmd::List => vec!["kubernetes", "list"],
                KubernetesCmd::Get { .. } => vec!["kubernetes", "get"],
                KubernetesCmd::Delete { .. } => vec!["kubernetes", "delete"],
                KubernetesCmd::Kubeconfig { .. } => vec!["kubernetes", "kubeconfig"],
            },
            Command::Databases { cmd } => match cmd {
                DatabasesCmd::List => vec!["databases", "list"],
                DatabasesCmd::Get { .. } => vec!["databases", "get"],
                DatabasesCmd::Create { .. } => vec!["databases", "create"],
                DatabasesCmd::Delete { .. } => vec!["databases", "delete"],
            },
        }
    }
}

/// Resolved per-invocation state handed to command handlers
#[derive(Debug)]
pub struct CommandContext {
    pub display: DisplayOpts,
    pub force: bool,
    pub poll_interval: Duration,
}
