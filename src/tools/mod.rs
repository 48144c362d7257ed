//! MCP tools for the Clay contact network.
//!
//! - **params**: Typed parameter structs (schema, defaults, wire format)
//! - **registry**: Tool definitions and name lookup
//! - **catalog**: The fixed Clay tool set
//! - **validation**: Argument checking and schema generation

pub mod catalog;
pub mod params;
pub mod registry;
pub mod validation;

pub use params::{
    AggregateParams, ContactSearchParams, CreateContactParams, CreateGroupParams,
    CreateNoteParams, DateRangeParams, GetContactParams, GetGroupsParams, UpdateGroupParams,
};
pub use registry::{ToolDefinition, ToolRegistry};
