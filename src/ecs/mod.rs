pub mod api;
pub mod client;
pub mod types;

pub use api::{ContainerInstanceHost, EcsApi, Page, TaskBinding};
pub use client::EcsClient;
pub use types::{HostRecord, ServiceRecord, TaskRecord};
