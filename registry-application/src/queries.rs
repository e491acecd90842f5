pub mod item_queries;
pub mod resolve_queries;
pub mod route_queries;
pub mod source_queries;
