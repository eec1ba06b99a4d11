mod discover_name_servers;
mod query_authoritative;
mod resolve_name_server_addresses;

pub use discover_name_servers::DiscoverNameServersUseCase;
pub use query_authoritative::{QueryAuthoritativeUseCase, DEFAULT_AUTHORITATIVE_PORT};
pub use resolve_name_server_addresses::ResolveNameServerAddressesUseCase;
