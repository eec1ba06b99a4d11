pub mod dig;

// Re-export use cases
pub use dig::{
    DiscoverNameServersUseCase, QueryAuthoritativeUseCase, ResolveNameServerAddressesUseCase,
};
