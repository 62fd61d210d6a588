//! Routing Application Layer (UseCase)

mod routing_usecase;

pub use routing_usecase::{
    RoutingInput, RoutingOutput, RoutingStats, RoutingUseCase, RoutingUseCaseImpl,
};
