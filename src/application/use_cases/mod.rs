/// Use cases module containing application orchestration
mod show_listings;

pub use show_listings::ShowListingsUseCase;
