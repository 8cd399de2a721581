mod external;
pub mod storage;

pub use external::{GameHubGateway, StakeGateway};
pub use storage::{AdminRepository, GameRepository, OpenGamesRepository};
